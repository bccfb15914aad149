pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod mapping;
pub mod models;
pub mod nmap;
pub mod utils;
