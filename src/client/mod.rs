pub mod lair;
pub mod types;

pub use lair::LairClient;
pub use types::*;
