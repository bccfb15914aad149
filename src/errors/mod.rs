pub mod types;
pub mod classification;

pub use types::DroneError;
pub use classification::ErrorClassification;
