pub mod error;
pub mod quality;
