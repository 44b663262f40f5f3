pub mod angle;
pub mod config;
pub mod constants;
pub mod types;

pub use angle::*;
pub use config::*;
pub use constants::*;
pub use types::*;
