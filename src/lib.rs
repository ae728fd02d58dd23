pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod icon;
pub mod logger;

pub use config::IconSpec;
pub use error::IconError;
pub use generator::{GeneratedIcon, generate_icon, generate_icon_at, output_path};
