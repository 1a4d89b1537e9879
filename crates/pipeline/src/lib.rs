pub mod config;
pub mod error;
pub mod load;
pub mod scripts;
