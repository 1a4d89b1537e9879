pub mod adapter;
pub mod client;
pub mod encoder;
