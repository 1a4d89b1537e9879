pub mod conversion;
pub mod reader;
