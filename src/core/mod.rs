pub mod aggregate;
pub mod engine;
pub mod export;
pub mod report;
pub mod table;
