pub mod read;
pub mod report;
