pub mod message;
pub mod report;
pub mod training;
