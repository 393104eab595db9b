pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod types;

pub use pipeline::read::read_package;
pub use types::message::InfoMessage;
pub use types::training::Training;
