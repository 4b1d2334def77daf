pub mod assistant;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod monitor;
pub mod navigator;

pub use gogo_common as protocol;
pub use gogo_parser as parser;
