pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fields;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod sailor;
pub mod source;
