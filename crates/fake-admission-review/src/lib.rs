pub mod admission_request;
pub mod cli;
pub mod config;
pub mod errors;
pub mod manifest;
pub mod old_object;
pub mod output;
pub mod resource;
pub mod scaffold;
pub mod tracing;
