// Library modules, shared by the binary and integration tests
pub mod audio;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod kitten;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;
pub mod text_processing;
pub mod utils;
