pub mod cli_options;
pub mod config;
pub mod error;
pub mod launch;
pub mod privilege;
pub mod prompt;
pub mod request;
pub mod settings;
pub mod spawn;
pub mod utils;
