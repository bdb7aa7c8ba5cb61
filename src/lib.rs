pub mod choice;
pub mod config;
pub mod logging;
pub mod version;
