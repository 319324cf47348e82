pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod repl;

pub use revel_core as core;
pub use revel_core::model;
pub use revel_core::parser;

pub use revel_core::AppConfig;
