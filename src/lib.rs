pub use revel_shell::cli;
pub use revel_shell::commands;
pub use revel_shell::config;
pub use revel_shell::logging;
pub use revel_shell::repl;
pub use revel_shell::AppConfig;

pub use revel_core as core;
pub use revel_core::model;
pub use revel_core::parser;
