pub mod alias;
pub mod codec;
pub mod config;
pub mod datetime;
pub mod error;
pub mod model;
pub mod parser;
pub mod reply;
pub mod session;
pub mod storage;
pub mod tokenizer;
pub mod validate;

pub use alias::{AliasEntry, AliasRegistry, CommandId};
pub use config::AppConfig;
pub use error::{Result, RevelError};
pub use model::*;
pub use parser::{parse, Command};
pub use reply::{Reply, ReplyKind};
pub use session::Session;
pub use storage::{AliasStorage, TaskStorage};
