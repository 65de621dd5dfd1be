mod access_log;
mod analysis;
mod bot;
mod classifier;
mod config;
mod engine;
mod error;
mod helpers;
mod identity;
mod query;
mod ranking;
mod tokenizer;
mod types;

pub use access_log::{AccessLogEntry, AccessLogParser};
pub use analysis::{analyze, analyze_file, Summary};
pub use bot::is_bot;
pub use classifier::{BatchStats, LineOutcome, UaClassifier};
pub use config::Config;
pub use engine::{EngineResolver, EngineRule};
pub use error::{Error, Result};
pub use identity::{AliasTable, PRODUCT_ALIASES};
pub use query::{Relation, VersionQuery, VersionTerm};
pub use ranking::{rank_tokens, GENERIC_PRODUCT_NAMES};
pub use tokenizer::parse_user_agent;
pub use types::*;
