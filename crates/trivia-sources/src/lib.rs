//! trivia-sources: Question sources and configuration.
//!
//! Implements the `QuestionSource` trait for the trivia REST backend and for
//! local TOML question banks.

pub mod bank;
pub mod config;
pub mod http;
pub mod memory;

pub use bank::{load_bank, validate_bank, QuestionBank};
pub use config::{create_source, load_config, SourceConfig, TriviaConfig};
pub use http::HttpSource;
pub use memory::MemorySource;
