//! Static navigation index generator for HTML content trees.

pub mod builder;
pub mod config;
pub mod error;
pub mod fs;
pub mod model;
pub mod scanner;
pub mod title;

pub use builder::{IndexBuilder, WriteSummary};
pub use config::NavConfig;
pub use error::NavError;
pub use model::{Entry, EntryKind, Index, count_documents};
pub use title::extract_title;
