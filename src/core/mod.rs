pub mod annotator;
pub mod catalog;
pub mod engine;
pub mod identity;
pub mod insert;
pub mod related;
pub mod render;

pub use crate::domain::model::{PageIdentity, PageOutcome, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
