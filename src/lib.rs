pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{catalog_config::CatalogConfig, cli::LocalStorage};
pub use core::{
    annotator::PageAnnotator,
    catalog::Catalog,
    engine::{summary_line, AnnotateEngine},
};
pub use domain::model::{PageOutcome, RunSummary};
pub use utils::error::{AnnotateError, Result};
