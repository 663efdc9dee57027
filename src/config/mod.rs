pub mod catalog_config;
pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "related-services")]
#[command(about = "Inject a Related Services section into local service pages")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Directory holding the HTML pages")]
    pub dir: String,

    #[arg(long, help = "TOML file overriding the built-in services and city names")]
    pub catalog: Option<String>,

    #[arg(long, help = "Report what would change without writing")]
    pub dry_run: bool,

    #[arg(long, help = "Log per-file I/O failures and keep going")]
    pub continue_on_error: bool,

    #[arg(long, help = "Print the run summary as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn working_dir(&self) -> &str {
        &self.dir
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn continue_on_error(&self) -> bool {
        self.continue_on_error
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("dir", &self.dir)?;
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_plain_invocation() {
        let config = CliConfig::parse_from(["related-services"]);
        assert_eq!(config.working_dir(), ".");
        assert!(config.catalog.is_none());
        assert!(!config.dry_run());
        assert!(!config.continue_on_error());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "related-services",
            "--dir",
            "site",
            "--catalog",
            "catalog.toml",
            "--dry-run",
            "--continue-on-error",
            "-v",
        ]);
        assert_eq!(config.working_dir(), "site");
        assert_eq!(config.catalog.as_deref(), Some("catalog.toml"));
        assert!(config.dry_run());
        assert!(config.continue_on_error());
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_dir_is_rejected() {
        let config = CliConfig::parse_from(["related-services", "--dir", ""]);
        assert!(config.validate().is_err());
    }
}
