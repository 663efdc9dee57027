use crate::core::catalog::Catalog;
use crate::domain::model::{ServiceCatalog, ServiceEntry};
use crate::utils::error::{AnnotateError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_slug, validate_unique, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Optional catalog override loaded from TOML.
///
/// ```toml
/// [[services]]
/// key = "car-lockout"
/// icon = "🚗"
/// title = "Car Lockout"
/// description = "Locked out of your car?"
///
/// [cities]
/// welland = "Welland"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub services: Option<Vec<ServiceEntry>>,
    pub cities: Option<HashMap<String, String>>,
}

impl CatalogConfig {
    /// Loads and parses a TOML catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnnotateError::file_access(path.display().to_string(), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AnnotateError::CatalogParseError { message, .. } => AnnotateError::CatalogParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AnnotateError::CatalogParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Services replace the embedded list; cities merge over the embedded registry.
    pub fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::embedded();
        if let Some(services) = self.services {
            catalog.services = ServiceCatalog::new(services);
        }
        if let Some(cities) = self.cities {
            catalog.cities.extend(cities);
        }
        catalog
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        if let Some(services) = &self.services {
            if services.is_empty() {
                return Err(AnnotateError::MissingConfigError {
                    field: "services".to_string(),
                });
            }

            for service in services {
                validate_slug("services.key", &service.key)?;
                validate_non_empty_string("services.title", &service.title)?;
            }
            validate_unique("services.key", services.iter().map(|s| s.key.as_str()))?;
        }

        if let Some(cities) = &self.cities {
            for (key, name) in cities {
                validate_slug("cities", key)?;
                validate_non_empty_string("cities", name)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_replace_embedded_list() {
        let config = CatalogConfig::from_toml_str(
            r#"
[[services]]
key = "safe-opening"
icon = "🗄"
title = "Safe Opening"
description = "Locked safe?"

[[services]]
key = "car-lockout"
icon = "🚗"
title = "Car Lockout"
description = "Locked out of your car?"
"#,
        )
        .unwrap();
        config.validate().unwrap();

        let catalog = config.into_catalog();
        let keys: Vec<&str> = catalog.services.keys().collect();
        assert_eq!(keys, vec!["safe-opening", "car-lockout"]);
        assert_eq!(catalog.cities.display_name("st-catharines"), "St. Catharines");
    }

    #[test]
    fn test_cities_merge_over_embedded() {
        let config = CatalogConfig::from_toml_str(
            r#"
[cities]
smithville = "Smithville Village"
welland = "City of Welland"
"#,
        )
        .unwrap();
        config.validate().unwrap();

        let catalog = config.into_catalog();
        assert_eq!(catalog.services.len(), 5);
        assert_eq!(catalog.cities.display_name("smithville"), "Smithville Village");
        assert_eq!(catalog.cities.display_name("welland"), "City of Welland");
        assert_eq!(catalog.cities.display_name("thorold"), "Thorold");
    }

    #[test]
    fn test_rejects_bad_catalogs() {
        let empty = CatalogConfig {
            services: Some(vec![]),
            cities: None,
        };
        assert!(empty.validate().is_err());

        let duplicated = CatalogConfig::from_toml_str(
            r#"
[[services]]
key = "lock-change"
icon = "🔒"
title = "Lock Change"
description = ""

[[services]]
key = "lock-change"
icon = "🔑"
title = "Rekey"
description = ""
"#,
        )
        .unwrap();
        assert!(duplicated.validate().is_err());

        assert!(CatalogConfig::from_toml_str("services = 3").is_err());
        assert!(CatalogConfig::from_toml_str("[extra]\nx = 1").is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = CatalogConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("catalog.toml"));
    }
}
