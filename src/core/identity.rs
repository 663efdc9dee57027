use crate::domain::model::{PageIdentity, ServiceCatalog};
use crate::utils::error::Result;
use regex::Regex;

/// Recognizes `{service}-{city}.html` for the services of one catalog.
#[derive(Debug, Clone)]
pub struct IdentityParser {
    pattern: Regex,
}

impl IdentityParser {
    pub fn new(services: &ServiceCatalog) -> Result<Self> {
        // Regex alternation is leftmost-first, so longer keys go first.
        let mut keys: Vec<&str> = services.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternatives = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"^(?:({}))-(.+)\.html$", alternatives))?;

        Ok(Self { pattern })
    }

    /// `None` means the file is not a service page.
    pub fn parse(&self, filename: &str) -> Option<PageIdentity> {
        let captures = self.pattern.captures(filename)?;
        Some(PageIdentity {
            service: captures.get(1)?.as_str().to_string(),
            city: captures.get(2)?.as_str().to_string(),
        })
    }
}
