use crate::core::catalog::Catalog;
use crate::core::identity::IdentityParser;
use crate::core::insert::{has_section, insert_fragment};
use crate::core::related::related_links;
use crate::core::render::render_fragment;
use crate::core::Storage;
use crate::domain::model::{PageIdentity, PageOutcome};
use crate::utils::error::Result;

/// Runs parse → related links → render → insert for one page.
pub struct PageAnnotator<S: Storage> {
    storage: S,
    catalog: Catalog,
    parser: IdentityParser,
}

impl<S: Storage> PageAnnotator<S> {
    pub fn new(storage: S, catalog: Catalog) -> Result<Self> {
        let parser = IdentityParser::new(&catalog.services)?;
        Ok(Self {
            storage,
            catalog,
            parser,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn identify(&self, filename: &str) -> Option<PageIdentity> {
        self.parser.parse(filename)
    }

    /// Returns `None` when `filename` is not a service page. With `dry_run`
    /// the outcome is computed but nothing is written.
    pub async fn annotate(&self, filename: &str, dry_run: bool) -> Result<Option<PageOutcome>> {
        let Some(identity) = self.parser.parse(filename) else {
            tracing::debug!("Ignoring {}: not a service page", filename);
            return Ok(None);
        };

        let content = self.storage.read_to_string(filename).await?;
        if has_section(&content) {
            return Ok(Some(PageOutcome::AlreadyPresent));
        }

        let related = related_links(&self.storage, &self.catalog, &identity).await;
        let city_name = self.catalog.cities.display_name(&identity.city);
        let fragment = render_fragment(&related, &city_name);

        tracing::debug!(
            "{}: {} related service(s), aggregate page {}",
            filename,
            related.links.len(),
            if related.aggregate.is_some() { "present" } else { "absent" }
        );

        let insertion = insert_fragment(&content, &fragment);
        if let Some(updated) = insertion.content {
            if dry_run {
                tracing::debug!("Dry run, not writing {}", filename);
            } else {
                self.storage.write_file(filename, &updated).await?;
            }
        }

        Ok(Some(insertion.outcome))
    }
}
