use crate::core::catalog::Catalog;
use crate::core::Storage;
use crate::domain::model::{
    aggregate_filename, page_filename, AggregateLink, PageIdentity, RelatedLink, RelatedLinks,
};

/// Sibling service pages for the same city, in catalog order, plus the
/// city's aggregate page. Every existence check hits storage at call time.
pub async fn related_links<S: Storage>(
    storage: &S,
    catalog: &Catalog,
    identity: &PageIdentity,
) -> RelatedLinks {
    let mut links = Vec::new();

    for entry in catalog.services.entries() {
        if entry.key == identity.service {
            continue;
        }

        let target = page_filename(&entry.key, &identity.city);
        if storage.exists(&target).await {
            links.push(RelatedLink {
                icon: entry.icon.clone(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                target,
            });
        } else {
            tracing::debug!("No {} page for {}", entry.key, identity.city);
        }
    }

    let aggregate_target = aggregate_filename(&identity.city);
    let aggregate = if storage.exists(&aggregate_target).await {
        Some(AggregateLink {
            target: aggregate_target,
            city_name: catalog.cities.display_name(&identity.city),
        })
    } else {
        None
    };

    RelatedLinks { links, aggregate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use std::collections::HashSet;

    struct FakeStorage {
        files: HashSet<String>,
    }

    impl FakeStorage {
        fn with(files: &[&str]) -> Self {
            Self {
                files: files.iter().map(|f| f.to_string()).collect(),
            }
        }
    }

    impl Storage for FakeStorage {
        async fn exists(&self, name: &str) -> bool {
            self.files.contains(name)
        }

        async fn list_files(&self) -> Result<Vec<String>> {
            Ok(self.files.iter().cloned().collect())
        }

        async fn read_to_string(&self, _name: &str) -> Result<String> {
            Ok(String::new())
        }

        async fn write_file(&self, _name: &str, _data: &str) -> Result<()> {
            Ok(())
        }
    }

    fn identity(service: &str, city: &str) -> PageIdentity {
        PageIdentity {
            service: service.to_string(),
            city: city.to_string(),
        }
    }

    #[tokio::test]
    async fn test_links_follow_catalog_order_and_skip_self() {
        // Listed out of catalog order on purpose.
        let storage = FakeStorage::with(&[
            "emergency-locksmith-welland.html",
            "car-key-replacement-welland.html",
            "lock-change-welland.html",
            "house-lockout-welland.html",
            "car-lockout-welland.html",
        ]);
        let catalog = Catalog::embedded();

        let related = related_links(&storage, &catalog, &identity("car-lockout", "welland")).await;
        let targets: Vec<&str> = related.links.iter().map(|l| l.target.as_str()).collect();

        assert_eq!(
            targets,
            vec![
                "house-lockout-welland.html",
                "lock-change-welland.html",
                "car-key-replacement-welland.html",
                "emergency-locksmith-welland.html",
            ]
        );
        assert!(related.aggregate.is_none());
    }

    #[tokio::test]
    async fn test_only_existing_pages_are_linked() {
        let storage = FakeStorage::with(&[
            "house-lockout-welland.html",
            "car-lockout-welland.html",
            "lock-change-thorold.html",
        ]);
        let catalog = Catalog::embedded();

        let related = related_links(&storage, &catalog, &identity("car-lockout", "welland")).await;

        assert_eq!(related.links.len(), 1);
        assert_eq!(related.links[0].target, "house-lockout-welland.html");
        assert_eq!(related.links[0].title, "House Lockout");
        assert_eq!(related.links[0].icon, "🏠");
    }

    #[tokio::test]
    async fn test_aggregate_link_uses_display_name() {
        let storage = FakeStorage::with(&["st-catharines-unused.html", "locksmith-st-catharines.html"]);
        let catalog = Catalog::embedded();

        let related =
            related_links(&storage, &catalog, &identity("lock-change", "st-catharines")).await;

        assert!(related.links.is_empty());
        assert!(related.is_empty());
        let aggregate = related.aggregate.unwrap();
        assert_eq!(aggregate.target, "locksmith-st-catharines.html");
        assert_eq!(aggregate.city_name, "St. Catharines");
    }

    #[tokio::test]
    async fn test_nothing_related() {
        let storage = FakeStorage::with(&["emergency-locksmith-fonthill.html"]);
        let catalog = Catalog::embedded();

        let related =
            related_links(&storage, &catalog, &identity("emergency-locksmith", "fonthill")).await;

        assert!(related.is_empty());
    }
}
