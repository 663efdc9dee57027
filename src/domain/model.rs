use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One service offered in every city, rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub key: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Services in declaration order. Card order on every page follows this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityRegistry {
    names: HashMap<String, String>,
}

impl CityRegistry {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn extend(&mut self, names: impl IntoIterator<Item = (String, String)>) {
        self.names.extend(names);
    }

    /// Registered name, or the key with `-` turned into spaces and each word capitalized.
    pub fn display_name(&self, city_key: &str) -> String {
        match self.names.get(city_key) {
            Some(name) => name.clone(),
            None => title_case(&city_key.replace('-', " ")),
        }
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdentity {
    pub service: String,
    pub city: String,
}

pub fn page_filename(service: &str, city: &str) -> String {
    format!("{}-{}.html", service, city)
}

/// Filename of the page listing every service for a city.
pub fn aggregate_filename(city: &str) -> String {
    format!("locksmith-{}.html", city)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedLink {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateLink {
    pub target: String,
    pub city_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedLinks {
    pub links: Vec<RelatedLink>,
    pub aggregate: Option<AggregateLink>,
}

impl RelatedLinks {
    /// No sibling service pages. The aggregate link alone never makes a section.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    Added,
    AlreadyPresent,
    NoRelatedServices,
    NoInsertionPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub added: usize,
    pub already_present: usize,
    pub no_related: usize,
    pub no_insertion_point: usize,
    pub failed: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Added => self.added += 1,
            PageOutcome::AlreadyPresent => self.already_present += 1,
            PageOutcome::NoRelatedServices => self.no_related += 1,
            PageOutcome::NoInsertionPoint => self.no_insertion_point += 1,
        }
    }

    pub fn processed(&self) -> usize {
        self.added + self.already_present + self.no_related + self.no_insertion_point + self.failed
    }
}
