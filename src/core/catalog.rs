use crate::domain::model::{CityRegistry, ServiceCatalog, ServiceEntry};
use std::collections::HashMap;

const SERVICES: &[(&str, &str, &str, &str)] = &[
    ("car-lockout", "🚗", "Car Lockout", "Locked out of your car?"),
    ("house-lockout", "🏠", "House Lockout", "Locked out of your home?"),
    ("lock-change", "🔒", "Lock Change & Rekey", "Upgrade your security"),
    ("car-key-replacement", "🔑", "Car Key Replacement", "Lost your car keys?"),
    ("emergency-locksmith", "🚨", "24/7 Emergency", "Urgent locksmith help"),
];

const CITY_NAMES: &[(&str, &str)] = &[
    ("welland", "Welland"),
    ("st-catharines", "St. Catharines"),
    ("niagara-falls", "Niagara Falls"),
    ("thorold", "Thorold"),
    ("port-colborne", "Port Colborne"),
    ("fort-erie", "Fort Erie"),
    ("grimsby", "Grimsby"),
    ("lincoln", "Lincoln"),
    ("pelham", "Pelham"),
    ("niagara-on-the-lake", "Niagara-on-the-Lake"),
    ("beamsville", "Beamsville"),
    ("fonthill", "Fonthill"),
    ("wainfleet", "Wainfleet"),
    ("west-lincoln", "West Lincoln"),
];

/// Services and city names the annotator works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub services: ServiceCatalog,
    pub cities: CityRegistry,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Self {
        let services = SERVICES
            .iter()
            .map(|(key, icon, title, description)| ServiceEntry {
                key: key.to_string(),
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect();

        let cities = CITY_NAMES
            .iter()
            .map(|(key, name)| (key.to_string(), name.to_string()))
            .collect::<HashMap<_, _>>();

        Self {
            services: ServiceCatalog::new(services),
            cities: CityRegistry::new(cities),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_service_order() {
        let catalog = Catalog::embedded();
        let keys: Vec<&str> = catalog.services.keys().collect();
        assert_eq!(
            keys,
            vec![
                "car-lockout",
                "house-lockout",
                "lock-change",
                "car-key-replacement",
                "emergency-locksmith",
            ]
        );
    }

    #[test]
    fn test_embedded_city_names() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.cities.display_name("st-catharines"), "St. Catharines");
        assert_eq!(catalog.cities.display_name("west-lincoln"), "West Lincoln");
    }
}
