//! Service categories offered on the contact form and the packages each one
//! can be booked with.

use std::fmt;
use std::str::FromStr;

use super::error::BookingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    CustomDesign,
    Ecommerce,
    Maintenance,
    Remodeling,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::CustomDesign,
        Service::Ecommerce,
        Service::Maintenance,
        Service::Remodeling,
    ];

    /// Value used in the `<select>` and in the `service` query parameter.
    pub fn key(self) -> &'static str {
        match self {
            Service::CustomDesign => "custom-design",
            Service::Ecommerce => "ecommerce",
            Service::Maintenance => "maintenance",
            Service::Remodeling => "remodeling",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::CustomDesign => "Custom Web Design",
            Service::Ecommerce => "E-commerce Website",
            Service::Maintenance => "Website Maintenance",
            Service::Remodeling => "Website Remodeling",
        }
    }

    pub fn packages(self) -> &'static [&'static str] {
        match self {
            Service::CustomDesign => &["Business Professional", "Legacy Impact"],
            Service::Ecommerce => &["E-commerce & Engagement", "Legacy Impact"],
            Service::Maintenance => &["Monthly Maintenance"],
            Service::Remodeling => &["Website Remodel"],
        }
    }

    pub fn offers(self, package: &str) -> bool {
        self.packages().iter().any(|p| *p == package)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Service {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.key() == s)
            .ok_or_else(|| BookingError::UnknownService { input: s.to_string() })
    }
}

/// Packages that can be chosen for the given raw service key. Unknown or empty
/// keys have none.
pub fn packages_for(service: &str) -> &'static [&'static str] {
    service.parse::<Service>().map(Service::packages).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries() {
        assert_eq!(
            packages_for("custom-design"),
            &["Business Professional", "Legacy Impact"]
        );
        assert_eq!(
            packages_for("ecommerce"),
            &["E-commerce & Engagement", "Legacy Impact"]
        );
        assert_eq!(packages_for("maintenance"), &["Monthly Maintenance"]);
        assert_eq!(packages_for("remodeling"), &["Website Remodel"]);
    }

    #[test]
    fn test_unknown_service_has_no_packages() {
        for input in ["", "seo", "Custom-Design", "ecommerce ", "custom design"] {
            assert!(packages_for(input).is_empty(), "{input:?} should be empty");
        }
    }

    #[test]
    fn test_service_key_parses_back() {
        for service in Service::ALL {
            assert_eq!(service.key().parse::<Service>(), Ok(service));
            assert!(!service.packages().is_empty());
        }
    }

    #[test]
    fn test_unknown_service_error() {
        let err = "hosting".parse::<Service>().unwrap_err();
        assert_eq!(
            err,
            BookingError::UnknownService {
                input: "hosting".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown service: hosting");
    }

    #[test]
    fn test_offers() {
        assert!(Service::Ecommerce.offers("Legacy Impact"));
        assert!(!Service::Maintenance.offers("Legacy Impact"));
        assert!(!Service::Remodeling.offers(""));
    }
}
