//! Reads the `service` and `package` query parameters that other pages use to
//! preselect options on the contact form.

use super::draft::{BookingAction, Field};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrefillParams {
    pub service: Option<String>,
    pub package: Option<String>,
}

impl PrefillParams {
    /// Accepts a query string with or without the leading `?`. Keys other than
    /// `service` and `package` are ignored; empty values count as absent and the
    /// first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let mut params = PrefillParams::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode(key).as_str() {
                "service" => &mut params.service,
                "package" => &mut params.package,
                _ => continue,
            };
            let value = decode(value);
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Field writes in the order they are applied: service first, so that the
    /// package is checked against the right catalog entry afterwards.
    pub fn into_actions(self) -> Vec<BookingAction> {
        let mut actions = Vec::new();
        if let Some(service) = self.service {
            actions.push(BookingAction::Set(Field::Service, service));
        }
        if let Some(package) = self.package {
            actions.push(BookingAction::Set(Field::Package, package));
        }
        actions
    }

    pub fn is_empty(&self) -> bool {
        self.service.is_none() && self.package.is_none()
    }
}

/// Builds the contact page link used by "Get Started" buttons.
pub fn contact_href(service: &str, package: Option<&str>) -> String {
    let mut href = format!("/contact?service={}", urlencoding::encode(service));
    if let Some(package) = package {
        href.push_str("&package=");
        href.push_str(&urlencoding::encode(package));
    }
    href
}

// Form encoding uses '+' for spaces; malformed escapes are passed through as-is.
fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::catalog::Service;
    use crate::booking::draft::BookingDraft;
    use std::rc::Rc;
    use yew::Reducible;

    fn apply(query: &str) -> BookingDraft {
        let mut draft = Rc::new(BookingDraft::default());
        for action in PrefillParams::parse(query).into_actions() {
            draft = draft.reduce(action);
        }
        (*draft).clone()
    }

    #[test]
    fn test_service_and_package_from_query() {
        let draft = apply("?service=ecommerce&package=Legacy%20Impact");
        assert_eq!(draft.service, Some(Service::Ecommerce));
        assert_eq!(draft.package, "Legacy Impact");
    }

    #[test]
    fn test_plus_and_ampersand_decoding() {
        let params = PrefillParams::parse("package=E-commerce+%26+Engagement&service=ecommerce");
        assert_eq!(params.package.as_deref(), Some("E-commerce & Engagement"));
        assert_eq!(params.service.as_deref(), Some("ecommerce"));
    }

    #[test]
    fn test_absent_params_are_noop() {
        assert!(PrefillParams::parse("").is_empty());
        assert!(PrefillParams::parse("?").is_empty());
        assert!(PrefillParams::parse("?utm_source=mail&ref=nav").is_empty());
        assert!(PrefillParams::parse("?service=&package").is_empty());
        assert_eq!(apply("?utm_source=mail"), BookingDraft::default());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = PrefillParams::parse("service=maintenance&service=remodeling");
        assert_eq!(params.service.as_deref(), Some("maintenance"));
    }

    #[test]
    fn test_package_without_service_passes_through() {
        let draft = apply("?package=Custom%20Thing");
        assert_eq!(draft.service, None);
        assert_eq!(draft.package, "Custom Thing");
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        let params = PrefillParams::parse("package=100%");
        assert_eq!(params.package.as_deref(), Some("100%"));
    }

    #[test]
    fn test_contact_href_round_trips() {
        let href = contact_href("ecommerce", Some("E-commerce & Engagement"));
        assert_eq!(
            href,
            "/contact?service=ecommerce&package=E-commerce%20%26%20Engagement"
        );
        let query = href.split_once('?').map(|(_, q)| q).unwrap();
        let draft = apply(query);
        assert_eq!(draft.service, Some(Service::Ecommerce));
        assert_eq!(draft.package, "E-commerce & Engagement");

        assert_eq!(contact_href("remodeling", None), "/contact?service=remodeling");
    }
}
