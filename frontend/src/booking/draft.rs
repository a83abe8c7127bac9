//! Field store for the consultation booking form.
//!
//! Every edit goes through [`BookingDraft::set_field`], which replaces a single
//! field and leaves the rest untouched. The only cross-field effect is keeping
//! derived selections consistent with the field that determines them: a
//! package is dropped when the service no longer offers it, and a time is
//! dropped when the date stops being bookable.

use std::rc::Rc;

use yew::Reducible;

use super::availability::is_bookable;
use super::catalog::Service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Service,
    Package,
    Date,
    Time,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub service: Option<Service>,
    pub package: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingDraft {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Service => {
                self.service = if value.is_empty() {
                    None
                } else {
                    match value.parse::<Service>() {
                        Ok(service) => Some(service),
                        Err(e) => {
                            log::warn!("Ignoring service selection: {}", e);
                            None
                        }
                    }
                };
                if !self.package.is_empty() && !self.service.map_or(false, |s| s.offers(&self.package)) {
                    log::debug!("Clearing package {:?} no longer offered", self.package);
                    self.package.clear();
                }
            }
            Field::Package => self.package = value,
            Field::Date => {
                self.date = value;
                if !self.time.is_empty() && !is_bookable(&self.date) {
                    log::debug!("Clearing time {:?} for unbookable date", self.time);
                    self.time.clear();
                }
            }
            Field::Time => self.time = value,
            Field::Message => self.message = value,
        }
    }

    /// Key of the selected service, empty when nothing is selected.
    pub fn service_key(&self) -> &'static str {
        self.service.map(Service::key).unwrap_or("")
    }
}

pub enum BookingAction {
    Set(Field, String),
}

impl Reducible for BookingDraft {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BookingAction::Set(field, value) => {
                let mut next = (*self).clone();
                next.set_field(field, value);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(edits: &[(Field, &str)]) -> BookingDraft {
        let mut draft = BookingDraft::default();
        for (field, value) in edits {
            draft.set_field(*field, value.to_string());
        }
        draft
    }

    #[test]
    fn test_set_field_leaves_other_fields() {
        let mut draft = draft_with(&[
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Message, "Hello"),
        ]);
        let before = draft.clone();
        draft.set_field(Field::Email, "ada@lovelace.dev".to_string());

        assert_eq!(draft.email, "ada@lovelace.dev");
        assert_eq!(
            draft,
            BookingDraft {
                email: "ada@lovelace.dev".to_string(),
                ..before
            }
        );
    }

    #[test]
    fn test_no_validation_on_free_text() {
        let draft = draft_with(&[(Field::Email, "not an email"), (Field::Name, "")]);
        assert_eq!(draft.email, "not an email");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_service_selection() {
        let draft = draft_with(&[(Field::Service, "maintenance")]);
        assert_eq!(draft.service, Some(Service::Maintenance));
        assert_eq!(draft.service_key(), "maintenance");

        let draft = draft_with(&[(Field::Service, "maintenance"), (Field::Service, "")]);
        assert_eq!(draft.service, None);
        assert_eq!(draft.service_key(), "");
    }

    #[test]
    fn test_unknown_service_is_unset() {
        let draft = draft_with(&[(Field::Service, "ecommerce"), (Field::Service, "hosting")]);
        assert_eq!(draft.service, None);
    }

    #[test]
    fn test_service_change_keeps_shared_package() {
        let draft = draft_with(&[
            (Field::Service, "custom-design"),
            (Field::Package, "Legacy Impact"),
            (Field::Service, "ecommerce"),
        ]);
        assert_eq!(draft.package, "Legacy Impact");
    }

    #[test]
    fn test_service_change_clears_stale_package() {
        let draft = draft_with(&[
            (Field::Service, "custom-design"),
            (Field::Package, "Business Professional"),
            (Field::Service, "remodeling"),
        ]);
        assert_eq!(draft.service, Some(Service::Remodeling));
        assert_eq!(draft.package, "");
    }

    #[test]
    fn test_clearing_service_clears_package() {
        let draft = draft_with(&[
            (Field::Service, "maintenance"),
            (Field::Package, "Monthly Maintenance"),
            (Field::Service, ""),
        ]);
        assert_eq!(draft.package, "");
    }

    #[test]
    fn test_unbookable_date_clears_time() {
        let draft = draft_with(&[
            (Field::Date, "2024-06-03"),
            (Field::Time, "10:30"),
            (Field::Date, "2024-06-04"),
        ]);
        assert_eq!(draft.time, "10:30");

        let draft = draft_with(&[
            (Field::Date, "2024-06-03"),
            (Field::Time, "10:30"),
            (Field::Date, "2024-06-08"),
        ]);
        assert_eq!(draft.date, "2024-06-08");
        assert_eq!(draft.time, "");
    }

    #[test]
    fn test_reducer_produces_new_state() {
        let draft = Rc::new(BookingDraft::default());
        let next = draft
            .clone()
            .reduce(BookingAction::Set(Field::Name, "Grace".to_string()));
        assert_eq!(draft.name, "");
        assert_eq!(next.name, "Grace");
    }
}
