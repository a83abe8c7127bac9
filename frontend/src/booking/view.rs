use super::availability::is_bookable;
use super::catalog::packages_for;
use super::draft::BookingDraft;
use super::slots::time_slots;

/// Where the visitor is in the booking flow, derived from the draft alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Empty,
    ServiceChosen,
    PackageChosen,
    WeekdayChosen,
    WeekendChosen,
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub label: String,
    pub selected: bool,
}

/// Everything the contact form needs to decide what to render.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingView {
    pub packages: Option<Vec<Choice>>,
    pub slots: Option<Vec<Choice>>,
}

impl BookingView {
    pub fn derive(draft: &BookingDraft) -> Self {
        let packages = match packages_for(draft.service_key()) {
            [] => None,
            packages => Some(
                packages
                    .iter()
                    .map(|p| Choice {
                        label: p.to_string(),
                        selected: draft.package == *p,
                    })
                    .collect(),
            ),
        };

        let slots = (!draft.date.is_empty() && is_bookable(&draft.date)).then(|| {
            time_slots()
                .map(|slot| Choice {
                    selected: draft.time == slot,
                    label: slot,
                })
                .collect()
        });

        Self { packages, slots }
    }
}

pub fn stage(draft: &BookingDraft, submitted: bool) -> Stage {
    if submitted {
        return Stage::Submitted;
    }
    if !draft.date.is_empty() {
        return if is_bookable(&draft.date) {
            Stage::WeekdayChosen
        } else {
            Stage::WeekendChosen
        };
    }
    match draft.service {
        Some(service) if service.offers(&draft.package) => Stage::PackageChosen,
        Some(_) => Stage::ServiceChosen,
        None => Stage::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::catalog::Service;
    use crate::booking::draft::Field;

    fn draft(edits: &[(Field, &str)]) -> BookingDraft {
        let mut draft = BookingDraft::default();
        for (field, value) in edits {
            draft.set_field(*field, value.to_string());
        }
        draft
    }

    fn labels(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_empty_draft_hides_everything() {
        let view = BookingView::derive(&BookingDraft::default());
        assert!(view.packages.is_none());
        assert!(view.slots.is_none());
        assert_eq!(stage(&BookingDraft::default(), false), Stage::Empty);
    }

    #[test]
    fn test_package_group_offers_only_catalog_entries() {
        for service in Service::ALL {
            let view = BookingView::derive(&draft(&[(Field::Service, service.key())]));
            let packages = view.packages.expect("package group visible");
            assert_eq!(labels(&packages), packages_for(service.key()));
            assert!(packages.iter().all(|c| !c.selected));
        }
    }

    #[test]
    fn test_unknown_service_hides_packages() {
        let view = BookingView::derive(&draft(&[(Field::Service, "branding")]));
        assert!(view.packages.is_none());
    }

    #[test]
    fn test_selected_package_is_highlighted() {
        let d = draft(&[(Field::Service, "ecommerce"), (Field::Package, "Legacy Impact")]);
        let packages = BookingView::derive(&d).packages.unwrap();
        let selected: Vec<&str> = packages
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Legacy Impact"]);
        assert_eq!(stage(&d, false), Stage::PackageChosen);
    }

    #[test]
    fn test_foreign_package_is_not_highlighted() {
        let d = draft(&[(Field::Package, "Website Remodel"), (Field::Service, "ecommerce")]);
        let packages = BookingView::derive(&d).packages.unwrap();
        assert!(packages.iter().all(|c| !c.selected));
        assert_eq!(stage(&d, false), Stage::ServiceChosen);
    }

    #[test]
    fn test_weekday_shows_slots() {
        let d = draft(&[(Field::Date, "2024-06-05"), (Field::Time, "13:00")]);
        let slots = BookingView::derive(&d).slots.unwrap();
        assert_eq!(slots.len(), 18);
        let selected: Vec<&str> = slots
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["13:00"]);
        assert_eq!(stage(&d, false), Stage::WeekdayChosen);
    }

    #[test]
    fn test_weekend_and_invalid_dates_hide_slots() {
        for date in ["2024-06-08", "2024-06-09", "garbage"] {
            let d = draft(&[(Field::Date, date)]);
            assert!(BookingView::derive(&d).slots.is_none(), "{date}");
            assert_eq!(stage(&d, false), Stage::WeekendChosen);
        }
    }

    #[test]
    fn test_submitted_does_not_touch_fields() {
        let d = draft(&[(Field::Service, "maintenance")]);
        assert_eq!(stage(&d, true), Stage::Submitted);
        assert_eq!(stage(&d, false), Stage::ServiceChosen);
    }
}
