//! The single transient acknowledgement shown after the form is submitted.
//!
//! Each raise is tagged with a ticket handed out by the owning component. The
//! dismissal timer carries the ticket it was scheduled for, so an expiry
//! belonging to an earlier submission can never clear a newer notification.

use std::rc::Rc;

use yew::Reducible;

use crate::config::NOTIFICATION_DISMISS_MS;

pub const SUBMITTED_MESSAGE: &str =
    "Request sent! We’ll reach out shortly to confirm your consultation.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn submitted() -> Self {
        Self::success(SUBMITTED_MESSAGE)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Active {
    ticket: u64,
    notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    active: Option<Active>,
}

#[derive(Debug, PartialEq)]
pub enum NotificationAction {
    Raise {
        ticket: u64,
        notification: Notification,
    },
    Expire {
        ticket: u64,
    },
}

impl NotificationCenter {
    /// Replaces whatever is showing. `ticket` is what the dismissal timer will
    /// present and must differ from the previous raise.
    pub fn raise(&mut self, ticket: u64, notification: Notification) {
        self.active = Some(Active {
            ticket,
            notification,
        });
    }

    /// Returns true if the ticket matched the visible notification.
    pub fn expire(&mut self, ticket: u64) -> bool {
        match &self.active {
            Some(active) if active.ticket == ticket => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }
}

impl Reducible for NotificationCenter {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Raise {
                ticket,
                notification,
            } => {
                next.raise(ticket, notification);
                log::debug!("Notification {} raised", ticket);
            }
            NotificationAction::Expire { ticket } => {
                if !next.expire(ticket) {
                    return self;
                }
                log::debug!("Notification {} dismissed", ticket);
            }
        }
        Rc::new(next)
    }
}

/// Delay and action for the timer that clears the notification raised with
/// `ticket`.
pub fn dismissal(ticket: u64) -> (u32, NotificationAction) {
    (NOTIFICATION_DISMISS_MS, NotificationAction::Expire { ticket })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raised(ticket: u64) -> Rc<NotificationCenter> {
        Rc::new(NotificationCenter::default()).reduce(NotificationAction::Raise {
            ticket,
            notification: Notification::submitted(),
        })
    }

    #[test]
    fn test_dismissal_after_four_seconds() {
        let (delay_ms, action) = dismissal(3);
        assert_eq!(delay_ms, 4_000);
        assert_eq!(action, NotificationAction::Expire { ticket: 3 });
    }

    #[test]
    fn test_single_submit_lifetime() {
        let center = raised(1);
        let shown = center.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Success);
        assert_eq!(shown.message, SUBMITTED_MESSAGE);

        let (_, expire) = dismissal(1);
        assert!(center.reduce(expire).current().is_none());
    }

    #[test]
    fn test_resubmit_resets_countdown() {
        let center = raised(1).reduce(NotificationAction::Raise {
            ticket: 2,
            notification: Notification::submitted(),
        });

        // the first submission's timer fires while the second is showing
        let (_, stale) = dismissal(1);
        let after = center.clone().reduce(stale);
        assert!(Rc::ptr_eq(&center, &after));
        assert!(after.current().is_some());

        let (_, expire) = dismissal(2);
        assert!(after.reduce(expire).current().is_none());
    }

    #[test]
    fn test_only_one_notification_at_a_time() {
        let mut center = NotificationCenter::default();
        center.raise(1, Notification::success("first"));
        center.raise(2, Notification::success("second"));
        assert_eq!(center.current().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut center = NotificationCenter::default();
        center.raise(7, Notification::submitted());
        assert!(center.expire(7));
        assert!(!center.expire(7));
    }
}
