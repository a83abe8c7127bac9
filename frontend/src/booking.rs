//! Client-side state for the consultation booking form. Nothing in here
//! touches the DOM.

pub mod availability;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod notification;
pub mod prefill;
pub mod slots;
pub mod view;
