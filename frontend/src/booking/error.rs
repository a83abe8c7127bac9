use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Unknown service: {input}")]
    UnknownService { input: String },

    #[error("Invalid date: {input}")]
    InvalidDate { input: String },
}

pub type Result<T> = std::result::Result<T, BookingError>;
