//! Phone contact model

/// A contact picked from the sender's address book, convertible into a
/// [`Recipient`](super::Recipient) once a destination country is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
