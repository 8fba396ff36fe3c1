//! Form domain layer
//!
//! Field values, validation rules and the submission lifecycle for the
//! contact form. Nothing in here touches the network.

mod catalog;
mod field;
mod form_state;
mod submission;
mod validation;

pub use catalog::{service_blurb, SERVICE_CATALOG};
pub use field::FormField;
pub use form_state::{ContactField, ContactForm, Form, Inquiry};
pub use submission::{SubmissionPhase, SubmissionState};
pub use validation::{validate, ValidationErrors};
