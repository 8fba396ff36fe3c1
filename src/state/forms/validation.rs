//! Client-side validation for the contact form

use super::form_state::{ContactField, ContactForm};
use std::collections::BTreeMap;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;
const PHONE_MIN_CHARS: usize = 10;

/// Per-field error messages; only failing fields have an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ContactField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the entry for one field, leaving the rest intact
    pub fn clear_field(&mut self, field: ContactField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Validate every field of the form
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name = form.name.as_text().trim();
    if name.is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    } else if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(ContactField::Name, "Name must be at least 2 characters");
    }

    let email = form.email.as_text().trim();
    if email.is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !is_valid_email(form.email.as_text()) {
        errors.insert(ContactField::Email, "Please enter a valid email address");
    }

    let phone = form.phone.as_text();
    if !phone.trim().is_empty() && !is_valid_phone(phone) {
        errors.insert(ContactField::Phone, "Please enter a valid phone number");
    }

    let message = form.message.as_text().trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, "Message is required");
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(
            ContactField::Message,
            "Message must be at least 10 characters",
        );
    }

    errors
}

/// `local@domain.tld` shape: no whitespace anywhere, one `@`, a dot inside the domain
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Loose phone check: optional leading `+`, then at least ten of digits,
/// whitespace, `-`, `(` or `)`
pub fn is_valid_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    body.chars().count() >= PHONE_MIN_CHARS
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}
