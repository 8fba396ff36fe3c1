//! Contact form state

use super::field::FormField;
use serde::Serialize;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Addressable fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    /// All fields in tab order
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Multipart field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Payload sent to the form relay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl Inquiry {
    /// Field pairs in wire order
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (ContactField::Name.as_str(), &self.name),
            (ContactField::Email.as_str(), &self.email),
            (ContactField::Phone.as_str(), &self.phone),
            (ContactField::Service.as_str(), &self.service),
            (ContactField::Message.as_str(), &self.message),
        ]
    }
}

/// Index of the Send button row, one past the last field
pub const SEND_ROW_INDEX: usize = 5;

/// Logistics inquiry form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub service: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Full Name *", false),
            email: FormField::text("email", "Email Address *", false),
            phone: FormField::text("phone", "Phone Number", false),
            service: FormField::choice("service", "Service Interested In"),
            message: FormField::text("message", "Message *", true),
            active_field_index: 0,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        }
    }

    /// Field under the cursor, `None` when the Send button is focused
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_field_index)
    }

    /// Returns true if the Send button row is currently active
    pub fn is_send_row_active(&self) -> bool {
        self.active_field_index == SEND_ROW_INDEX
    }

    /// Clear every value, keeping focus where it is
    pub fn reset(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    /// True when no field holds any input
    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| self.field(*f).submit_value().is_empty())
    }

    pub fn to_inquiry(&self) -> Inquiry {
        Inquiry {
            name: self.name.submit_value(),
            email: self.email.submit_value(),
            phone: self.phone.submit_value(),
            service: self.service.submit_value(),
            message: self.message.submit_value(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // five fields, send button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SEND_ROW_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        ContactField::from_index(index).map(|f| self.field(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod contact_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_wire_names() {
            let names: Vec<&str> = ContactField::ALL.iter().map(|f| f.as_str()).collect();
            assert_eq!(names, vec!["name", "email", "phone", "service", "message"]);
        }

        #[test]
        fn test_index_round_trip() {
            for field in ContactField::ALL {
                assert_eq!(ContactField::from_index(field.index()), Some(field));
            }
            assert_eq!(ContactField::from_index(SEND_ROW_INDEX), None);
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_empty() {
            let form = ContactForm::new();
            assert!(form.is_empty());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_contact_field(), Some(ContactField::Name));
        }

        #[test]
        fn test_message_is_multiline() {
            let form = ContactForm::new();
            assert!(form.message.is_multiline);
            assert!(!form.name.is_multiline);
        }

        #[test]
        fn test_next_field_reaches_send_row_then_wraps() {
            let mut form = ContactForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert!(form.is_send_row_active());
            assert_eq!(form.active_contact_field(), None);
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_send_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_send_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SEND_ROW_INDEX);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ContactForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "phone");
            assert_eq!(form.get_field(3).unwrap().name, "service");
            assert_eq!(form.get_field(4).unwrap().name, "message");
            assert!(form.get_field(5).is_none());
        }

        #[test]
        fn test_to_inquiry_uses_empty_strings_for_optional() {
            let mut form = ContactForm::new();
            form.name.set_text("Ravi".to_string());
            form.email.set_text("ravi@example.in".to_string());
            form.message.set_text("Need two trucks weekly".to_string());

            assert_eq!(
                form.to_inquiry(),
                Inquiry {
                    name: "Ravi".to_string(),
                    email: "ravi@example.in".to_string(),
                    phone: String::new(),
                    service: String::new(),
                    message: "Need two trucks weekly".to_string(),
                }
            );
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = ContactForm::new();
            form.name.set_text("Ravi".to_string());
            form.service.set_choice(Some(4));
            form.reset();
            assert!(form.is_empty());
        }
    }
}
