//! Form field value objects

use super::catalog::{cycle_service, SERVICE_CATALOG, SERVICE_PLACEHOLDER};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the service catalog, `None` when nothing is picked
    Choice(Option<usize>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new catalog selection field
    pub fn choice(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice(None),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    /// Selected catalog index (always `None` for text fields)
    pub fn as_choice(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice(c) => *c,
            FieldValue::Text(_) => None,
        }
    }

    /// Wire value submitted for this field
    pub fn submit_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(c) => c
                .and_then(|i| SERVICE_CATALOG.get(i))
                .map(|s| s.value.to_string())
                .unwrap_or_default(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the selected catalog index
    pub fn set_choice(&mut self, value: Option<usize>) {
        self.value = FieldValue::Choice(value);
    }

    /// Move the selection forward or backward through the catalog
    pub fn cycle_choice(&mut self, forward: bool) {
        if let FieldValue::Choice(c) = &mut self.value {
            *c = cycle_service(*c, forward);
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(_) => {
                // Choice fields are driven by cycle_choice
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(c) => *c = None,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(c) => *c = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(c) => c
                .and_then(|i| SERVICE_CATALOG.get(i))
                .map(|s| format!("◀ {} ▶", s.label))
                .unwrap_or_else(|| format!("◀ {SERVICE_PLACEHOLDER} ▶")),
        }
    }
}
