//! Contact form model and validation.
//!
//! The form has four fields, three of them required. Submitting validates the
//! fields in a fixed order and produces a [`Notification`]; a successful
//! submission clears the form. Nothing is sent anywhere.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::notification::Notification;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Validation failures, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Returns `true` if `email` looks like `local@domain.tld`.
///
/// ```
/// use zallery::domain::contact::is_valid_email;
///
/// assert!(is_valid_email("sana@example.org"));
/// assert!(!is_valid_email("sana@example"));
/// assert!(!is_valid_email("sana khan@example.org"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Form field identifiers, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Message,
            Self::Message => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::Message => Self::Phone,
        }
    }
}

/// Editable contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub focus: ContactField,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub const fn focused(&self) -> ContactField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused();
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focused();
        self.value_mut(field).pop();
    }

    /// Checks required fields, then the email format.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`ContactError`].
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = ContactField::ALL
            .iter()
            .any(|&field| field.is_required() && self.value(field).is_empty());
        if missing {
            return Err(ContactError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and "submits" the form. On success the form is reset.
    pub fn submit(&mut self) -> Notification {
        match self.validate() {
            Ok(()) => {
                tracing::debug!(has_phone = !self.phone.is_empty(), "contact form submitted");
                *self = Self::default();
                Notification::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::debug!(error = %e, "contact form rejected");
                Notification::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationKind;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Neha".into(),
            email: "neha@example.com".into(),
            phone: String::new(),
            message: "Hello".into(),
            focus: ContactField::Name,
        }
    }

    #[test]
    fn missing_required_field_is_reported_first() {
        let mut form = filled();
        form.message.clear();
        form.email = "not-an-email".into();
        assert_eq!(form.validate(), Err(ContactError::MissingRequired));
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn invalid_email_is_rejected_and_form_kept() {
        let mut form = filled();
        form.email = "neha@example".into();
        let note = form.submit();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Please enter a valid email address.");
        assert_eq!(form.email, "neha@example");
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut form = filled();
        form.focus_next();
        let note = form.submit();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, SUCCESS_MESSAGE);
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.focused(), ContactField::Name);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = ContactForm::default();
        form.push_char('a');
        form.focus_next();
        form.push_char('b');
        form.push_char('c');
        form.pop_char();
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focused(), ContactField::Message);
        assert_eq!(form.name, "a");
        assert_eq!(form.email, "b");
    }
}
