//! Contact form state: field values, validation, and submit lifecycle.
//!
//! DESIGN
//! ======
//! The page holds one `RwSignal<ContactState>` and routes every keystroke and
//! submit through the methods here, so the rules (required fields, single
//! in-flight submit, clear-on-success) are plain Rust and unit-tested. The
//! HTTP call itself lives in [`crate::net::form_submit`].

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::net::form_submit::SubmitError;

/// Subject line attached to every submission.
pub const SUBMISSION_SUBJECT: &str = "New Contact Form Submission - UAE Delivery Express";

/// `(value, label)` pairs for the service select. An empty value means "not chosen".
pub const SERVICE_OPTIONS: [(&str, &str); 6] = [
    ("same-day", "Same Day Delivery"),
    ("express", "Express Delivery"),
    ("standard", "Standard Delivery"),
    ("international", "International Shipping"),
    ("bulk", "Bulk Delivery"),
    ("other", "Other"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    /// Form control `name`/`id`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name *",
            ContactField::Email => "Email Address *",
            ContactField::Phone => "Phone Number",
            ContactField::Service => "Service Needed",
            ContactField::Message => "Message *",
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email | ContactField::Message)
    }

    fn missing_message(self) -> &'static str {
        match self {
            ContactField::Name => "Please enter your name",
            ContactField::Email => "Please enter your email address",
            ContactField::Message => "Please enter a message",
            ContactField::Phone | ContactField::Service => "This field is required",
        }
    }
}

/// Current field values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Check required fields and email shape.
    ///
    /// # Errors
    ///
    /// Returns one message per offending field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in ContactField::ALL {
            if field.required() && self.value(field).trim().is_empty() {
                errors.insert(field, field.missing_message());
            }
        }
        if !errors.contains(ContactField::Email) && !looks_like_email(self.email.trim()) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Wire payload for the hosted form service.
    #[must_use]
    pub fn submission(&self) -> Submission<'_> {
        Submission {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            service: &self.service,
            message: &self.message,
            subject: SUBMISSION_SUBJECT,
            captcha: "false",
            template: "table",
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace),
        None => false,
    }
}

/// JSON body posted to the form service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub service: &'a str,
    pub message: &'a str,
    #[serde(rename = "_subject")]
    pub subject: &'static str,
    #[serde(rename = "_captcha")]
    pub captcha: &'static str,
    #[serde(rename = "_template")]
    pub template: &'static str,
}

/// Inline validation messages keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }
}

/// Banner state of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Record a keystroke and drop that field's stale error.
    pub fn update(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and enter the submitting state.
    ///
    /// Returns the snapshot to send, or `None` when a submit is already in
    /// flight or validation failed (errors are stored for display).
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_submitting() {
            return None;
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.status = SubmitStatus::Submitting;
                Some(self.form.clone())
            }
            Err(errors) => {
                self.errors = errors;
                self.status = SubmitStatus::Idle;
                None
            }
        }
    }

    /// Apply the outcome of the POST. Success clears every field.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                log::info!("contact form submitted");
                self.form = ContactForm::default();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                log::warn!("contact form submission failed: {err}");
                self.status = SubmitStatus::Failed;
            }
        }
    }
}
