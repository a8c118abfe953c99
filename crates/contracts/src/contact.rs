//! Contact form payload sent to the mail relay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("message is required")]
    MissingMessage,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body POSTed to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn into_request(self) -> Result<ContactRequest, ContactError> {
        self.validate()?;
        let name = self.name.trim().to_string();
        Ok(ContactRequest {
            subject: format!("Thanks {}", name),
            name,
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

impl ContactRequest {
    /// Text shown to the visitor once the relay has accepted the message.
    pub fn acknowledgement(&self, owner: &str) -> String {
        format!(
            "Thanks {} for getting in touch with {}. A reply will follow soon.",
            self.name, owner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, text: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: text.to_string(),
        }
    }

    #[test]
    fn test_into_request_trims_and_builds_subject() {
        let request = message(" Ana ", "ana@example.com ", " hello ")
            .into_request()
            .unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.subject, "Thanks Ana");
        assert_eq!(request.message, "hello");
        assert!(request.acknowledgement("Sam").starts_with("Thanks Ana"));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            message("", "a@b.c", "hi").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            message("Ana", "  ", "hi").validate(),
            Err(ContactError::MissingEmail)
        );
        assert_eq!(
            message("Ana", "ana.example.com", "hi").validate(),
            Err(ContactError::InvalidEmail("ana.example.com".to_string()))
        );
        assert_eq!(
            message("Ana", "a@b@c", "hi").validate(),
            Err(ContactError::InvalidEmail("a@b@c".to_string()))
        );
        assert_eq!(
            message("Ana", "a@b.c", "\n").validate(),
            Err(ContactError::MissingMessage)
        );
        assert!(!ContactMessage::default().is_valid());
    }

    #[test]
    fn test_request_json_shape() {
        let request = message("Ana", "a@b.c", "hi").into_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["subject"], "Thanks Ana");
        assert_eq!(json["email"], "a@b.c");
    }
}
