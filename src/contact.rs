use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Client-side contact form. Submitting never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Same checks as the browser's `required` and `type="email"` constraints.
    /// Email input strips surrounding whitespace; text fields do not.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    /// Validates, then hands back the submitted values and clears every field.
    pub fn submit(&mut self) -> Result<ContactForm, ContactFormError> {
        self.validate()?;
        Ok(std::mem::take(self))
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

// same shape the browser accepts for type="email": one '@', both sides non-empty
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn should_clear_fields_on_submit() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        assert_eq!(sent, filled());
        assert!(form.is_empty());
    }

    #[test]
    fn should_keep_fields_when_invalid() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email".to_string());
        assert_eq!(form.submit(), Err(ContactFormError::InvalidEmail));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn should_require_every_field() {
        let mut form = filled();
        form.set(Field::Name, String::new());
        assert_eq!(form.validate(), Err(ContactFormError::MissingName));

        let mut form = filled();
        form.set(Field::Email, String::new());
        assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));

        let mut form = filled();
        form.set(Field::Message, String::new());
        assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn should_accept_whitespace_only_fields_like_required() {
        let mut form = filled();
        form.set(Field::Name, "  ".to_string());
        form.set(Field::Message, "\n ".to_string());
        let sent = form.submit().unwrap();
        assert_eq!(sent.name, "  ");
        assert!(form.is_empty());
    }

    #[test]
    fn should_treat_blank_email_as_missing() {
        let mut form = filled();
        form.set(Field::Email, "   ".to_string());
        assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));

        form.set(Field::Email, " ada@example.com ".to_string());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn should_reject_malformed_emails() {
        for email in ["@example.com", "ada@", "ada@@example.com", "a da@x.io", "ada@.io"] {
            assert!(!is_email(email), "{email} accepted");
        }
        assert!(is_email("ada@localhost"));
    }
}
