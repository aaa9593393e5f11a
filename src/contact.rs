use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Snapshot of the contact form at submit time. Consumed once to build the
/// mail link, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    /// Values are kept exactly as typed; whitespace only matters for the
    /// emptiness and email-shape checks.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        required("name", name)?;
        let trimmed_email = required("email", email)?;
        required("message", message)?;
        // browsers strip surrounding whitespace from type="email" values
        if !looks_like_email(trimmed_email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value)
    }
}

// same shape the browser accepts for type="email": local@domain, no spaces
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Builds the `mailto:` deep link handed to the user's mail client.
pub fn mailto_link(recipient: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&form.subject()),
        urlencoding::encode(&form.body()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param<'a>(link: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = link.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            if k == key {
                Some(v)
            } else {
                None
            }
        })
    }

    #[test]
    fn test_mailto_round_trips_fields() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello").unwrap();
        let link = mailto_link("owner@example.com", &form);
        assert!(link.starts_with("mailto:owner@example.com?"));

        let subject = query_param(&link, "subject").expect("subject param");
        let body = query_param(&link, "body").expect("body param");
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Portfolio Inquiry from Ada"
        );
        assert_eq!(
            urlencoding::decode(body).unwrap(),
            "Name: Ada\nEmail: ada@example.com\n\nHello"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let form = ContactForm::new("A&B", "ab@example.com", "50% off? yes=no #1").unwrap();
        let link = mailto_link("owner@example.com", &form);
        // only the two separators survive unescaped
        assert_eq!(link.matches('&').count(), 1);
        assert_eq!(link.matches('?').count(), 1);
        assert!(!link.contains('#'));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        let body = query_param(&link, "body").unwrap();
        assert!(urlencoding::decode(body).unwrap().ends_with("50% off? yes=no #1"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            ContactForm::new("", "ada@example.com", "Hello"),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactForm::new("Ada", "   ", "Hello"),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            ContactForm::new("Ada", "ada@example.com", "\n\t"),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(matches!(
            ContactForm::new("Ada", "ada.example.com", "Hi"),
            Err(ContactError::InvalidEmail(_))
        ));
        assert!(matches!(
            ContactForm::new("Ada", "@example.com", "Hi"),
            Err(ContactError::InvalidEmail(_))
        ));
        assert!(matches!(
            ContactForm::new("Ada", "a da@example.com", "Hi"),
            Err(ContactError::InvalidEmail(_))
        ));
        assert!(ContactForm::new("Ada", "ada@localhost", "Hi").is_ok());
    }

    #[test]
    fn test_fields_are_kept_as_typed() {
        let form = ContactForm::new("  Ada ", "ada@example.com", " Hello ").unwrap();
        assert_eq!(form.name, "  Ada ");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, " Hello ");
    }

    #[test]
    fn test_indented_multiline_message_survives_mailto() {
        let message = "  code:\n    fn main() {}\n";
        let form = ContactForm::new("Ada", "ada@example.com", message).unwrap();
        let link = mailto_link("owner@example.com", &form);
        let body = query_param(&link, "body").unwrap();
        assert_eq!(
            urlencoding::decode(body).unwrap(),
            "Name: Ada\nEmail: ada@example.com\n\n  code:\n    fn main() {}\n"
        );
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        assert_eq!(
            ContactForm::new("  ", "ada@example.com", "Hello"),
            Err(ContactError::MissingField("name"))
        );
    }
}
