use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::form::ContactFormInput;
use crate::error::ValidationError;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks name, email and message in that order and stops at the first failure.
/// Phone and service are accepted as-is.
pub fn validate(input: &ContactFormInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    if input.email.trim().is_empty() || !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if input.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: "Olena".to_string(),
            email: "olena@example.com".to_string(),
            phone: String::new(),
            service: "consult".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        assert_eq!(validate(&valid_input()), Ok(()));
    }

    #[test]
    fn blank_name_wins_over_everything_else() {
        for name in ["", "   ", "\t\n"] {
            let input = ContactFormInput {
                name: name.to_string(),
                email: "x".to_string(),
                message: String::new(),
                ..valid_input()
            };
            assert_eq!(validate(&input), Err(ValidationError::MissingName));
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "   ",
            "x",
            "olena.example.com",
            "olena@example",
            "olena@example.",
            "ol ena@example.com",
            "olena@exa mple.com",
            "olena@@example.com",
            " olena@example.com",
        ] {
            let input = ContactFormInput {
                email: email.to_string(),
                ..valid_input()
            };
            assert_eq!(
                validate(&input),
                Err(ValidationError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_local_at_domain_tld() {
        for email in ["a@b.c", "first.last@mail.example.org", "x+tag@sub.domain.ua"] {
            assert!(is_valid_email(email), "{email:?} should pass");
        }
    }

    #[test]
    fn blank_message_after_valid_contact_details() {
        let input = ContactFormInput {
            message: "  \n ".to_string(),
            ..valid_input()
        };
        assert_eq!(validate(&input), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn phone_and_service_are_not_checked() {
        let input = ContactFormInput {
            phone: "not a phone".to_string(),
            service: "anything".to_string(),
            ..valid_input()
        };
        assert_eq!(validate(&input), Ok(()));
    }
}
