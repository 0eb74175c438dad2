use thiserror::Error;

/// Reasons a contact form snapshot is refused before anything is sent.
///
/// The `Display` text is what the visitor sees in the error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Будь ласка, введіть ваше ім'я")]
    MissingName,
    #[error("Будь ласка, введіть коректний email")]
    InvalidEmail,
    #[error("Будь ласка, введіть ваше повідомлення")]
    MissingMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Не вдалося відправити повідомлення. Перевірте з'єднання та спробуйте ще раз.")]
    NetworkFailure(String),
    #[error("Сервер не прийняв повідомлення. Спробуйте пізніше.")]
    ServerRejected { status: u16, reason: Option<String> },
    #[error("Сервер не відповідає. Спробуйте ще раз пізніше.")]
    Timeout,
}

impl SubmitError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, reason: Option<String>) -> Self {
        match status {
            408 | 504 => SubmitError::Timeout,
            _ => SubmitError::ServerRejected { status, reason },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_timeouts_are_reported_as_timeouts() {
        assert_eq!(SubmitError::from_status(504, None), SubmitError::Timeout);
        assert_eq!(SubmitError::from_status(408, None), SubmitError::Timeout);
    }

    #[test]
    fn other_statuses_are_rejections() {
        let err = SubmitError::from_status(422, Some("bad email".to_string()));
        assert_eq!(
            err,
            SubmitError::ServerRejected {
                status: 422,
                reason: Some("bad email".to_string())
            }
        );
        assert!(!err.to_string().contains("bad email"));
    }
}
