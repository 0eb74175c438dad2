use serde::Serialize;

use crate::contact::submit::Ack;
use crate::contact::validate::validate;
use crate::error::SubmitError;
use crate::notification::toast::Notification;

pub const LOADING_LABEL: &str = "Відправка...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    /// DOM id of the control, also used as its `name`.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// What the submit button should look like right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub loading: bool,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was started.
    Rejected(Notification),
    /// The snapshot is ready to hand to a submitter.
    Started(ContactFormInput),
    /// A submission is already in flight.
    Ignored,
}

pub fn success_message(name: &str) -> String {
    format!(
        "Дякуємо, {}! Ваше повідомлення відправлено. Ми зв'яжемося з вами протягом 24 годин.",
        name.trim()
    )
}

/// Contact form state machine: Idle -> Submitting -> Idle.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: ContactFormInput,
    state: SubmissionState,
    in_flight: Option<ContactFormInput>,
    submit_label: String,
}

impl ContactForm {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            fields: ContactFormInput::default(),
            state: SubmissionState::Idle,
            in_flight: None,
            submit_label: submit_label.into(),
        }
    }

    pub fn fields(&self) -> &ContactFormInput {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }

        let snapshot = self.fields.clone();
        match validate(&snapshot) {
            Err(e) => SubmitOutcome::Rejected(Notification::from(&e)),
            Ok(()) => {
                self.state = SubmissionState::Submitting;
                self.in_flight = Some(snapshot.clone());
                SubmitOutcome::Started(snapshot)
            }
        }
    }

    /// Finishes the in-flight submission. Fields are cleared only on success.
    pub fn complete(&mut self, result: Result<Ack, SubmitError>) -> Option<Notification> {
        let sent = self.in_flight.take()?;
        self.state = SubmissionState::Idle;

        match result {
            Ok(ack) => {
                self.fields = ContactFormInput::default();
                let mut text = success_message(&sent.name);
                // Anything the backend wants to add, e.g. a ticket number.
                if let Some(extra) = ack.message.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
                    text.push(' ');
                    text.push_str(extra);
                }
                Some(Notification::success(text))
            }
            Err(e) => Some(Notification::from(&e)),
        }
    }

    pub fn submit_control(&self) -> SubmitControl {
        match self.state {
            SubmissionState::Idle => SubmitControl {
                disabled: false,
                loading: false,
                label: self.submit_label.clone(),
            },
            SubmissionState::Submitting => SubmitControl {
                disabled: true,
                loading: true,
                label: LOADING_LABEL.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::notification::toast::NotificationKind;

    fn filled(form: &mut ContactForm) {
        form.edit(Field::Name, "Olena".to_string());
        form.edit(Field::Email, "olena@example.com".to_string());
        form.edit(Field::Service, "consult".to_string());
        form.edit(Field::Message, "Hello".to_string());
    }

    #[test]
    fn starts_idle_with_original_label() {
        let form = ContactForm::new("Надіслати");
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(
            form.submit_control(),
            SubmitControl {
                disabled: false,
                loading: false,
                label: "Надіслати".to_string()
            }
        );
    }

    #[test]
    fn invalid_submit_stays_idle_and_keeps_fields() {
        let mut form = ContactForm::new("Надіслати");
        form.edit(Field::Email, "x".to_string());

        let outcome = form.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Notification::error(ValidationError::MissingName.to_string()))
        );
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.submit_control().disabled);
        assert_eq!(form.fields().email, "x");
    }

    #[test]
    fn valid_submit_disables_control() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);

        let outcome = form.submit();

        assert_eq!(outcome, SubmitOutcome::Started(form.fields().clone()));
        let control = form.submit_control();
        assert!(control.disabled);
        assert!(control.loading);
        assert_eq!(control.label, LOADING_LABEL);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        form.submit();

        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn success_clears_fields_and_thanks_by_name() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        form.submit();
        // Edits made while waiting are dropped along with the rest on success.
        form.edit(Field::Phone, "+380".to_string());

        let notification = form.complete(Ok(Ack::default())).unwrap();

        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(notification.text.contains("Olena"));
        assert!(form.fields().is_empty());
        assert_eq!(form.submit_control().label, "Надіслати");
        assert!(!form.submit_control().disabled);
    }

    #[test]
    fn success_resets_service_choice() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        assert_eq!(form.fields().service, "consult");
        form.submit();

        form.complete(Ok(Ack::default()));

        assert_eq!(form.fields().get(Field::Service), "");
    }

    #[test]
    fn ack_message_is_appended_to_thanks() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        form.submit();

        let ack = Ack {
            message: Some(" Заявка №42 ".to_string()),
        };
        let notification = form.complete(Ok(ack)).unwrap();

        assert!(notification.text.starts_with("Дякуємо, Olena!"));
        assert!(notification.text.ends_with("годин. Заявка №42"));
    }

    #[test]
    fn blank_ack_message_is_ignored() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        form.submit();

        let ack = Ack {
            message: Some("   ".to_string()),
        };
        let notification = form.complete(Ok(ack)).unwrap();

        assert_eq!(notification.text, success_message("Olena"));
    }

    #[test]
    fn failure_restores_control_and_keeps_fields() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);
        form.submit();

        let notification = form.complete(Err(SubmitError::Timeout)).unwrap();

        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, SubmitError::Timeout.to_string());
        assert_eq!(form.fields().name, "Olena");
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.submit_control().disabled);
    }

    #[test]
    fn completing_without_submission_is_a_no_op() {
        let mut form = ContactForm::new("Надіслати");
        filled(&mut form);

        assert_eq!(form.complete(Ok(Ack::default())), None);
        assert_eq!(form.fields().name, "Olena");
    }

    #[test]
    fn field_ids_match_markup() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["name", "email", "phone", "service", "message"]);
    }
}
