use super::collection::{contains_ci, Categorized, Record, Searchable};

/// Message shown once the simulated send completes.
pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! We'll get back to you soon.";

/// Inbox entry shown on the admin contact page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub organization: String,
    pub message: String,
}

impl Record for ContactMessage {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The subject doubles as the inbox filter category.
impl Categorized for ContactMessage {
    fn category(&self) -> &str {
        &self.subject
    }
}

impl Searchable for ContactMessage {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.subject, needle)
    }
}

/// Fields of the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    /// Optional.
    pub organization: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Contact form plus its submission lifecycle.
///
/// Nothing is sent anywhere: `begin_submit` starts the simulated delay and
/// `complete_submit` ends it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    status: SubmitStatus,
}

impl ContactFormState {
    /// Where the submission currently stands.
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    /// True between submit and the simulated reply.
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    /// Returns false when a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Finish the simulated send and clear every field.
    pub fn complete_submit(&mut self) {
        if self.is_submitting() {
            self.status = SubmitStatus::Success;
            self.form = ContactForm::default();
        }
    }

    /// Hide the success banner.
    pub fn dismiss(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Banner text for the current status, if any.
    pub const fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Success => Some(SUCCESS_MESSAGE),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            form: ContactForm {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Hello".into(),
                organization: String::new(),
                message: "Hi there".into(),
            },
            ..ContactFormState::default()
        }
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = filled();
        assert!(state.begin_submit());
        assert!(state.is_submitting());
        assert!(!state.begin_submit());
        assert_eq!(state.status_message(), None);

        state.complete_submit();
        assert_eq!(state.status(), SubmitStatus::Success);
        assert!(state.form.is_empty());
        assert_eq!(state.status_message(), Some(SUCCESS_MESSAGE));

        state.dismiss();
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_complete_without_begin_is_noop() {
        let mut state = filled();
        state.complete_submit();
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.form.name, "Ada");
    }

    #[test]
    fn test_inbox_search_fields() {
        let message = ContactMessage {
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            subject: "Product Feedback".into(),
            organization: "Innovate Inc.".into(),
            ..ContactMessage::default()
        };
        assert!(message.matches("feedback"));
        assert!(message.matches("example.com"));
        assert!(!message.matches("innovate"));
    }
}
