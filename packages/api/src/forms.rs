//! Form input and the checks run before anything is sent.
//!
//! Each form holds the raw text the user typed. `validate` trims every field,
//! rejects blanks, and produces the request body. Nothing here touches the
//! network, so a failed check guarantees no request went out.

use crate::errors::ValidationError;
use crate::models::{Credentials, NewUser, NoteDraft, NoteUpdate};

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 150;

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        Ok(Credentials {
            email: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    /// Raw text from the age input; parsed during validation.
    pub age: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        Ok(NewUser {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            age: parse_age(&self.age)?,
            email: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
        })
    }
}

/// Parse the age input, accepting whole numbers in `1..=150`.
pub fn parse_age(raw: &str) -> Result<u8, ValidationError> {
    let raw = required(raw, "Age")?;
    let age: i64 = raw.parse().map_err(|_| ValidationError::AgeNotANumber)?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    u8::try_from(age).map_err(|_| ValidationError::AgeOutOfRange)
}

/// Title and content, shared by the create and edit forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<NoteUpdate, ValidationError> {
        Ok(NoteUpdate {
            title: required(&self.title, "Title")?,
            content: required(&self.content, "Content")?,
        })
    }

    /// Validated creation body stamped with `created_at`.
    pub fn draft(&self, created_at: String) -> Result<NoteDraft, ValidationError> {
        Ok(self.validate()?.into_draft(created_at))
    }
}

/// In-flight marker for one form: at most one request per form at a time.
///
/// Claimed synchronously in the event handler, before the request task is
/// spawned, so a second click or submit that arrives first is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    in_flight: bool,
}

impl Submission {
    /// Claim the form. `false` when a request is already outstanding.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_trims_and_requires_both_fields() {
        let form = LoginForm {
            email: "  ada@example.com ".into(),
            password: " pw ".into(),
        };
        let creds = form.validate().unwrap();
        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.password, "pw");

        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "   ".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("Password")));
        assert_eq!(
            LoginForm::default().validate(),
            Err(ValidationError::Required("Email"))
        );
    }

    fn signup(age: &str) -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: age.into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn test_signup_parses_age() {
        assert_eq!(signup(" 36 ").validate().unwrap().age, 36);
        assert_eq!(signup("1").validate().unwrap().age, 1);
        assert_eq!(signup("150").validate().unwrap().age, 150);
    }

    #[test]
    fn test_signup_rejects_bad_age_before_sending() {
        assert_eq!(signup("").validate(), Err(ValidationError::Required("Age")));
        assert_eq!(signup("abc").validate(), Err(ValidationError::AgeNotANumber));
        assert_eq!(signup("12.5").validate(), Err(ValidationError::AgeNotANumber));
        assert_eq!(signup("0").validate(), Err(ValidationError::AgeOutOfRange));
        assert_eq!(signup("-4").validate(), Err(ValidationError::AgeOutOfRange));
        assert_eq!(signup("151").validate(), Err(ValidationError::AgeOutOfRange));
        assert_eq!(
            signup("99999999999999999999").validate(),
            Err(ValidationError::AgeNotANumber)
        );
    }

    #[test]
    fn test_signup_requires_names() {
        let mut form = signup("30");
        form.last_name = " ".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("Last name")));
    }

    #[test]
    fn test_note_form_rejects_blank_title_or_content() {
        assert_eq!(
            NoteForm::new("", "body").validate(),
            Err(ValidationError::Required("Title"))
        );
        assert_eq!(
            NoteForm::new("title", " \n ").validate(),
            Err(ValidationError::Required("Content"))
        );

        let draft = NoteForm::new(" title ", " body ")
            .draft("2025-01-01T00:00:00Z".into())
            .unwrap();
        assert_eq!(draft.title, "title");
        assert_eq!(draft.content, "body");
        assert_eq!(draft.created_at, "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_second_submit_is_dropped_until_finished() {
        let mut submission = Submission::default();
        assert!(!submission.in_flight());

        assert!(submission.try_begin());
        assert!(submission.in_flight());
        // Double click before the first request has been sent
        assert!(!submission.try_begin());

        submission.finish();
        assert!(!submission.in_flight());
        assert!(submission.try_begin());
    }
}
