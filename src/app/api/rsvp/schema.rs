use serde::Deserialize;
use serde_json::Value;

use crate::domain::rsvp::{email::Email, Rsvp};

#[derive(Deserialize)]
pub struct RsvpBody {
    // absent, null and blank are all reported as "Email is required"
    #[serde(default)]
    email: Option<Value>,
}

impl RsvpBody {
    pub fn new(email: String) -> Self {
        Self {
            email: Some(Value::String(email)),
        }
    }

    /// The submitted email as text; non-string values are kept in their JSON form.
    pub fn email(&self) -> String {
        match &self.email {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl TryFrom<RsvpBody> for Rsvp {
    type Error = String;
    fn try_from(value: RsvpBody) -> Result<Self, Self::Error> {
        let email = Email::try_from(value.email())?;
        Ok(Self { email })
    }
}
