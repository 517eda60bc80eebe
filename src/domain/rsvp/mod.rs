pub mod email;
pub mod outcome;

use self::email::Email;

/// A validated RSVP, ready to be recorded.
pub struct Rsvp {
    pub email: Email,
}
