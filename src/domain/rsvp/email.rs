use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local-part@domain.tld`, each part free of whitespace and `@`.
/// A light heuristic, not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("The email pattern should compile")
});

#[derive(Debug, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("Email is required".into());
        }

        // matched against the raw input, surrounding whitespace included
        if !EMAIL_PATTERN.is_match(&value) {
            return Err("Please enter a valid email address".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
