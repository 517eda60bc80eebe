use serde::Deserialize;

use crate::app::api::rsvp::schema::RsvpBody;

#[derive(Deserialize)]
pub struct RsvpFormData {
    #[serde(default)]
    pub email: String,
    pub widget: Option<String>,
}

impl RsvpFormData {
    pub fn body(&self) -> RsvpBody {
        RsvpBody::new(self.email.clone())
    }
}

/// Where on the page an RSVP widget is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSlot {
    Hero,
    Insights,
    Footer,
}

impl WidgetSlot {
    /// Unknown or missing slots fall back to the hero widget.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("insights") => Self::Insights,
            Some("footer") => Self::Footer,
            _ => Self::Hero,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Insights => "insights",
            Self::Footer => "footer",
        }
    }
}
