use askama::Template;
use axum::response::IntoResponse;

use super::content::{AgendaItem, Capability, Speaker, AGENDA, CAPABILITIES, SPEAKERS, TAKEAWAYS};
use crate::app::ui::rsvp::{schema::WidgetSlot, widget::RsvpWidget};

/// The landing page: hero, explore, speakers, insights, agenda and footer,
/// with an RSVP widget mounted in the hero, insights and footer sections.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub hero_rsvp: RsvpWidget,
    pub insights_rsvp: RsvpWidget,
    pub footer_rsvp: RsvpWidget,
    pub capabilities: &'static [Capability],
    pub speakers: &'static [Speaker],
    pub takeaways: &'static [&'static str],
    pub agenda: &'static [AgendaItem],
}

impl HomeTemplate {
    /// Swap in the widget instance that just handled a submission.
    pub fn with_widget(mut self, widget: RsvpWidget) -> Self {
        let slot = widget.slot;
        match slot {
            WidgetSlot::Hero => self.hero_rsvp = widget,
            WidgetSlot::Insights => self.insights_rsvp = widget,
            WidgetSlot::Footer => self.footer_rsvp = widget,
        }
        self
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self {
            hero_rsvp: RsvpWidget::empty(WidgetSlot::Hero),
            insights_rsvp: RsvpWidget::empty(WidgetSlot::Insights),
            footer_rsvp: RsvpWidget::empty(WidgetSlot::Footer),
            capabilities: CAPABILITIES,
            speakers: SPEAKERS,
            takeaways: TAKEAWAYS,
            agenda: AGENDA,
        }
    }
}

#[tracing::instrument(name = "Home page")]
pub async fn home_page() -> impl IntoResponse {
    HomeTemplate::default()
}
