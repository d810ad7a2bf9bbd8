//! Suggestion request lifecycle for the Planner.
//!
//! Each request gets a [`SuggestionTicket`]. Starting a new request
//! invalidates older tickets, so a slow response that arrives after a newer
//! request started is dropped instead of being applied.

use log::{debug, info};

use super::Planner;
use crate::{
    models::{ActivityTemplate, Suggestion},
    store::ops,
    suggestions::SuggestionSource,
};

/// Handle for one outstanding suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTicket(u64);

impl Planner {
    /// Marks a request as outstanding and invalidates earlier tickets.
    pub fn begin_suggestions(&mut self) -> SuggestionTicket {
        self.current_request += 1;
        self.state.is_loading_suggestions = true;
        SuggestionTicket(self.current_request)
    }

    /// Whether `ticket` belongs to the newest request.
    pub fn is_current(&self, ticket: SuggestionTicket) -> bool {
        ticket.0 == self.current_request
    }

    /// Applies the result of a request.
    ///
    /// Results for a superseded ticket are discarded and `false` is
    /// returned. Otherwise the loading flag is cleared and the suggestions
    /// are put at the front of the picker.
    pub fn complete_suggestions(
        &mut self,
        ticket: SuggestionTicket,
        suggestions: &[Suggestion],
    ) -> bool {
        if !self.is_current(ticket) {
            debug!("Discarding {} suggestions from a superseded request", suggestions.len());
            return false;
        }
        self.state.is_loading_suggestions = false;

        if suggestions.is_empty() {
            return true;
        }

        self.state.available =
            ops::accept_suggestions(&self.state.available, suggestions, &self.catalog);

        let templates: Vec<ActivityTemplate> = suggestions
            .iter()
            .map(|s| ops::suggestion_template(s, &self.catalog))
            .collect();
        self.accepted.splice(0..0, templates);
        self.persist_suggestions();

        info!("Added {} suggested activities to the picker", suggestions.len());
        true
    }

    /// Fetches suggestions for `theme_name` and adds them to the picker.
    /// Returns how many were added.
    pub async fn add_suggested_activities(
        &mut self,
        source: &dyn SuggestionSource,
        theme_name: &str,
    ) -> usize {
        let ticket = self.begin_suggestions();
        let suggestions = source.fetch_suggestions(theme_name).await;
        if self.complete_suggestions(ticket, &suggestions) {
            suggestions.len()
        } else {
            0
        }
    }
}
