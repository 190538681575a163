//! Resolution actions for an open [`Suggestion`].

use crate::model::Suggestion;

#[derive(Debug, Clone)]
pub enum SuggestionAction {
    /// Marks the suggestion accepted and returns it for ordering.
    Accept,
    /// Discards the suggestion.
    Reject,
    /// Overrides the suggested quantity.
    Modify(u32),
}

/// Results from SuggestionActions - variants match 1:1 with SuggestionAction
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionActionResult {
    Accept(Suggestion),
    Reject(()),
    Modify(Suggestion),
}
