//! Entity trait implementation for suggestions.
//!
//! Suggestions are inserted by a refresh under their SKU and resolved through
//! actions. A resolved (accepted or rejected) suggestion stays in the store
//! until the next refresh but answers every action with `NotFound`, so the
//! same suggestion cannot be accepted twice. A refresh replaces it with a
//! fresh `Open` one while an earlier order may still be pending; the engine
//! does not look at open orders.

use super::actions::{SuggestionAction, SuggestionActionResult};
use super::error::SuggestionError;
use crate::model::{Sku, Suggestion, SuggestionStatus, Urgency};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Suggestion {
    type Id = Sku;
    type Create = Infallible;
    type Update = Infallible;
    type Action = SuggestionAction;
    type ActionResult = SuggestionActionResult;
    type Context = ();
    type Error = SuggestionError;

    fn from_create_params(_id: Sku, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: SuggestionAction,
        _ctx: &(),
    ) -> Result<SuggestionActionResult, Self::Error> {
        if !self.is_open() {
            return Err(SuggestionError::NotFound(self.sku.to_string()));
        }

        match action {
            SuggestionAction::Accept => {
                if self.suggested_quantity == 0 {
                    return Err(SuggestionError::InvalidQuantity(format!(
                        "suggestion for {} has a quantity of zero",
                        self.sku
                    )));
                }
                self.status = SuggestionStatus::Accepted;
                Ok(SuggestionActionResult::Accept(self.clone()))
            }
            SuggestionAction::Reject => {
                self.status = SuggestionStatus::Rejected;
                Ok(SuggestionActionResult::Reject(()))
            }
            SuggestionAction::Modify(quantity) => {
                if quantity > self.capacity {
                    return Err(SuggestionError::InvalidQuantity(format!(
                        "{quantity} is outside 0..={} for {}",
                        self.capacity, self.sku
                    )));
                }
                self.suggested_quantity = quantity;
                if quantity == 0 {
                    self.urgency = Urgency::Low;
                }
                Ok(SuggestionActionResult::Modify(self.clone()))
            }
        }
    }
}
