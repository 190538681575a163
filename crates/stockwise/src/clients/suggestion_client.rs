//! # Suggestion Client
//!
//! Typed access to the `Suggestion` actor: storing refreshed suggestions and
//! resolving them.
use crate::model::{Sku, Suggestion};
use crate::suggestion_actor::{SuggestionAction, SuggestionActionResult, SuggestionError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Suggestion actor.
#[derive(Clone)]
pub struct SuggestionClient {
    inner: ResourceClient<Suggestion>,
}

#[async_trait]
impl ActorClient<Suggestion> for SuggestionClient {
    type Error = SuggestionError;

    fn inner(&self) -> &ResourceClient<Suggestion> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(sku) => SuggestionError::NotFound(sku),
            other => other
                .entity_error::<SuggestionError>()
                .unwrap_or_else(|| SuggestionError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl SuggestionClient {
    pub fn new(inner: ResourceClient<Suggestion>) -> Self {
        Self { inner }
    }

    /// Stores a suggestion under its SKU, replacing any previous one.
    #[instrument(skip(self, suggestion), fields(sku = %suggestion.sku))]
    pub async fn insert(&self, suggestion: Suggestion) -> Result<Option<Suggestion>, SuggestionError> {
        debug!("Sending request");
        self.inner
            .insert(suggestion.sku.clone(), suggestion)
            .await
            .map_err(Self::map_error)
    }

    /// Marks the open suggestion accepted and returns it.
    #[instrument(skip(self))]
    pub async fn accept(&self, sku: Sku) -> Result<Suggestion, SuggestionError> {
        match self.action(sku, SuggestionAction::Accept).await? {
            SuggestionActionResult::Accept(suggestion) => {
                info!(quantity = suggestion.suggested_quantity, "Suggestion accepted");
                Ok(suggestion)
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, sku: Sku) -> Result<(), SuggestionError> {
        match self.action(sku, SuggestionAction::Reject).await? {
            SuggestionActionResult::Reject(()) => {
                info!("Suggestion rejected");
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    /// Overrides the quantity, which must fit the capacity recorded at evaluation.
    #[instrument(skip(self))]
    pub async fn modify(&self, sku: Sku, quantity: u32) -> Result<Suggestion, SuggestionError> {
        match self.action(sku, SuggestionAction::Modify(quantity)).await? {
            SuggestionActionResult::Modify(suggestion) => Ok(suggestion),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        sku: Sku,
        action: SuggestionAction,
    ) -> Result<SuggestionActionResult, SuggestionError> {
        debug!("Sending request");
        self.inner
            .perform_action(sku, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: SuggestionActionResult) -> SuggestionError {
    SuggestionError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
