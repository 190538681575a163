//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Orchestration (reading the catalog, accepting the suggestion) happens in
//! the Order actor's `on_create` hook; this client only shapes the requests.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Sku, Urgency};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .entity_error::<OrderError>()
                .unwrap_or_else(|| OrderError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Turns the open suggestion for `sku` into a pending order.
    #[instrument(skip(self))]
    pub async fn accept_suggestion(&self, sku: Sku) -> Result<OrderId, OrderError> {
        info!("Sending accept to order actor");
        self.inner
            .create(OrderCreate::FromSuggestion(sku))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        sku: Sku,
        quantity: u32,
        priority: Urgency,
    ) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner
            .create(OrderCreate::Manual {
                sku,
                quantity,
                priority,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// All orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::UpdateStatus(status))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion_actor::SuggestionError;
    use resource_actor::mock::{create_mock_client, expect_create, MockClient};

    #[tokio::test]
    async fn test_accept_suggestion_sends_sku() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.accept_suggestion("BAN-001".into()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert!(matches!(params, OrderCreate::FromSuggestion(ref sku) if sku.as_str() == "BAN-001"));
        responder.send(Ok(OrderId(1))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderId(1)));
    }

    #[tokio::test]
    async fn test_nested_suggestion_error_survives_the_round_trip() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(OrderError::Suggestion(
                SuggestionError::NotFound("BAN-001".to_string()),
            ))));
        mock.expect_get(OrderId(9)).return_ok(None);

        let orders = OrderClient::new(mock.client());
        assert_eq!(
            orders.accept_suggestion("BAN-001".into()).await,
            Err(OrderError::Suggestion(SuggestionError::NotFound(
                "BAN-001".to_string()
            )))
        );
        assert_eq!(
            orders.get_order(OrderId(9)).await,
            Err(OrderError::NotFound("order_9".to_string()))
        );
        mock.verify();
    }
}
