//! # Mock Clients
//!
//! Test doubles for [`ResourceClient`]: the client under test talks to a channel
//! the test controls instead of a running actor.
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | State | scripted responses | real store |
//! | Use case | logic *around* a client, error injection | the entity itself, full system |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, run the code, then `verify()`.
//!   Each expectation also asserts the id the code under test asked for.
//! - [`create_mock_client`] plus [`expect_create`], [`expect_get`],
//!   [`expect_action`]: receive each request yourself and answer it by hand,
//!   useful when the test must inspect the payload.
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Pallet { id: u32 }
//! #[derive(Debug)] struct PalletCreate;
//! #[derive(Debug)] struct PalletUpdate;
//! #[derive(Debug)] enum PalletAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct PalletError;
//!
//! #[async_trait]
//! impl ActorEntity for Pallet {
//!     type Id = u32; type Create = PalletCreate; type Update = PalletUpdate;
//!     type Action = PalletAction; type ActionResult = (); type Context = (); type Error = PalletError;
//!     fn from_create_params(id: u32, _: PalletCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: PalletUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: PalletAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Pallet>::new();
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted response for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Insert(T::Id, Result<Option<T>, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    List(Result<Vec<(T::Id, T)>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::Insert(..) => "Insert",
            Expectation::Get(..) => "Get",
            Expectation::List(_) => "List",
            Expectation::Update(..) => "Update",
            Expectation::Delete(..) => "Delete",
            Expectation::Action(..) => "Action",
        }
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Insert { .. } => "Insert",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the background task, which the
/// client observes as [`FrameworkError::ActorDropped`] and `verify()` reports.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                let Some(expectation) = next else {
                    panic!("Unexpected {} request: no expectations left", request_name(&request));
                };

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Expectation::Create(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Insert { id, respond_to, .. }, Expectation::Insert(expected, response)) => {
                        assert_eq!(id, expected, "Insert called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Expectation::Get(expected, response)) => {
                        assert_eq!(id, expected, "Get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Expectation::List(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Expectation::Update(expected, response)) => {
                        assert_eq!(id, expected, "Update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Expectation::Delete(expected, response)) => {
                        assert_eq!(id, expected, "Delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Expectation::Action(expected, response)) => {
                        assert_eq!(id, expected, "Action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => panic!(
                        "Expected {} request, got {}",
                        expectation.name(),
                        request_name(&request)
                    ),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    pub fn expect_insert(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |r| Expectation::Insert(id, r))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |r| Expectation::Get(id, r))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<(T::Id, T)>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |r| Expectation::Action(id, r))
    }

    /// Panics if any expectation was not consumed or the mock task panicked.
    pub fn verify(&self) {
        assert!(
            !self.handle.is_finished(),
            "Mock task stopped: a request did not match its expectation"
        );
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an expectation with the response the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            wrap: Box::new(wrap),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Action.
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
