//! # Mock Clients
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of scripted expectations instead of a running actor. Use it to test an actor against fake
//! dependencies: a real cart actor with a mocked catalog, say, or a client wrapper on its own.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | scripted replies | real store |
//! | Failure injection | `return_err(..)` | needs a specific state |
//! | Use for | logic *around* a client | the actor itself, full flows |
//!
//! Expectations are consumed in order. A request of the wrong kind, or for a different id, is
//! recorded as a failure and its reply channel is dropped, so the caller sees
//! `FrameworkError::ActorDropped`. `verify()` panics if anything was left over or mismatched.
//!
//! ```ignore
//! let mut products = MockClient::<Product>::new();
//! products.expect_get(ProductId(1)).return_ok(Some(pizza));
//! let (cart_actor, carts) = cart_actor::new(8);
//! tokio::spawn(cart_actor.run(CartContext { products: ProductClient::new(products.client()), .. }));
//! carts.add_item(cart_id, ProductId(1)).await?;
//! products.verify();
//! ```
//!
//! For step-by-step control use [`create_mock_client`] and answer each request yourself with
//! [`expect_action`] / [`expect_query`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("get({id})"),
            Expectation::Create { .. } => "create".to_string(),
            Expectation::Update { id, .. } => format!("update({id})"),
            Expectation::Delete { id, .. } => format!("delete({id})"),
            Expectation::Action { id, .. } => format!("action({id})"),
            Expectation::Query { .. } => "query".to_string(),
        }
    }
}

struct Script<T: ActorEntity> {
    pending: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &SharedScript<T>) -> MutexGuard<'_, Script<T>> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: SharedScript<T> = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            failures: Vec::new(),
        }));
        let replay = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&replay).pending.pop_front();
                // Failures are recorded before the request (and its reply channel) is dropped.
                answer(request, next, |failure| lock(&replay).failures.push(failure));
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    pub fn expect_query(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Query { response })
    }

    /// Panics if an expectation was not consumed or a request did not match its expectation.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", script.failures);
        }
        if !script.pending.is_empty() {
            let remaining: Vec<String> = script.pending.iter().map(Expectation::describe).collect();
            panic!("Not all expectations were met: {remaining:?}");
        }
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            script: self.script.clone(),
            make: Box::new(make),
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    script: SharedScript<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        lock(&self.script).pending.push_back((self.make)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        lock(&self.script).pending.push_back((self.make)(Err(error)));
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    fail: impl FnOnce(String),
) {
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            reply_if(id == want, respond_to, response, || {
                fail(format!("get({id}) but expected get({want})"))
            })
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => reply_if(id == want, respond_to, response, || {
            fail(format!("update({id}) but expected update({want})"))
        }),
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => reply_if(id == want, respond_to, response, || {
            fail(format!("delete({id}) but expected delete({want})"))
        }),
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => reply_if(id == want, respond_to, response, || {
            fail(format!("action({id}) but expected action({want})"))
        }),
        (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query { response })) => {
            let _ = respond_to.send(response);
        }
        (request, Some(expectation)) => fail(format!(
            "{} but expected {}",
            describe_request(&request),
            expectation.describe()
        )),
        (request, None) => fail(format!("{} with no expectation left", describe_request(&request))),
    }
}

fn reply_if<R>(
    matched: bool,
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
    mismatch: impl FnOnce(),
) {
    if matched {
        let _ = respond_to.send(response);
    } else {
        mismatch();
        drop(respond_to);
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { .. } => "create".to_string(),
        ResourceRequest::Get { id, .. } => format!("get({id})"),
        ResourceRequest::Update { id, .. } => format!("update({id})"),
        ResourceRequest::Delete { id, .. } => format!("delete({id})"),
        ResourceRequest::Action { id, .. } => format!("action({id})"),
        ResourceRequest::Query { query, .. } => format!("query({query:?})"),
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client plus the receiving end of its channel, for tests that want to inspect each
/// request before answering it.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
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

/// Waits for the next request and returns it if it is a Query.
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
