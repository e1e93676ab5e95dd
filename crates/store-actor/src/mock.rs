//! # Mock Store
//!
//! `MockClient<T>` hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of expectations instead of a running [`StoreActor`](crate::StoreActor). It
//! lets you test the logic *around* a store client deterministically, including
//! failures that are hard to provoke with a real actor.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real records and session |
//! | **Use case** | Client wrappers and orchestration | The store itself, full flows |
//! | **Error injection** | `return_err` | Drop the actor |
//!
//! ```rust
//! use store_actor::mock::MockClient;
//! use store_actor::{FrameworkError, Record};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32 }
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! impl Record for Note {
//!     type Id = u32;
//!     type Create = ();
//!     type Session = ();
//!     type Error = NoteError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(7).return_ok(None);
//!     mock.expect_delete(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(7).await.unwrap().is_none());
//!     assert!(matches!(client.delete(7).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation is recorded and its response
//! channel dropped, so the caller sees [`FrameworkError::ActorDropped`] and
//! [`MockClient::verify`] panics with the mismatch.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Represents an expected request and the scripted answer.
enum Expectation<T: Record> {
    Create(Result<T, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Put(Result<(), FrameworkError>),
    /// Holds the record the store is pretending to have under the id.
    Update(T::Id, Result<Option<T>, FrameworkError>),
    Delete(T::Id, Result<bool, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Session(Result<T::Session, FrameworkError>),
    UpdateSession(Result<bool, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
pub struct MockClient<T: Record> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    received_puts: Arc<Mutex<Vec<T>>>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received_puts = Arc::new(Mutex::new(Vec::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let puts = received_puts.clone();
        let errors = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get(want, r)))
                        if id == want =>
                    {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Put { record, respond_to }, Some(Expectation::Put(r))) => {
                        puts.lock().unwrap().push(record);
                        let _ = respond_to.send(r);
                    }
                    (
                        StoreRequest::Update {
                            id,
                            apply,
                            respond_to,
                        },
                        Some(Expectation::Update(want, r)),
                    ) if id == want => {
                        let answer = r.map(|stored| {
                            stored.map(|previous| {
                                let current = apply(&previous);
                                puts.lock().unwrap().push(current.clone());
                                (previous, current)
                            })
                        });
                        let _ = respond_to.send(answer);
                    }
                    (StoreRequest::Delete { id, respond_to }, Some(Expectation::Delete(want, r)))
                        if id == want =>
                    {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Session { respond_to }, Some(Expectation::Session(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        StoreRequest::UpdateSession { respond_to, .. },
                        Some(Expectation::UpdateSession(r)),
                    ) => {
                        let _ = respond_to.send(r);
                    }
                    (request, _) => {
                        errors
                            .lock()
                            .unwrap()
                            .push(format!("unexpected request {:?}", request));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            received_puts,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    fn expect<R>(&mut self, wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static) -> Expect<T, R> {
        Expect {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
            _result: PhantomData,
        }
    }

    pub fn expect_create(&mut self) -> Expect<T, T> {
        self.expect(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        self.expect(move |r| Expectation::Get(id, r))
    }

    pub fn expect_put(&mut self) -> Expect<T, ()> {
        self.expect(Expectation::Put)
    }

    /// Scripts an `update` of `id` against `stored`. The caller's closure runs on
    /// the stored record and its result is recorded like a put.
    pub fn expect_update(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        self.expect(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, bool> {
        self.expect(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_list(&mut self) -> Expect<T, Vec<T>> {
        self.expect(Expectation::List)
    }

    pub fn expect_session(&mut self) -> Expect<T, T::Session> {
        self.expect(Expectation::Session)
    }

    pub fn expect_update_session(&mut self) -> Expect<T, bool> {
        self.expect(Expectation::UpdateSession)
    }

    /// Records written by `put` or `update`, in arrival order.
    pub fn puts(&self) -> Vec<T> {
        self.received_puts.lock().unwrap().clone()
    }

    /// Panics unless every expectation was consumed and no request was unexpected.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock received unexpected requests: {:?}", *mismatches);
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that queues one expectation with its scripted answer.
pub struct Expect<T: Record, R> {
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
    expectations: Queue<T>,
    _result: PhantomData<R>,
}

impl<T: Record, R> Expect<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
