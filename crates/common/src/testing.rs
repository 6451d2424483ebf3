//! Recording test double for [`LifecycleClient`]
//!
//! Every call is appended to an in-memory log. Replies can be programmed per
//! step; unprogrammed calls fall through to an [`InMemoryBackend`].

use std::collections::{HashMap, VecDeque};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::lifecycle::{LifecycleClient, LifecycleStep};
use crate::memory::InMemoryBackend;
use crate::types::{StorageResource, VolumeStats};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub step: LifecycleStep,
    /// Id the call addressed; empty for List
    pub id: String,
}

/// A programmed reply for the next call of a step
#[derive(Debug, Clone)]
pub enum Reply<R> {
    /// Fail with this error
    Fail(Error),
    /// Return this resource (create/update/get)
    Return(R),
    /// Return this snapshot (list)
    ReturnList(Vec<R>),
    /// Return these counters (stats)
    ReturnStats(VolumeStats),
    /// Never complete
    Hang,
    /// Run against the backend, then cancel the token
    PassThenCancel(CancellationToken),
}

pub struct RecordingClient<R> {
    backend: InMemoryBackend<R>,
    calls: Vec<Call>,
    replies: HashMap<LifecycleStep, VecDeque<Reply<R>>>,
}

impl<R: StorageResource> Default for RecordingClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StorageResource> RecordingClient<R> {
    pub fn new() -> Self {
        Self::with_backend(InMemoryBackend::new())
    }

    pub fn with_backend(backend: InMemoryBackend<R>) -> Self {
        Self {
            backend,
            calls: Vec::new(),
            replies: HashMap::new(),
        }
    }

    /// Queue a reply for the next unanswered call of `step`.
    pub fn program(&mut self, step: LifecycleStep, reply: Reply<R>) -> &mut Self {
        self.replies.entry(step).or_default().push_back(reply);
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Steps in the order they were invoked
    pub fn steps(&self) -> Vec<LifecycleStep> {
        self.calls.iter().map(|c| c.step).collect()
    }

    pub fn count(&self, step: LifecycleStep) -> usize {
        self.calls.iter().filter(|c| c.step == step).count()
    }

    pub fn backend(&self) -> &InMemoryBackend<R> {
        &self.backend
    }

    fn record(&mut self, step: LifecycleStep, id: &str) -> Option<Reply<R>> {
        self.calls.push(Call {
            step,
            id: id.to_string(),
        });
        self.replies.get_mut(&step).and_then(VecDeque::pop_front)
    }
}

/// Resolve a programmed reply, or run `fallback` against the backend.
async fn answer<R, T>(
    reply: Option<Reply<R>>,
    pick: impl FnOnce(Reply<R>) -> Option<T>,
    fallback: impl FnOnce() -> Result<T>,
) -> Result<T> {
    match reply {
        None => fallback(),
        Some(Reply::Fail(e)) => Err(e),
        Some(Reply::Hang) => std::future::pending().await,
        Some(Reply::PassThenCancel(token)) => {
            let result = fallback();
            token.cancel();
            result
        }
        Some(other) => pick(other).ok_or_else(|| {
            Error::InvalidArgument("programmed reply does not fit this step".to_string())
        }),
    }
}

fn resource<R>(reply: Reply<R>) -> Option<R> {
    match reply {
        Reply::Return(r) => Some(r),
        _ => None,
    }
}

#[async_trait::async_trait]
impl<R: StorageResource> LifecycleClient<R> for RecordingClient<R> {
    async fn create(&mut self, resource_in: R) -> Result<R> {
        let reply = self.record(LifecycleStep::Create, resource_in.id());
        let backend = self.backend.clone();
        answer(reply, resource, move || backend.create(resource_in)).await
    }

    async fn update(&mut self, resource_in: R) -> Result<R> {
        let reply = self.record(LifecycleStep::Update, resource_in.id());
        let backend = self.backend.clone();
        answer(reply, resource, move || backend.update(resource_in)).await
    }

    async fn list(&mut self) -> Result<Vec<R>> {
        let reply = self.record(LifecycleStep::List, "");
        let backend = self.backend.clone();
        answer(
            reply,
            |r| match r {
                Reply::ReturnList(items) => Some(items),
                _ => None,
            },
            move || Ok(backend.list()),
        )
        .await
    }

    async fn get(&mut self, id: &str) -> Result<R> {
        let reply = self.record(LifecycleStep::Get, id);
        let backend = self.backend.clone();
        answer(reply, resource, || backend.get(id)).await
    }

    async fn stats(&mut self, id: &str) -> Result<VolumeStats> {
        let reply = self.record(LifecycleStep::Stats, id);
        let backend = self.backend.clone();
        answer(
            reply,
            |r| match r {
                Reply::ReturnStats(stats) => Some(stats),
                _ => None,
            },
            || backend.stats(id),
        )
        .await
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let reply = self.record(LifecycleStep::Delete, id);
        let backend = self.backend.clone();
        answer(reply, |_| None, || backend.delete(id)).await
    }
}
