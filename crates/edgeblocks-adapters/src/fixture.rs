//! In-memory content client for fixtures and testing.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockWriteGuard},
};

use async_trait::async_trait;
use url::Url;

use edgeblocks_core::{
    application::{
        ApplicationError,
        ports::{ContentClient, FetchRequest, FetchResponse},
    },
    error::EdgeResult,
};

/// Canned responses keyed by URL without its query string, so cache-busted
/// requests still hit their route. Every request is recorded.
///
/// A panic while the lock is held leaves routes and the request log intact,
/// so every method keeps using the state of a poisoned lock.
#[derive(Debug, Clone, Default)]
pub struct StaticContentClient {
    inner: Arc<RwLock<StaticContentInner>>,
}

#[derive(Debug, Default)]
struct StaticContentInner {
    routes: HashMap<String, Route>,
    requests: Vec<FetchRequest>,
}

#[derive(Debug, Clone)]
enum Route {
    Respond(FetchResponse),
    Fail(String),
}

impl StaticContentClient {
    /// Create a client with no routes; every request answers 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::respond`].
    pub fn with_response(self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.respond(url, FetchResponse::new(status, body));
        self
    }

    pub fn respond(&self, url: &str, response: FetchResponse) {
        self.state()
            .routes
            .insert(route_key_str(url), Route::Respond(response));
    }

    /// Answer requests to `url` with a transport failure.
    pub fn fail(&self, url: &str, reason: impl Into<String>) {
        self.state()
            .routes
            .insert(route_key_str(url), Route::Fail(reason.into()));
    }

    /// Requests seen so far, oldest first (testing helper).
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .requests
            .clone()
    }

    fn state(&self) -> RwLockWriteGuard<'_, StaticContentInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContentClient for StaticContentClient {
    async fn fetch(&self, request: &FetchRequest) -> EdgeResult<FetchResponse> {
        let mut inner = self.state();
        inner.requests.push(request.clone());

        match inner.routes.get(&route_key(&request.url)) {
            Some(Route::Respond(response)) => Ok(response.clone()),
            Some(Route::Fail(reason)) => Err(ApplicationError::Transport {
                url: request.url.to_string(),
                reason: reason.clone(),
            }
            .into()),
            None => Ok(FetchResponse::new(404, Vec::new())),
        }
    }
}

fn route_key(url: &Url) -> String {
    let mut key = url.clone();
    key.set_query(None);
    key.set_fragment(None);
    key.to_string()
}

fn route_key_str(url: &str) -> String {
    Url::parse(url.trim())
        .map(|u| route_key(&u))
        .unwrap_or_else(|_| url.trim().to_string())
}
