//! HTTP content client using reqwest.

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, COOKIE, HeaderValue},
};
use thiserror::Error;
use tracing::{debug, instrument};

use edgeblocks_core::{
    application::{
        ApplicationError,
        ports::{ContentClient, Credentials, FetchRequest, FetchResponse},
    },
    error::{EdgeError, EdgeResult},
};

/// Settings for [`HttpContentClient`].
///
/// The bearer token and cookie stand in for a browser session: they are
/// sent only with [`Credentials::Include`] requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub user_agent: Option<String>,
    pub bearer_token: Option<String>,
    pub cookie: Option<String>,
}

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("invalid {header} header value")]
    InvalidHeader { header: &'static str },
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

impl From<HttpClientError> for EdgeError {
    fn from(err: HttpClientError) -> Self {
        EdgeError::Configuration {
            message: err.to_string(),
        }
    }
}

/// Production content client.
///
/// No timeout and no retries: a hanging endpoint keeps the block in its
/// authored state until the host gives up.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    client: Client,
    authorization: Option<HeaderValue>,
    cookie: Option<HeaderValue>,
}

impl HttpContentClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| Self::default_user_agent().to_string());
        let client = Client::builder().user_agent(user_agent).build()?;

        let authorization = config
            .bearer_token
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map(|mut value| {
                        value.set_sensitive(true);
                        value
                    })
                    .map_err(|_| HttpClientError::InvalidHeader {
                        header: "authorization",
                    })
            })
            .transpose()?;

        let cookie = config
            .cookie
            .map(|cookie| {
                HeaderValue::from_str(&cookie)
                    .map(|mut value| {
                        value.set_sensitive(true);
                        value
                    })
                    .map_err(|_| HttpClientError::InvalidHeader { header: "cookie" })
            })
            .transpose()?;

        Ok(Self {
            client,
            authorization,
            cookie,
        })
    }

    pub fn default_user_agent() -> &'static str {
        concat!("edgeblocks/", env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl ContentClient for HttpContentClient {
    #[instrument(skip_all, fields(url = %request.url, credentials = ?request.credentials))]
    async fn fetch(&self, request: &FetchRequest) -> EdgeResult<FetchResponse> {
        let mut req = self.client.get(request.url.clone());
        if request.credentials == Credentials::Include {
            if let Some(auth) = &self.authorization {
                req = req.header(AUTHORIZATION, auth.clone());
            }
            if let Some(cookie) = &self.cookie {
                req = req.header(COOKIE, cookie.clone());
            }
        }

        let transport = |e: reqwest::Error| -> EdgeError {
            ApplicationError::Transport {
                url: request.url.to_string(),
                reason: e.to_string(),
            }
            .into()
        };

        let resp = req.send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(transport)?;
        debug!(status, bytes = body.len(), "Content fetched");

        Ok(FetchResponse::new(status, body.to_vec()))
    }
}
