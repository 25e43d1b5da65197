// Admin RPC HTTP client
//
// Wraps `reqwest::Client` with the admin service's URL scheme and error-body
// decoding. Every RPC is a POST of a JSON request message to
// `{base}/squeak_admin.SqueakAdmin/{Method}`. Endpoint groups (profiles,
// peers, lightning, squeaks) are implemented as inherent methods in separate
// files so this module stays focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::RpcStatus;
use crate::transport::TransportConfig;

/// Fully-qualified name of the admin service.
pub const SERVICE_NAME: &str = "squeak_admin.SqueakAdmin";

/// Well-known port the admin service listens on.
pub const DEFAULT_ADMIN_PORT: u16 = 8080;

/// Raw HTTP client for the squeaknode admin service.
///
/// One instance per session. Calls are independent: no sequencing, no
/// retries, no de-duplication. Each call yields exactly one `Result`.
#[derive(Debug, Clone)]
pub struct AdminRpcClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdminRpcClient {
    /// Create a new client against `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Parse a base URL string and wrap a pre-built `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the endpoint URL for an RPC method: `{base}/{SERVICE_NAME}/{method}`.
    pub(crate) fn method_url(&self, method: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{SERVICE_NAME}/{method}",
            self.base_url.as_str().trim_end_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Issue one RPC: POST the request message, decode the reply message.
    pub(crate) async fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, Error>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.method_url(method)?;
        debug!(%method, "POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_reply(resp).await
    }

    /// Decode a reply body, or the error body when the status is not 2xx.
    async fn parse_reply<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(status = status.as_u16(), body_len = body.len(), "reply received");

        if !status.is_success() {
            let parsed: Option<RpcStatus> = serde_json::from_str(&body).ok();
            let (code, message) = match parsed {
                Some(RpcStatus { code, message }) => (code, message),
                None => (None, None),
            };
            let message = message
                .filter(|m| !m.is_empty())
                .or_else(|| Some(body.trim().to_owned()).filter(|b| !b.is_empty()))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(Error::Rpc {
                message,
                code,
                status: status.as_u16(),
            });
        }

        // Empty replies decode as `{}` so unit messages still parse.
        let text = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.clone(),
        })
    }
}
