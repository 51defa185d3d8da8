//! Admin API client: session setup, request execution, pagination

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::auth::AuthStrategy;
use super::constants::{
    DEFAULT_ADMIN_URL, DEFAULT_ADMIN_USER, DEFAULT_WORKSPACE, JSON_CONTENT_TYPE,
};
use super::error::{Error, Result};
use super::response::ApiResponse;

/// Construction settings for [`KongClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Unscoped admin URL, e.g. `http://localhost:8001`.
    pub admin_url: String,
    /// Workspace every request is scoped to.
    pub workspace: String,
    /// Static admin token; when present, no identity-provider fields are
    /// consulted.
    pub admin_token: Option<String>,
    /// Admin username for the identity-provider flow.
    pub admin_user: String,
    /// Identity-provider username, required together with the password
    /// when no token is supplied.
    pub idp_user: Option<String>,
    /// Identity-provider password.
    pub idp_pass: Option<String>,
    /// Verify TLS certificates. Off by default, matching gateways running
    /// with self-signed admin certificates.
    pub verify_tls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            admin_url: DEFAULT_ADMIN_URL.to_string(),
            workspace: DEFAULT_WORKSPACE.to_string(),
            admin_token: None,
            admin_user: DEFAULT_ADMIN_USER.to_string(),
            idp_user: None,
            idp_pass: None,
            verify_tls: false,
        }
    }
}

impl ClientConfig {
    /// Create a new builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the unscoped admin URL.
    pub fn admin_url(mut self, url: impl Into<String>) -> Self {
        self.config.admin_url = url.into();
        self
    }

    /// Set the workspace requests are scoped to.
    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.config.workspace = workspace.into();
        self
    }

    /// Authenticate with a static admin token.
    pub fn admin_token(mut self, token: impl Into<String>) -> Self {
        self.config.admin_token = Some(token.into());
        self
    }

    /// Set the admin username for the identity-provider flow.
    pub fn admin_user(mut self, user: impl Into<String>) -> Self {
        self.config.admin_user = user.into();
        self
    }

    /// Set the identity-provider credential pair.
    pub fn idp_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.config.idp_user = Some(user.into());
        self.config.idp_pass = Some(pass.into());
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Caller-supplied payload and query options for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// JSON body for write verbs.
    pub json: Option<Value>,
    /// Query string parameters.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// No body, no query parameters.
    pub fn none() -> Self {
        Self::default()
    }

    /// A JSON body and nothing else.
    pub fn json(body: Value) -> Self {
        Self {
            json: Some(body),
            query: Vec::new(),
        }
    }

    /// Query parameters and no body.
    pub fn query(params: Vec<(String, String)>) -> Self {
        Self {
            json: None,
            query: params,
        }
    }
}

/// A client for one gateway and workspace.
///
/// Owns the persistent HTTP session for its whole lifetime; the
/// workspace-scoped URL is fixed at construction and never mutated. The
/// client issues one blocking HTTP attempt per logical call and performs
/// no retries. It is not synchronized internally — threads wanting
/// parallel access should each construct their own client.
#[derive(Debug)]
pub struct KongClient {
    admin_url: String,
    admin_ws_url: String,
    workspace: String,
    headers: HeaderMap,
    verify_tls: bool,
    http: Client,
}

impl KongClient {
    /// Construct a client, resolving the authentication strategy and, for
    /// the identity-provider flow, performing the one-time bootstrap call.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let strategy = AuthStrategy::resolve(
            config.admin_token.as_deref(),
            &config.admin_user,
            config.idp_user.as_deref(),
            config.idp_pass.as_deref(),
        )?;
        let headers = strategy.headers()?;
        let http = Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .cookie_store(true)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP session: {err}")))?;
        strategy.bootstrap(&http, &config.admin_url)?;
        let admin_ws_url = format!("{}/{}", config.admin_url, config.workspace);
        Ok(Self {
            admin_url: config.admin_url,
            admin_ws_url,
            workspace: config.workspace,
            headers,
            verify_tls: config.verify_tls,
            http,
        })
    }

    /// Unscoped admin URL this client was constructed with.
    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    /// Workspace-scoped base URL every endpoint is appended to.
    pub fn workspace_url(&self) -> &str {
        &self.admin_ws_url
    }

    /// Workspace this client is scoped to.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Issue a single request against the workspace-scoped URL.
    ///
    /// Read and delete verbs carry no content type; every other verb sends
    /// `application/json;charset=utf-8`. A non-success status raises
    /// [`Error::Http`] with the status and raw body. An empty body and an
    /// empty JSON object both collapse to `Ok(None)`.
    pub fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<ApiResponse>> {
        let url = format!("{}{}", self.admin_ws_url, endpoint);
        log::debug!("{method} {url}");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers.clone());
        if method != Method::GET && method != Method::DELETE {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.json {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().map_err(|err| {
            log::debug!("transport failure for {url}: {err}");
            Error::Connection { url: url.clone() }
        })?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|_| Error::Connection { url: url.clone() })?;
        if !status.is_success() {
            log::warn!("admin API returned {status} for {url}: {body}");
            return Err(Error::Http { status, body });
        }

        let decoded: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)?
        };
        let result = ApiResponse::from_value(decoded);
        if result.is_empty() {
            return Ok(None);
        }
        Ok(Some(result))
    }

    /// Fetch every record of a paginated collection, following the
    /// server-supplied `next` cursor until it runs out.
    ///
    /// Records from each page's `data` array are accumulated in response
    /// order, duplicates and all. A failed page fetch fails the whole
    /// walk; each call re-walks the server from `start_endpoint`.
    pub fn fetch_all(&self, start_endpoint: &str) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        let mut endpoint = Some(start_endpoint.to_string());
        while let Some(current) = endpoint {
            let page = self.execute(Method::GET, &current, RequestOptions::none())?;
            endpoint = match page {
                Some(page) => {
                    if let Some(Value::Array(items)) = page.get("data") {
                        records.extend(items.iter().cloned());
                    }
                    page.get_str("next").map(str::to_string)
                }
                None => None,
            };
        }
        Ok(records)
    }
}
