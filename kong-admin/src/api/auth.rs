//! Authentication strategies for the admin session

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::constants::{
    ADMIN_TOKEN_HEADER, ADMIN_USER_HEADER, AUTH_ENDPOINT, DEFAULT_ADMIN_USER,
};
use super::error::{Error, Result};

/// How the client authenticates against the admin endpoint.
///
/// The gateway supports a static-token admin path and a federated identity
/// exchange; neither is assumed to be configured, so resolution fails fast
/// when the chosen mode is missing required fields.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Static administrative token sent with every request.
    Token(String),
    /// Identity-provider credential exchange: one basic-auth call against
    /// the auth endpoint establishes a session for the named admin user.
    Idp {
        admin_user: String,
        idp_user: String,
        idp_pass: String,
    },
}

impl AuthStrategy {
    /// Pick the strategy from construction inputs.
    ///
    /// A token always wins. Without one, the identity-provider fields must
    /// all be usable: non-empty idp credentials and an admin user that is
    /// not the stock `kong_admin` placeholder. Violations surface as a
    /// configuration error before any network call.
    pub fn resolve(
        admin_token: Option<&str>,
        admin_user: &str,
        idp_user: Option<&str>,
        idp_pass: Option<&str>,
    ) -> Result<Self> {
        if let Some(token) = admin_token {
            return Ok(Self::Token(token.to_string()));
        }
        let idp_user = idp_user.unwrap_or_default();
        let idp_pass = idp_pass.unwrap_or_default();
        if idp_user.is_empty() || idp_pass.is_empty() || admin_user == DEFAULT_ADMIN_USER {
            return Err(Error::Config(
                "idp_user, idp_pass and admin_user must be provided and non-empty".to_string(),
            ));
        }
        Ok(Self::Idp {
            admin_user: admin_user.to_string(),
            idp_user: idp_user.to_string(),
            idp_pass: idp_pass.to_string(),
        })
    }

    /// Default header set the session carries for this strategy.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Self::Token(token) => {
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                headers.insert(
                    ADMIN_TOKEN_HEADER,
                    HeaderValue::from_str(token).map_err(|_| {
                        Error::Config("admin token contains invalid header characters".to_string())
                    })?,
                );
            }
            Self::Idp { admin_user, .. } => {
                headers.insert(
                    ADMIN_USER_HEADER,
                    HeaderValue::from_str(admin_user).map_err(|_| {
                        Error::Config("admin user contains invalid header characters".to_string())
                    })?,
                );
            }
        }
        Ok(headers)
    }

    /// Perform the one-time identity-provider exchange on `http`.
    ///
    /// A no-op for the token strategy. The gateway answers the basic-auth
    /// GET by attaching a session cookie to the shared cookie store; the
    /// response status itself is not inspected.
    pub fn bootstrap(&self, http: &Client, admin_url: &str) -> Result<()> {
        let Self::Idp {
            admin_user,
            idp_user,
            idp_pass,
        } = self
        else {
            return Ok(());
        };
        let url = format!("{admin_url}{AUTH_ENDPOINT}");
        log::debug!("exchanging identity-provider credentials at {url}");
        http.get(&url)
            .header(ADMIN_USER_HEADER, admin_user.as_str())
            .basic_auth(idp_user, Some(idp_pass))
            .send()
            .map_err(|err| {
                log::debug!("identity-provider exchange failed: {err}");
                Error::Connection { url: url.clone() }
            })?;
        Ok(())
    }
}
