//! Boundary to the external identity provider.
//!
//! This site never authenticates anyone itself: sign-in is delegated to
//! an OAuth provider, and everything past the initial redirect (the
//! callback, token exchange, session issuance) happens on the provider's
//! side of the fence. All this module does is build the redirect.

use cfg_if::cfg_if;
use leptos::prelude::*;

cfg_if! { if #[cfg(feature = "ssr")] {
    use crate::cookies::{issue_state_cookie, pending_state};
    use crate::defs::{DASHBOARD_PATH, OAUTH_SCOPE};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use http::request::Parts;
    use rand::RngCore;
    use std::{env, sync::Arc};
    use url::Url;
}}

/// Identity providers sign-in can be delegated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OauthProvider {
    Google,
}

impl OauthProvider {
    /// Name the provider goes by in the authorize URL.
    pub fn wire_name(self) -> &'static str {
        match self {
            OauthProvider::Google => "google",
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0} not set")]
    MissingConfig(&'static str),
    #[error("OAUTH_AUTHORIZE_URL is not a valid URL")]
    BadEndpoint,
}

/// Client for the identity provider's authorize endpoint.
///
/// Endpoint and credentials come from the environment at server start;
/// the client is handed to server functions through context the same way
/// the request state is.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct AuthClient {
    authorize_endpoint: String,
    client_id: String,
}

#[cfg(feature = "ssr")]
impl AuthClient {
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(AuthClient {
            authorize_endpoint: env::var("OAUTH_AUTHORIZE_URL")
                .map_err(|_| AuthError::MissingConfig("OAUTH_AUTHORIZE_URL"))?,
            client_id: env::var("OAUTH_CLIENT_ID")
                .map_err(|_| AuthError::MissingConfig("OAUTH_CLIENT_ID"))?,
        })
    }

    #[cfg(test)]
    fn new(authorize_endpoint: &str, client_id: &str) -> Self {
        AuthClient {
            authorize_endpoint: authorize_endpoint.to_string(),
            client_id: client_id.to_string(),
        }
    }

    /// Builds the provider URL the browser should navigate to in order
    /// to sign in with `provider` and land on `redirect_to` afterwards.
    pub fn authorize_url(
        &self,
        provider: OauthProvider,
        state: &str,
        redirect_to: &str,
    ) -> Result<String, AuthError> {
        let mut authorize_url =
            Url::parse(&self.authorize_endpoint).map_err(|_| AuthError::BadEndpoint)?;
        authorize_url
            .query_pairs_mut()
            .append_pair("provider", provider.wire_name())
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code")
            .append_pair("scope", OAUTH_SCOPE)
            .append_pair("redirect_uri", redirect_to)
            .append_pair("state", state);
        Ok(authorize_url.into())
    }
}

/// 128 bits of CSRF state for one sign-in attempt, URL-safe base64.
#[cfg(feature = "ssr")]
pub fn gen_state_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Requests an OAuth redirect from the identity provider.
///
/// Returns the provider URL the browser should navigate to. The
/// post-login destination is derived from the request's own origin, so
/// the same build serves any host it is deployed on.
#[server(SignIn, "/api")]
pub async fn sign_in() -> Result<String, ServerFnError> {
    let client = match use_context::<Arc<AuthClient>>() {
        Some(client) => client,
        None => {
            log::error!("sign_in: no AuthClient in context");
            return Err(ServerFnError::ServerError(String::from(
                "Sign-in request failed.",
            )));
        }
    };
    if let Some(stale) = pending_state() {
        // a previous attempt never reached the provider callback
        log::trace!("sign_in: replacing unconsumed oauth state {stale}");
    }
    let state = gen_state_token();
    let redirect_to = format!("{}{DASHBOARD_PATH}", request_origin()?);
    let authorize_url =
        match client.authorize_url(OauthProvider::Google, &state, &redirect_to) {
            Ok(authorize_url) => authorize_url,
            Err(e) => {
                log::error!("sign_in: could not build authorize url: {e}");
                return Err(ServerFnError::ServerError(String::from(
                    "Sign-in request failed.",
                )));
            }
        };
    issue_state_cookie(&state)?;
    log::trace!(
        "sign_in: issued {} redirect towards {redirect_to}",
        OauthProvider::Google.wire_name()
    );
    Ok(authorize_url)
}

/// `https://{host}` for the request currently being answered.
#[cfg(feature = "ssr")]
fn request_origin() -> Result<String, ServerFnError> {
    // grab request, bailing if there is none
    let http_req = match use_context::<Parts>() {
        Some(rp) => rp,
        None => {
            log::error!("sign_in: could not retrieve request parts");
            return Err(ServerFnError::ServerError(String::from(
                "Sign-in request failed.",
            )));
        }
    };
    match http_req
        .headers
        .get(http::header::HOST)
        .and_then(|host| host.to_str().ok())
    {
        Some(host) => Ok(format!("https://{host}")),
        None => {
            log::error!("sign_in: request carried no host header");
            Err(ServerFnError::ServerError(String::from(
                "Sign-in request failed.",
            )))
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_carries_all_params() {
        let client = AuthClient::new("https://id.example.com/authorize", "kupintar-web");
        let url = client
            .authorize_url(
                OauthProvider::Google,
                "state123",
                "https://kupintar.app/dashboard",
            )
            .unwrap();
        assert!(url.starts_with("https://id.example.com/authorize?"));
        assert!(url.contains("provider=google"));
        assert!(url.contains("client_id=kupintar-web"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("state=state123"));
    }

    #[test]
    fn authorize_url_encodes_redirect_target() {
        let client = AuthClient::new("https://id.example.com/authorize", "kupintar-web");
        let url = client
            .authorize_url(
                OauthProvider::Google,
                "s",
                "https://kupintar.app/dashboard",
            )
            .unwrap();
        assert!(url.contains("redirect_uri=https%3A%2F%2Fkupintar.app%2Fdashboard"));
    }

    #[test]
    fn authorize_url_rejects_bad_endpoint() {
        let client = AuthClient::new("not a url", "kupintar-web");
        assert!(matches!(
            client.authorize_url(OauthProvider::Google, "s", "https://kupintar.app/dashboard"),
            Err(AuthError::BadEndpoint)
        ));
    }

    #[test]
    fn state_tokens_are_url_safe_and_fresh() {
        let first = gen_state_token();
        let second = gen_state_token();
        // 16 bytes of entropy, unpadded base64
        assert_eq!(first.len(), 22);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_ne!(first, second);
    }
}
