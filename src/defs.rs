/// Canonical site root; the legacy index stub redirects here
pub const ROOT_PATH: &str = "/";

/// Post-login destination, appended to the request origin when asking
/// the identity provider for a redirect
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Scopes requested from the identity provider
pub const OAUTH_SCOPE: &str = "openid email profile";

/// Cookie mirroring the OAuth state parameter of the latest sign-in
/// attempt, so the provider callback can be checked against it
pub const STATE_COOKIE: &str = "__Host-oauth-state";

/// Minutes before an unconsumed state cookie expires
pub const STATE_COOKIE_TTL_MINUTES: i64 = 10;

/// Header sign-in control labels
pub const SIGN_IN_LABEL: &str = "Sign In";
pub const SIGNING_IN_LABEL: &str = "Signing in...";

/// Hero call-to-action labels
pub const GET_STARTED_LABEL: &str = "Get Started";
pub const GETTING_STARTED_LABEL: &str = "Getting Started...";
