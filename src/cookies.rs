use cfg_if::cfg_if;

cfg_if! { if #[cfg(feature = "ssr")] {
    use crate::defs::{STATE_COOKIE, STATE_COOKIE_TTL_MINUTES};
    use axum::http::{
        header::{COOKIE, SET_COOKIE},
        HeaderValue,
    };
    use chrono::prelude::*;
    use http::request::Parts;
    use leptos::prelude::*;
}}

/// Mirrors the OAuth state parameter into a short-lived cookie so the
/// provider callback can be checked against it. Each sign-in attempt
/// overwrites the previous cookie.
#[cfg(feature = "ssr")]
pub fn issue_state_cookie(state: &str) -> Result<(), ServerFnError> {
    let response = match use_context::<leptos_axum::ResponseOptions>() {
        Some(ro) => Ok(ro),
        None => {
            log::error!("issue_state_cookie: no response options available");
            Err::<leptos_axum::ResponseOptions, ServerFnError>(ServerFnError::ServerError(
                String::from("Sign-in request failed."),
            ))
        }
    }?;
    let expire_time: DateTime<Utc> =
        Utc::now() + chrono::Duration::minutes(STATE_COOKIE_TTL_MINUTES);
    let date_string: String = expire_time.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
    response.append_header(
        SET_COOKIE,
        HeaderValue::from_str(&format!(
            "{STATE_COOKIE}={state}; Expires={date_string}; Secure; SameSite=Lax; HttpOnly; \
             Path=/"
        ))
        .expect("to create header value"),
    );
    Ok(())
}

/// State left behind by a sign-in attempt whose callback never arrived,
/// if any.
#[cfg(feature = "ssr")]
pub fn pending_state() -> Option<String> {
    // grab request, bailing if there is none
    let http_req = use_context::<Parts>()?;
    for headercookie in http_req.headers.get_all(COOKIE).iter() {
        match headercookie.to_str() {
            Ok(cookie) => {
                if let Some(state) = get_cookie_value(cookie, STATE_COOKIE) {
                    return Some(state);
                }
            }
            Err(_) => continue,
        }
    }
    None
}

#[cfg(feature = "ssr")]
pub fn get_cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let cookie_arr = cookie.split_once('=').unwrap_or_default();
        if cookie_arr.0.trim().eq(key) && !cookie_arr.1.trim().is_empty() {
            Some(cookie_arr.1.to_string())
        } else {
            None
        }
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::defs::STATE_COOKIE;

    #[test]
    fn finds_state_among_other_cookies() {
        let header = format!("theme=dark; {STATE_COOKIE}=abc123; lang=id");
        assert_eq!(
            get_cookie_value(&header, STATE_COOKIE),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn missing_key_yields_none() {
        assert_eq!(get_cookie_value("theme=dark; lang=id", STATE_COOKIE), None);
    }

    #[test]
    fn empty_value_yields_none() {
        let header = format!("{STATE_COOKIE}=; theme=dark");
        assert_eq!(get_cookie_value(&header, STATE_COOKIE), None);
    }

    #[test]
    fn whitespace_around_pairs_is_tolerated() {
        let header = format!("  {STATE_COOKIE} = xyz ; theme=dark");
        assert_eq!(
            get_cookie_value(&header, STATE_COOKIE),
            Some(" xyz ".to_string())
        );
    }
}
