use cfg_if::cfg_if;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

mod components;
mod landing;
use components::redirect::IndexRedirect;
use landing::LandingPage;

cfg_if! { if #[cfg(feature = "ssr")] {
    use axum::{
        http::{HeaderValue, header::CONTENT_TYPE}
    };
    use leptos::nonce::use_nonce;
}}

pub mod error_template;
use error_template::{AppError, ErrorTemplate};

#[cfg(feature = "ssr")]
fn set_headers() {
    let response = match use_context::<leptos_axum::ResponseOptions>() {
        Some(ro) => ro,
        None => return, // building routes in main.rs
    };
    let nonce = use_nonce().expect("a nonce to be made");
    response.insert_header(
        CONTENT_TYPE,
        HeaderValue::from_static(mime::TEXT_HTML_UTF_8.as_ref()),
    );
    response.insert_header(
        axum::http::header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    response.insert_header(
        axum::http::header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );
    response.insert_header(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, private"),
    );
    #[cfg(debug_assertions)]
    response.insert_header(
        axum::http::header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_str(
            // loading WASM requires 'unsafe-inline' 'unsafe-eval'
            // or
            // script-src 'strict-dynamic' 'nonce-{nonce}'
            // for debug we add the cargo leptos websocket:
            //     connect-src ws://127.0.0.1:3001/
            format!(
                "default-src 'self';\
                script-src 'unsafe-eval' 'strict-dynamic' 'nonce-{nonce}';\
                style-src 'nonce-{nonce}' 'self';\
                connect-src 'self' ws://127.0.0.1:3001/",
            )
            .as_str(),
        )
        .expect("valid header"),
    );
    #[cfg(not(debug_assertions))]
    response.insert_header(
        axum::http::header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_str(
            format!(
                "default-src 'self';\
                script-src 'unsafe-eval' 'strict-dynamic' 'nonce-{nonce}';\
                style-src 'nonce-{nonce}' 'self';\
                connect-src 'self'",
            )
            .as_str(),
        )
        .expect("valid header"),
    );
    response.insert_header(
        axum::http::header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000"),
    )
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    cfg_if::cfg_if! { if #[cfg(feature = "ssr")] {
        // Set correct header for `Content-Type: text/html; charset=UTF-8`, etc.
        set_headers();
    }}

    view! {
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/kupintar.css"/>

        // sets the document title
        <Title text="Kupintar: Learn Together, Make It Fun"/>

        <Router>
            <main>
                <Routes fallback=|| {
                    let mut errors = Errors::default();
                    errors.insert_with_default_key(AppError::NotFound);
                    view! { <ErrorTemplate outside_errors=errors/> }
                }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    // the old deployment served the landing page from /index
                    <Route path=StaticSegment("index") view=IndexRedirect/>
                </Routes>
            </main>
        </Router>
    }
}
