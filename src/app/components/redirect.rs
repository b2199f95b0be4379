use cfg_if::cfg_if;
use leptos::prelude::*;

use crate::defs::ROOT_PATH;

cfg_if! { if #[cfg(feature = "ssr")] {
    use leptos_axum::redirect;
}}

cfg_if! { if #[cfg(not(feature = "ssr"))] {
    use leptos_router::{hooks::use_navigate, NavigateOptions};
}}

/// Sends the legacy `/index` path back to the site root.
///
/// On the server this answers with an HTTP redirect; when the route is
/// reached client-side the navigation happens in the browser instead,
/// replacing the history entry so back-navigation does not land on the
/// stub again.
#[component]
pub fn IndexRedirect() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        log::trace!("index stub hit, redirecting to {ROOT_PATH}");
        redirect(ROOT_PATH);
    }

    #[cfg(not(feature = "ssr"))]
    {
        let navigate = use_navigate();
        Effect::new(move |_| {
            navigate(
                ROOT_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    }

    view! { <></> } // redirect is non-visible
}
