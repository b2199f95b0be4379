use leptos::prelude::*;

use crate::auth::SignIn;

/// Sign-in control shared by the header and the hero.
///
/// Disabled for as long as a request is pending, so a second attempt
/// cannot overlap the first; the label swaps to `busy` for the same
/// window and reverts when the action settles.
#[component]
pub fn SignInButton(
    signin: ServerAction<SignIn>,
    idle: &'static str,
    busy: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let pending = signin.pending();

    view! {
        <button
            class=class
            disabled=move || pending.get()
            on:click=move |_| {
                signin.dispatch(SignIn {});
            }
        >
            {move || if pending.get() { busy } else { idle }}
        </button>
    }
}
