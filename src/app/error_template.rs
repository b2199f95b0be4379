use http::status::StatusCode;
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error page used by the router fallback.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => RwSignal::new(Errors::default()),
        },
    };
    // Downcast lets us take a type that implements `std::error::Error`
    let errors = Memo::new(move |_| {
        errors
            .get()
            .iter()
            .filter_map(|(_, v)| v.downcast_ref::<AppError>().cloned())
            .collect::<Vec<_>>()
    });

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<ResponseOptions>() {
            let status = errors
                .read_untracked()
                .first()
                .map(AppError::status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            response.set_status(status);
        }
    }

    view! {
        <section class="error-page">
            <h1 class="brand">"Kupintar"</h1>
            <h1>{move || {
                if errors.read().len() > 1 {
                    "Errors"
                } else {
                    "Error"
                }}}
            </h1>
            {move || {
                errors.get()
                    .into_iter()
                    .map(|error| {
                        let error_string = error.to_string();
                        let error_code = error.status_code();
                        view! {
                            <h2>{error_code.to_string()}</h2>
                            <p>"Error: " {error_string}</p>
                        }
                    })
                    .collect_view()
            }}
            <p><a href="/">"Return to the landing page"</a></p>
        </section>
    }
}
