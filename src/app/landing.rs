use leptos::prelude::*;

use super::components::signin::SignInButton;
use crate::auth::SignIn;
use crate::content::{self, FaqEntry, Feature, Step, Testimonial};
use crate::defs::{
    GETTING_STARTED_LABEL, GET_STARTED_LABEL, SIGNING_IN_LABEL, SIGN_IN_LABEL,
};

/// Renders the marketing page.
///
/// Every section is static copy; the only user actions are the shared
/// sign-in control and the FAQ accordion. Sign-in asks the server for a
/// provider redirect and then navigates the whole window there, so no
/// local state survives a successful attempt.
#[component]
pub fn LandingPage() -> impl IntoView {
    let signin = ServerAction::<SignIn>::new();

    // On failure: log and stay put, buttons already re-enabled by the
    // action settling. No retry, no user-facing error surface.
    Effect::new(move |_| match signin.value().get() {
        Some(Ok(authorize_url)) => {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&authorize_url) {
                    log::error!("sign-in redirect failed: {e:?}");
                }
            }
        }
        Some(Err(e)) => log::error!("sign-in error: {e}"),
        None => {}
    });

    view! {
        <div class="landing">
            <Header signin/>
            <Hero signin/>
            <FeaturesSection/>
            <HowItWorks/>
            <Testimonials/>
            <FaqSection/>
            <Footer/>
        </div>
    }
}

#[component]
fn Header(signin: ServerAction<SignIn>) -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="brand">"Kupintar"</h1>
            <nav class="site-nav">
                <a href="#about">"About"</a>
                <a href="#faq">"FAQ"</a>
                <SignInButton signin idle=SIGN_IN_LABEL busy=SIGNING_IN_LABEL class="nav-signin"/>
            </nav>
        </header>
    }
}

#[component]
fn Hero(signin: ServerAction<SignIn>) -> impl IntoView {
    view! {
        <section id="about" class="hero">
            <h2 class="hero-title">
                "Learn Together,"
                <br/>
                <span class="hero-accent">"Make It Fun."</span>
            </h2>
            <p class="hero-description">
                "Kupintar helps you find study groups, discuss materials, and hit your \
                 learning goals together with peers who share your passion for knowledge."
            </p>
            <SignInButton
                signin
                idle=GET_STARTED_LABEL
                busy=GETTING_STARTED_LABEL
                class="hero-cta"
            />
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="section-header">
                <h3 class="section-title">"Everything you need to succeed"</h3>
                <p class="section-description">
                    "Powerful features designed to make collaborative learning engaging and effective."
                </p>
            </div>
            <div class="features-grid">
                {content::FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h4 class="feature-title">{feature.title}</h4>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h3 class="section-title">"How It Works"</h3>
            <div class="steps-grid">
                {content::HOW_IT_WORKS
                    .iter()
                    .map(|step| view! { <StepCard step/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: &'static Step) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-number">{step.number}</div>
            <h4 class="step-title">{step.title}</h4>
            <p class="step-description">{step.description}</p>
        </div>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h3 class="section-title">"Loved by students everywhere"</h3>
            <div class="testimonials-grid">
                {content::TESTIMONIALS
                    .iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let stars = (0..testimonial.rating)
        .map(|_| view! { <span class="star">"★"</span> })
        .collect_view();

    view! {
        <figure class="testimonial-card">
            <div
                class="testimonial-rating"
                aria-label=format!(
                    "{} out of {} stars",
                    testimonial.rating,
                    content::MAX_RATING,
                )
            >
                {stars}
            </div>
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-caption">
                <span class="testimonial-name">{testimonial.name}</span>
                <span class="testimonial-role">{testimonial.role}</span>
            </figcaption>
        </figure>
    }
}

/// Next accordion state after a click: expand the clicked entry unless
/// it already was the expanded one, in which case everything collapses.
fn toggle_faq(expanded: Option<usize>, clicked: usize) -> Option<usize> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Single-expansion FAQ accordion; at most one answer is visible.
#[component]
fn FaqSection() -> impl IntoView {
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section id="faq" class="faq">
            <h3 class="section-title">"Frequently Asked Questions"</h3>
            <div class="faq-list">
                {content::FAQ
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! {
                        <FaqItem index entry expanded set_expanded/>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqItem(
    index: usize,
    entry: &'static FaqEntry,
    expanded: ReadSignal<Option<usize>>,
    set_expanded: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let is_open = move || expanded.get() == Some(index);

    view! {
        <div class="faq-item">
            <button
                class="faq-question"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| set_expanded.update(|cur| *cur = toggle_faq(*cur, index))
            >
                <span>{entry.question}</span>
                <span class="faq-toggle">{move || if is_open() { "−" } else { "+" }}</span>
            </button>
            <Show when=is_open>
                <p class="faq-answer">{entry.answer}</p>
            </Show>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="footer-copyright">"© Kupintar 2025"</p>
            <div class="footer-links">
                <a href="#contact">"Contact"</a>
                <a href="#github">"GitHub"</a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_faq;

    #[test]
    fn click_expands_collapsed_entry() {
        assert_eq!(toggle_faq(None, 2), Some(2));
    }

    #[test]
    fn second_click_collapses_same_entry() {
        let after_first = toggle_faq(None, 2);
        assert_eq!(toggle_faq(after_first, 2), None);
    }

    #[test]
    fn clicking_another_entry_moves_the_expansion() {
        assert_eq!(toggle_faq(Some(0), 3), Some(3));
    }

    #[test]
    fn click_sequence_tracks_last_clicked_unless_repeated() {
        let clicks = [(1, Some(1)), (2, Some(2)), (2, None), (0, Some(0)), (0, None)];
        let mut state = None;
        for (clicked, expected) in clicks {
            state = toggle_faq(state, clicked);
            assert_eq!(state, expected);
        }
    }
}
