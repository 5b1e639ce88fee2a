use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::hero::Hero;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub enum SubscribeState {
    Idle,
    Submitting,
    Subscribed(String),
    Invalid,
}

/// Rejects the obvious typos; the mailing list provider does the real check.
pub fn validate_email(input: &str) -> bool {
    let email = input.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[function_component(Subscribe)]
pub fn subscribe() -> Html {
    let email = use_state(String::new);
    let state = use_state(|| SubscribeState::Idle);

    let oninput = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            if *state == SubscribeState::Invalid {
                state.set(SubscribeState::Idle);
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubscribeState::Submitting {
                return;
            }
            let address = email.trim().to_string();
            if !validate_email(&address) {
                warn!("Rejected newsletter address");
                state.set(SubscribeState::Invalid);
                return;
            }
            state.set(SubscribeState::Submitting);
            let state = state.clone();
            let email = email.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::get_subscribe_delay_ms()).await;
                info!("Newsletter signup accepted");
                email.set(String::new());
                state.set(SubscribeState::Subscribed(address));
            });
        })
    };

    let status = match &*state {
        SubscribeState::Idle => html! {},
        SubscribeState::Submitting => html! { <p class="form-status">{"Signing you up..."}</p> },
        SubscribeState::Invalid => html! {
            <p class="form-status error">{"That doesn't look like an email address."}</p>
        },
        SubscribeState::Subscribed(address) => html! {
            <p class="form-status success">{format!("Thanks! We'll write to {} soon.", address)}</p>
        },
    };

    html! {
        <div class="subscribe-page">
            <Hero
                title="Notes from the studio"
                subtitle="Case studies, process sketches and the occasional reading list. Monthly, never more."
            />
            <form class="subscribe-form" onsubmit={onsubmit}>
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={oninput}
                    disabled={*state == SubscribeState::Submitting}
                />
                <button type="submit" disabled={*state == SubscribeState::Submitting}>
                    {"Subscribe"}
                </button>
            </form>
            { status }
            <style>
                {r#"
                .subscribe-form {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    padding: 3rem 1.25rem 1rem;
                }
                .subscribe-form input {
                    flex: 1 1 260px;
                    max-width: 420px;
                    padding: 0.9rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: var(--text);
                }
                .subscribe-form button {
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: none;
                    background: var(--accent);
                    color: #fff;
                    cursor: pointer;
                }
                .form-status {
                    text-align: center;
                    color: var(--muted);
                }
                .form-status.error {
                    color: #e5484d;
                }
                .form-status.success {
                    color: #30a46c;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("maya@halden.coffee"));
        assert!(validate_email("  first.last+news@mail.example.co.uk "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@example..com",
            "user@.example.com",
            "a@b@c.com",
            "first last@example.com",
        ] {
            assert!(!validate_email(bad), "{bad:?} should be rejected");
        }
    }
}
