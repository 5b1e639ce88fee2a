use log::error;
use yew::prelude::*;

use crate::components::divider::{DividerShape, SectionDivider};
use crate::components::hero::Hero;
use crate::content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::device::context::{use_device, Responsive};

#[function_component(Contact)]
pub fn contact() -> Html {
    // Touch screens can dial directly, so lead with the phone number there.
    let touch = match use_device() {
        Ok(device) => device.has_touch,
        Err(err) => {
            error!("{}", err);
            return html! {};
        }
    };
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    let tel = format!("tel:{}", CONTACT_PHONE.replace(' ', ""));

    let desktop = html! {
        <div class="contact-grid">
            <div class="contact-card">
                <h3>{"Email"}</h3>
                <a href={mailto.clone()}>{CONTACT_EMAIL}</a>
            </div>
            <div class="contact-card">
                <h3>{"Phone"}</h3>
                <a href={tel.clone()}>{CONTACT_PHONE}</a>
            </div>
            <div class="contact-card">
                <h3>{"Studio"}</h3>
                <p>{CONTACT_ADDRESS}</p>
            </div>
        </div>
    };

    let mobile = html! {
        <div class="contact-stack">
            {
                if touch {
                    html! { <a class="contact-button" href={tel.clone()}>{"Call the studio"}</a> }
                } else {
                    html! {}
                }
            }
            <a class="contact-button" href={mailto}>{"Email us"}</a>
            <p>{CONTACT_ADDRESS}</p>
        </div>
    };

    html! {
        <div class="contact-page">
            <Hero title="Say hello" subtitle="Tell us what you're building. We reply within two working days." />
            <SectionDivider shape={DividerShape::Wave} flip={true} />
            <Responsive mobile={mobile} desktop={desktop} />
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .contact-card {
                    padding: 2rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    background: var(--surface);
                }
                .contact-card a {
                    color: var(--accent);
                }
                .contact-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 2rem 1.25rem;
                    text-align: center;
                }
                .contact-button {
                    display: block;
                    padding: 1rem;
                    border-radius: 12px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::context::DeviceProvider;

    #[function_component]
    fn Unprovided() -> Html {
        html! { <Contact /> }
    }

    #[function_component]
    fn Provided() -> Html {
        html! {
            <DeviceProvider>
                <Contact />
            </DeviceProvider>
        }
    }

    #[tokio::test]
    async fn contact_page_needs_a_device_provider() {
        let rendered = yew::ServerRenderer::<Unprovided>::new().render().await;
        assert!(!rendered.contains("contact-page"));
        assert!(!rendered.contains(CONTACT_EMAIL));
    }

    #[tokio::test]
    async fn contact_page_renders_desktop_cards_by_default() {
        let rendered = yew::ServerRenderer::<Provided>::new().render().await;
        assert!(rendered.contains("contact-page"));
        assert!(rendered.contains("contact-grid"));
        assert!(!rendered.contains("Call the studio"));
    }
}
