use log::error;
use yew::prelude::*;
use yew_router::components::Link;

use crate::device::context::use_device;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    #[prop_or_default]
    pub cta: Option<(String, Route)>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let compact = match use_device() {
        Ok(device) => device.is_mobile(),
        Err(err) => {
            error!("{}", err);
            return html! {};
        }
    };

    html! {
        <section class={classes!("hero", compact.then(|| "compact"))}>
            <h1>{&props.title}</h1>
            <p class="hero-subtitle">{&props.subtitle}</p>
            {
                if let Some((label, route)) = &props.cta {
                    html! {
                        <Link<Route> to={route.clone()} classes="hero-cta">
                            {label}
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: linear-gradient(135deg, var(--surface), var(--bg));
                }
                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    animation: hero-rise 0.8s ease-out;
                }
                .hero.compact {
                    padding: 5rem 1.25rem 3rem;
                }
                .hero.compact h1 {
                    font-size: 2.2rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: var(--muted);
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                }
                @keyframes hero-rise {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </section>
    }
}
