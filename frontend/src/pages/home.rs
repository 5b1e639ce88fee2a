use log::info;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::carousel::TestimonialCarousel;
use crate::components::divider::{DividerShape, SectionDivider};
use crate::components::hero::Hero;
use crate::content::{SERVICES, TESTIMONIALS};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            info!("Home mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Hero
                title="Brands with a clear point of view"
                subtitle="Northlight is a small studio for strategy, identity and web. We help young companies look like they mean it."
                cta={Some(("See what we do".to_string(), Route::Services))}
            />
            <SectionDivider shape={DividerShape::Wave} />
            <section class="home-highlights">
                { for SERVICES.iter().take(3).map(|service| html! {
                    <div class="highlight">
                        <span class="highlight-icon">{service.icon}</span>
                        <h3>{service.title}</h3>
                    </div>
                }) }
            </section>
            <SectionDivider shape={DividerShape::Curve} flip={true} />
            <TestimonialCarousel testimonials={TESTIMONIALS} />
            <section class="home-subscribe">
                <h2>{"Notes from the studio"}</h2>
                <p>{"One short email a month about the work we're proud of."}</p>
                <Link<Route> to={Route::Subscribe} classes="hero-cta">
                    {"Subscribe"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .home-highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    background: var(--surface);
                }
                .highlight {
                    text-align: center;
                }
                .highlight-icon {
                    font-size: 2rem;
                    color: var(--accent);
                }
                .home-subscribe {
                    text-align: center;
                    padding: 5rem 2rem;
                }
                "#}
            </style>
        </div>
    }
}
