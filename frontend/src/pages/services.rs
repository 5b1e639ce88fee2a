use yew::prelude::*;

use crate::components::divider::SectionDivider;
use crate::components::faq::FaqList;
use crate::components::hero::Hero;
use crate::content::{Service, FAQ, SERVICES};
use crate::device::context::Responsive;
use crate::Route;

fn service_card(service: &Service) -> Html {
    html! {
        <div class="service-card">
            <span class="service-icon">{service.icon}</span>
            <h3>{service.title}</h3>
            <p>{service.summary}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let desktop = html! {
        <div class="services-grid">
            { for SERVICES.iter().map(service_card) }
        </div>
    };
    // Phones get a single swipeable row instead of the grid.
    let mobile = html! {
        <div class="services-row">
            { for SERVICES.iter().map(service_card) }
        </div>
    };

    html! {
        <div class="services-page">
            <Hero
                title="What we do"
                subtitle="Four disciplines, one team, no hand-offs."
                cta={Some(("Start a project".to_string(), Route::Contact))}
            />
            <Responsive mobile={mobile} desktop={desktop} />
            <SectionDivider />
            <section class="services-faq">
                <h2>{"Questions we hear a lot"}</h2>
                <FaqList entries={FAQ} />
            </section>
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .services-row {
                    display: flex;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    gap: 1rem;
                    padding: 2rem 1.25rem;
                }
                .services-row .service-card {
                    flex: 0 0 80%;
                    scroll-snap-align: center;
                }
                .service-card {
                    padding: 2rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    background: var(--surface);
                }
                .service-icon {
                    font-size: 1.8rem;
                    color: var(--accent);
                }
                .services-faq {
                    padding: 4rem 2rem;
                    background: var(--surface);
                }
                .services-faq h2 {
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
