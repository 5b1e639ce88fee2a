use yew::prelude::*;

use crate::components::divider::{DividerShape, SectionDivider};
use crate::components::hero::Hero;
use crate::device::context::Responsive;

const STORY: &[&str] = &[
    "Northlight started in 2016 as two designers sharing a desk above a bike shop.",
    "Today we are a team of nine: strategists, designers and engineers who prefer fewer, deeper projects.",
    "We still answer our own email.",
];

const VALUES: &[(&str, &str)] = &[
    ("Clarity", "If it needs explaining, it isn't finished."),
    ("Craft", "Details are the product, not decoration."),
    ("Candour", "We say what we think, early."),
];

#[function_component(DesktopAbout)]
fn desktop_about() -> Html {
    html! {
        <section class="about-columns">
            <div class="about-story">
                { for STORY.iter().map(|line| html! { <p>{*line}</p> }) }
            </div>
            <div class="about-values">
                { for VALUES.iter().map(|(name, line)| html! {
                    <div class="value-card">
                        <h3>{*name}</h3>
                        <p>{*line}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(MobileAbout)]
fn mobile_about() -> Html {
    html! {
        <section class="about-stack">
            <p>{STORY[0]}</p>
            { for VALUES.iter().map(|(name, line)| html! {
                <details class="value-card">
                    <summary>{*name}</summary>
                    <p>{*line}</p>
                </details>
            }) }
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <Hero title="About us" subtitle="Small on purpose." />
            <SectionDivider shape={DividerShape::Angle} />
            <Responsive
                mobile={html! { <MobileAbout /> }}
                desktop={html! { <DesktopAbout /> }}
            />
            <style>
                {r#"
                .about-columns {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .about-stack {
                    padding: 2rem 1.25rem;
                }
                .value-card {
                    padding: 1.25rem;
                    margin-bottom: 1rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    background: var(--surface);
                }
                "#}
            </style>
        </div>
    }
}
