use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::Testimonial;

/// Moves `delta` slides from `index`, wrapping at both ends.
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let len = props.testimonials.len();

    // Restarting the timer on every slide change gives a full interval after a manual click.
    {
        let shown = *index;
        let index = index.clone();
        use_effect_with_deps(
            move |current| {
                let current = *current;
                let interval = Interval::new(CAROUSEL_INTERVAL_MS, move || {
                    index.set(step(current, len, 1));
                });
                move || drop(interval)
            },
            shown,
        );
    }

    let go = |delta: isize| {
        let index = index.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            index.set(step(*index, len, delta));
        })
    };

    let Some(current) = props.testimonials.get(*index) else {
        return html! {};
    };

    html! {
        <section class="testimonials">
            <button class="carousel-arrow" onclick={go(-1)} aria-label="Previous testimonial">{"‹"}</button>
            <blockquote key={*index} class="testimonial">
                <p class="testimonial-quote">{format!("“{}”", current.quote)}</p>
                <footer>
                    <strong>{current.author}</strong>
                    <span class="testimonial-role">{current.role}</span>
                </footer>
            </blockquote>
            <button class="carousel-arrow" onclick={go(1)} aria-label="Next testimonial">{"›"}</button>
            <div class="carousel-dots">
                { for (0..len).map(|i| html! {
                    <span class={classes!("dot", (i == *index).then(|| "active"))}></span>
                }) }
            </div>
            <style>
                {r#"
                .testimonials {
                    position: relative;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 4rem 2rem;
                    background: var(--surface);
                }
                .testimonial {
                    flex: 1;
                    max-width: 640px;
                    margin: 0;
                    text-align: center;
                    animation: testimonial-fade 0.6s ease-in-out;
                }
                .testimonial-quote {
                    font-size: 1.4rem;
                    font-style: italic;
                }
                .testimonial-role {
                    display: block;
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .carousel-arrow {
                    background: none;
                    border: none;
                    font-size: 2rem;
                    color: var(--text);
                    cursor: pointer;
                }
                .carousel-dots {
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: var(--border);
                }
                .dot.active {
                    background: var(--accent);
                }
                @keyframes testimonial-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;

    #[test]
    fn wraps_forward_and_back() {
        assert_eq!(step(0, 3, 1), 1);
        assert_eq!(step(2, 3, 1), 0);
        assert_eq!(step(0, 3, -1), 2);
        assert_eq!(step(1, 3, -4), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        assert_eq!(step(0, 0, 1), 0);
        assert_eq!(step(5, 0, -1), 0);
    }

    #[tokio::test]
    async fn opens_on_first_testimonial_with_a_dot_per_slide() {
        let rendered = yew::ServerRenderer::<TestimonialCarousel>::with_props(|| {
            TestimonialCarouselProps {
                testimonials: TESTIMONIALS,
            }
        })
        .render()
        .await;

        assert!(rendered.contains(TESTIMONIALS[0].author));
        assert!(!rendered.contains(TESTIMONIALS[1].author));
        assert_eq!(rendered.matches("class=\"dot").count(), TESTIMONIALS.len());
    }
}
