use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: &'static FaqEntry,
    #[prop_or_default]
    pub initially_open: bool,
}

/// One question that expands in place to show its answer.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| props.initially_open);

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(!*expanded);
        })
    };

    let marker = if *expanded { "−" } else { "+" };

    html! {
        <div class={classes!("faq-item", (*expanded).then(|| "open"))}>
            <button
                class="faq-question"
                onclick={onclick}
                aria-expanded={expanded.to_string()}
            >
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{marker}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqItem key={entry.question} entry={entry} />
            }) }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: var(--muted);
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQ;

    #[tokio::test]
    async fn every_entry_starts_collapsed() {
        let rendered = yew::ServerRenderer::<FaqList>::with_props(|| FaqListProps { entries: FAQ })
            .render()
            .await;

        for entry in FAQ {
            assert!(rendered.contains(entry.question), "{} missing", entry.question);
        }
        assert_eq!(rendered.matches("aria-expanded=\"false\"").count(), FAQ.len());
        assert!(!rendered.contains("faq-item open"));
    }

    #[tokio::test]
    async fn item_can_start_expanded() {
        let rendered = yew::ServerRenderer::<FaqItem>::with_props(|| FaqItemProps {
            entry: &FAQ[0],
            initially_open: true,
        })
        .render()
        .await;

        assert!(rendered.contains("faq-item open"));
        assert!(rendered.contains("aria-expanded=\"true\""));
        assert!(rendered.contains(FAQ[0].answer));
    }
}
