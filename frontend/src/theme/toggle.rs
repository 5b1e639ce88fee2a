use log::error;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::theme::context::use_theme;
use crate::theme::state::Theme;

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    }
}

fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let handle = match use_theme() {
        Ok(handle) => handle,
        Err(err) => {
            error!("{}", err);
            return html! {};
        }
    };

    let onclick = {
        let toggle = handle.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle.emit(());
        })
    };

    html! {
        <button
            class={classes!("theme-toggle", handle.theme.as_str())}
            onclick={onclick}
            title={toggle_label(handle.theme)}
            aria-label={toggle_label(handle.theme)}
        >
            <span class="theme-toggle-icon">{toggle_icon(handle.theme)}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::context::ThemeHandle;

    #[test]
    fn label_describes_the_next_state() {
        assert_eq!(toggle_label(Theme::Light), "Switch to dark mode");
        assert_eq!(toggle_label(Theme::Dark), "Switch to light mode");
        assert_ne!(toggle_icon(Theme::Light), toggle_icon(Theme::Dark));
    }

    #[function_component]
    fn LooseToggle() -> Html {
        html! { <ThemeToggle /> }
    }

    #[function_component]
    fn DarkToggle() -> Html {
        let handle = ThemeHandle {
            theme: Theme::Dark,
            toggle: Callback::from(|_| ()),
        };
        html! {
            <ContextProvider<ThemeHandle> context={handle}>
                <ThemeToggle />
            </ContextProvider<ThemeHandle>>
        }
    }

    #[tokio::test]
    async fn toggle_outside_provider_renders_nothing() {
        let rendered = yew::ServerRenderer::<LooseToggle>::new().render().await;
        assert!(!rendered.contains("theme-toggle"));
    }

    #[tokio::test]
    async fn toggle_reflects_provided_theme() {
        let rendered = yew::ServerRenderer::<DarkToggle>::new().render().await;
        assert!(rendered.contains("theme-toggle"));
        assert!(rendered.contains("Switch to light mode"));
    }
}
