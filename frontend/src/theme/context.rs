use yew::prelude::*;

use crate::error::{require, ScopeError};
use crate::theme::state::{Theme, ThemeController};

/// What consumers of the theme context get: the current theme and a way to flip it.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let controller = use_memo(|_| ThemeController::from_environment(), ());
    let theme = use_state_eq(|| controller.current());

    {
        let controller = controller.clone();
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = controller.subscribe(move |next| theme.set(*next));
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle = {
        let controller = controller.clone();
        use_callback(
            move |_: (), _| {
                controller.toggle();
            },
            (),
        )
    };

    let handle = ThemeHandle {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> Result<ThemeHandle, ScopeError> {
    require(use_context::<ThemeHandle>(), "theme", "ThemeProvider")
}
