use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod broadcast;
mod config;
mod content;
mod error;
mod styles;
mod device {
    pub mod classify;
    pub mod context;
    pub mod listener;
    pub mod viewport;
}
mod theme {
    pub mod context;
    pub mod state;
    pub mod toggle;
}
mod components {
    pub mod carousel;
    pub mod divider;
    pub mod faq;
    pub mod hero;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
    pub mod subscribe;
}

use device::context::{use_device, DeviceProvider, RenderVariant};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    services::Services,
    subscribe::Subscribe,
};
use theme::{context::ThemeProvider, toggle::ThemeToggle};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/subscribe")]
    Subscribe,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Subscribe, "Subscribe"),
    (Route::Contact, "Contact"),
];

fn switch(routes: Route) -> Html {
    info!("Rendering {:?} page", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Services => html! { <Services /> },
        Route::Subscribe => html! { <Subscribe /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h1>{"Nothing here"}</h1>
                <Link<Route> to={Route::Home} classes="nav-link">{"Back to the start"}</Link<Route>>
            </section>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let device = use_device();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 80.0);
                                }
                            }
                        }
                    });
                    error::warn_on_failure(
                        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                        "listen for scroll",
                    );
                    Box::new(move || {
                        error::warn_on_failure(
                            window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ),
                            "stop listening for scroll",
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let device = match device {
        Ok(device) => device,
        Err(err) => {
            error!("{}", err);
            return html! {};
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = html! {
        <>
            { for NAV_LINKS.iter().map(|(route, label)| html! {
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={route.clone()} classes="nav-link">{*label}</Link<Route>>
                </div>
            }) }
        </>
    };

    let right = match RenderVariant::for_device(device.device_type) {
        RenderVariant::Desktop => html! {
            <div class="nav-right">
                { links }
                <ThemeToggle />
            </div>
        },
        RenderVariant::Mobile => html! {
            <>
                <ThemeToggle />
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", "mobile", (*menu_open).then(|| "mobile-menu-open"))}>
                    { links }
                </div>
            </>
        },
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Northlight"}
                </Link<Route>>
                { right }
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <DeviceProvider>
                <BrowserRouter>
                    <style>{styles::GLOBAL_CSS}</style>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <footer class="site-footer">
                        {format!("© Northlight Studio · {}", content::CONTACT_EMAIL)}
                    </footer>
                </BrowserRouter>
            </DeviceProvider>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
