use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Serialize;

use crate::broadcast::{Broadcast, Subscription};
use crate::config::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::error::warn_on_failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {:?}", other)),
        }
    }
}

/// Durable key-value storage for preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        warn_on_failure(self.storage.set_item(key, value), "persist a preference");
    }
}

/// Lives only as long as the page. Used when there is no local storage.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// The operating system's light/dark preference, if it can be queried.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool>;
}

pub struct BrowserColorScheme;

impl ColorSchemeSource for BrowserColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Whatever marks the active theme on the rendered page.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// Sets `data-theme` on `<html>`.
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(el) => {
                warn_on_failure(
                    el.set_attribute(THEME_ATTRIBUTE, theme.as_str()),
                    "mark the active theme",
                );
            }
            None => debug!("No document to apply theme {} to", theme),
        }
    }
}

pub struct DetachedSurface;

impl ThemeSurface for DetachedSurface {
    fn apply(&self, _theme: Theme) {}
}

/// Stored choice first, then the system preference, then light.
pub fn resolve_initial(store: &dyn PreferenceStore, scheme: &dyn ColorSchemeSource) -> Theme {
    if let Some(stored) = store.load(THEME_STORAGE_KEY) {
        match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => warn!("Ignoring stored theme preference: {}", err),
        }
    }
    match scheme.prefers_dark() {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::default(),
    }
}

/// The light/dark state machine. The only transition is [`toggle`](Self::toggle).
pub struct ThemeController {
    state: Broadcast<Theme>,
    store: Rc<dyn PreferenceStore>,
    surface: Rc<dyn ThemeSurface>,
}

impl ThemeController {
    pub fn new(
        store: Rc<dyn PreferenceStore>,
        scheme: &dyn ColorSchemeSource,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        let initial = resolve_initial(store.as_ref(), scheme);
        surface.apply(initial);
        info!("Starting with {} theme", initial);
        Self {
            state: Broadcast::new(initial),
            store,
            surface,
        }
    }

    pub fn from_environment() -> Self {
        let store: Rc<dyn PreferenceStore> = match LocalStore::open() {
            Some(local) => Rc::new(local),
            None => {
                debug!("Local storage unavailable, theme choice will not survive reloads");
                Rc::new(MemoryStore::default())
            }
        };
        if web_sys::window().and_then(|w| w.document()).is_some() {
            Self::new(store, &BrowserColorScheme, Rc::new(DocumentRoot))
        } else {
            Self::new(store, &FixedColorScheme(None), Rc::new(DetachedSurface))
        }
    }

    pub fn current(&self) -> Theme {
        self.state.get()
    }

    /// Flips the theme, persists and applies it, and notifies subscribers,
    /// all before returning the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.state.get().toggled();
        self.store.save(THEME_STORAGE_KEY, next.as_str());
        self.surface.apply(next);
        self.state.publish(next);
        debug!("Theme toggled to {}", next);
        next
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription<Theme>
    where
        F: Fn(&Theme) + 'static,
    {
        self.state.subscribe(listener)
    }
}
