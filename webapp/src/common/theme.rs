use dioxus::prelude::*;
use tracing::{debug, warn};

use api::theme::{DARK_CLASS, PREFERS_DARK_QUERY, Theme, initial_theme, toggle_theme};

use crate::common::storage::LocalPreferences;

// theme context
//
// provided once by the layout so that anything that cares about light/dark mode
// (currently just the logo) can read or flip it without reaching for a global
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    theme: Signal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn toggle(&mut self) {
        let next = toggle_theme(&mut LocalPreferences, *self.theme.peek());

        debug!("switching theme to {next:?}");
        self.theme.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

fn prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    let Some(root) = root else {
        return;
    };

    if let Err(err) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        warn!("failed to apply theme class: {err:?}");
    }
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_signal(|| initial_theme(&mut LocalPreferences, prefers_dark()));

    use_context_provider(|| ThemeContext { theme });

    use_effect(move || apply_theme(theme()));

    rsx! {
        {children}
    }
}
