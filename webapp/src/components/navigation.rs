use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::profile::LOGO_TEXT;

use crate::{
    Route,
    common::{
        dom::{scroll_to_section, use_scrolled},
        theme::{ThemeProvider, use_theme},
    },
    components::modal::ModalBox,
};

// how far the page scrolls before the header compacts
pub const SCROLL_COMPACT_PX: f64 = 20.0;

// (label, section id)
const SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("Projects", "projects"),
    ("About", "about"),
    ("Contact", "contact"),
];

// in-page link that smooth-scrolls instead of jumping
#[component]
pub fn SectionLink(section: &'static str, class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "#{section}",
            onclick: move |evt| {
                evt.prevent_default();
                scroll_to_section(section);
            },
            {children}
        }
    }
}

// the logo doubles as the theme switch
#[component]
fn Logo(compact: bool) -> Element {
    let mut theme = use_theme();

    let size = if compact { "logo-small" } else { "logo-medium" };
    let hint = if theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        a {
            class: "logo {size}",
            href: "/",
            title: "{hint}",
            onclick: move |evt| {
                evt.prevent_default();
                theme.toggle();
            },
            "{LOGO_TEXT}"
        }
    }
}

#[component]
fn Header() -> Element {
    let scrolled = use_scrolled(SCROLL_COMPACT_PX);

    rsx! {
        header { class: if scrolled() { "site-header scrolled" } else { "site-header" },
            div { class: "container header-row",
                Logo { compact: scrolled() }
                nav { class: "nav-links",
                    for (label , section) in SECTIONS.iter().copied() {
                        SectionLink { key: "{section}", section, class: "nav-link", "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Layout() -> Element {
    rsx! {
        ThemeProvider {
            div { class: "page",
                Header {}
                main { class: "page-main", Outlet::<Route> {} }
                ModalBox {}
            }
        }
    }
}
