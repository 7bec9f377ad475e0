use dioxus::prelude::*;

use api::{
    profile::{HEADLINE, NAME},
    reveal::RevealOptions,
};

use crate::common::{
    icons::{Icon, SvgIcon},
    reveal::use_scroll_reveal,
};
use crate::components::navigation::SectionLink;

#[component]
pub fn HeroSection() -> Element {
    let mut reveal = use_scroll_reveal(RevealOptions::once());

    rsx! {
        section { id: "home", class: "section hero",
            div {
                class: "container",
                style: reveal.style(),
                onmounted: move |evt| reveal.observe(evt),

                h1 { class: "hero-title",
                    "I'm "
                    span { class: "highlight", "{NAME}" }
                }
                p { class: "hero-subtitle", "{HEADLINE}" }

                div { class: "hero-actions",
                    SectionLink { section: "projects", class: "btn btn-primary btn-lg",
                        "View My Work"
                        SvgIcon { icon: Icon::ArrowDown }
                    }
                    SectionLink { section: "contact", class: "btn btn-secondary btn-lg", "Contact Me" }
                }
            }
        }
    }
}
