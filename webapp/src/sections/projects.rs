use dioxus::prelude::*;

use api::{project::PROJECTS, reveal::RevealOptions};

use crate::{common::reveal::use_scroll_reveal, timeline::Timeline};

#[component]
pub fn ProjectsSection() -> Element {
    let mut reveal = use_scroll_reveal(RevealOptions::once());

    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                div {
                    style: reveal.style(),
                    onmounted: move |evt| reveal.observe(evt),
                    h2 { class: "section-title", "My Project Timeline" }
                    p { class: "section-lead",
                        "A chronological journey through my key projects. Scroll down to see how my skills and interests have evolved over time."
                    }
                }

                Timeline { projects: PROJECTS }
            }
        }
    }
}
