use dioxus::prelude::*;

use api::profile::NAME;

use crate::sections::{AboutSection, ContactSection, HeroSection, ProjectsSection};

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "home-container",
            HeroSection {}
            ProjectsSection {}
            AboutSection {}
            ContactSection {}

            footer { class: "site-footer",
                div { class: "container",
                    p { "{NAME} • Built with Rust and Dioxus" }
                }
            }
        }
    }
}
