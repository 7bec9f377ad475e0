use dioxus::prelude::*;

use api::{
    project::{Project, timeline},
    reveal::RevealOptions,
};

use crate::common::reveal::use_scroll_reveal;

mod item;
use item::TimelineItem;

// project timeline
//
// cards alternate sides of the spine by position, and each one watches the
// viewport on its own, so the stagger comes from scrolling rather than from any
// scheduled delay
#[component]
pub fn Timeline(projects: &'static [Project]) -> Element {
    rsx! {
        div { class: "timeline",
            for (placement , project) in timeline(projects) {
                TimelineItem { key: "{project.id}", project, placement }
            }
            TodayMarker {}
        }
    }
}

#[component]
fn TodayMarker() -> Element {
    let mut reveal = use_scroll_reveal(RevealOptions::default());

    rsx! {
        div {
            class: "timeline-today",
            style: reveal.style(),
            onmounted: move |evt| reveal.observe(evt),
            div { class: "dot" }
            span { class: "label", "Today" }
        }
    }
}
