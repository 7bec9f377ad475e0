use dioxus::prelude::*;
use tracing::warn;

use api::{
    project::{PLACEHOLDER_IMAGE, Placement, Project},
    reveal::{Direction, RevealOptions},
};

use crate::common::{
    icons::{Icon, SvgIcon},
    reveal::use_scroll_reveal,
};

#[component]
pub fn TimelineItem(project: &'static Project, placement: Placement) -> Element {
    // left cards slide in from the left, right cards from the right
    let direction = match placement {
        Placement::Left => Direction::Right,
        Placement::Right => Direction::Left,
    };
    let mut reveal = use_scroll_reveal(RevealOptions::default().direction(direction));

    let side = placement.class();
    let visible = reveal.visible();
    let fade = if visible { "opacity: 1;" } else { "opacity: 0;" };
    let bubble = reveal.class("hidden", "shown");
    let month = project.month();
    let hidden_count = project.hidden_technology_count();

    rsx! {
        div {
            class: "timeline-item {side}",
            onmounted: move |evt| reveal.observe(evt),

            if let Some(year) = project.year() {
                div { class: "timeline-year", style: "{fade}", "{year}" }
            }

            div { class: "timeline-bubble {bubble}", "{month}" }

            div { class: "timeline-content", style: reveal.style(),
                div { class: "timeline-card",
                    h3 { "{project.title}" }
                    p { class: "description", "{project.description}" }

                    if project.image_url.is_some() {
                        ProjectMedia { project }
                    }

                    if !project.technologies.is_empty() {
                        div { class: "chip-list",
                            for tech in project.visible_technologies().iter() {
                                span { key: "{tech}", class: "chip", "{tech}" }
                            }
                            if hidden_count > 0 {
                                span { class: "chip chip-more", "+{hidden_count}" }
                            }
                        }
                    }

                    if let Some(link) = project.link {
                        ProjectLinks { project, link }
                    }
                }
                div { class: "timeline-date", "{project.date}" }
            }
        }
    }
}

#[component]
fn ProjectMedia(project: &'static Project) -> Element {
    let mut failed = use_signal(|| false);

    let Some(url) = project.image_url else {
        return rsx! {};
    };

    if project.is_youtube_embed() {
        return rsx! {
            div { class: "timeline-media",
                iframe {
                    src: url,
                    title: project.title,
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        };
    }

    let src = if failed() { PLACEHOLDER_IMAGE } else { url };

    rsx! {
        div { class: "timeline-media",
            img {
                src: "{src}",
                alt: project.title,
                loading: "lazy",
                onerror: move |_| {
                    // only swap once, in case the placeholder is missing too
                    if !failed() {
                        warn!("failed to load image: {url}");
                        failed.set(true);
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectLinks(project: &'static Project, link: &'static str) -> Element {
    let label = if project.is_youtube_embed() {
        "View Code"
    } else {
        "View Project"
    };

    rsx! {
        div { class: "timeline-links",
            a { href: link, target: "_blank", rel: "noopener noreferrer",
                "{label}"
                SvgIcon { icon: Icon::ArrowRight, class: "icon-sm" }
            }
            if let Some(watch) = project.youtube_watch_url() {
                a {
                    class: "youtube",
                    href: watch,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Watch on YouTube"
                    SvgIcon { icon: Icon::YouTube, class: "icon-sm" }
                }
            }
        }
    }
}
