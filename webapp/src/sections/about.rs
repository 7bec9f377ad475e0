use dioxus::prelude::*;

use api::{
    profile::{
        BIO, EMAIL, EXPERIENCE, Experience, LOCATION, NAME, PROFILE_IMAGE, ROLE, SKILLS,
        SOCIAL_LINKS, SkillCategory, UNIVERSITY,
    },
    reveal::{Direction, RevealOptions},
};

use crate::{
    common::{
        icons::{Icon, SvgIcon},
        reveal::use_scroll_reveal,
    },
    components::modal::{Modal, open_modal},
};

#[component]
fn ExperienceItem(item: &'static Experience) -> Element {
    rsx! {
        div { class: "experience-item",
            h4 { "{item.role}" }
            div { class: "experience-meta",
                span { class: "company", "{item.company}" }
                span { class: "period", "{item.period}" }
            }
            p { "{item.description}" }
        }
    }
}

#[component]
fn SkillGroup(category: &'static SkillCategory) -> Element {
    rsx! {
        div { class: "skill-category",
            h4 { "{category.title}" }
            div { class: "chip-list",
                for skill in category.skills.iter() {
                    span { key: "{skill}", class: "chip", "{skill}" }
                }
            }
        }
    }
}

#[component]
fn ProfileCard() -> Element {
    rsx! {
        div { class: "card profile-card",
            div { class: "profile-photo",
                img { src: PROFILE_IMAGE, alt: "Profile" }
                div { class: "caption", "{NAME}" }
            }

            div { class: "profile-body",
                div { class: "profile-bio",
                    h3 { "{ROLE}" }
                    p { "{BIO}" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| open_modal(Modal::ResumePreview),
                        SvgIcon { icon: Icon::Download, class: "icon-sm" }
                        "Resume"
                    }
                }

                div { class: "profile-facts",
                    span { class: "fact",
                        SvgIcon { icon: Icon::School, class: "icon-sm" }
                        "{UNIVERSITY}"
                    }
                    span { class: "fact",
                        SvgIcon { icon: Icon::Location, class: "icon-sm" }
                        "{LOCATION}"
                    }
                    span { class: "fact",
                        SvgIcon { icon: Icon::Mail, class: "icon-sm" }
                        "{EMAIL}"
                    }

                    div { class: "social-row",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.name}",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                title: link.name,
                                SvgIcon { icon: Icon::for_social(link.name) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let mut profile = use_scroll_reveal(RevealOptions::once());
    let mut experience = use_scroll_reveal(RevealOptions::once().direction(Direction::Right));
    let mut skills = use_scroll_reveal(
        RevealOptions::once()
            .direction(Direction::Left)
            .delay(0.15),
    );

    rsx! {
        section { id: "about", class: "section section-alt",
            div { class: "container",
                h2 { class: "section-title", "About Me" }

                div {
                    style: profile.style(),
                    onmounted: move |evt| profile.observe(evt),
                    ProfileCard {}
                }

                div { class: "about-grid",
                    div {
                        class: "card about-card",
                        style: experience.style(),
                        onmounted: move |evt| experience.observe(evt),
                        h3 { class: "card-title", "Experience" }
                        for item in EXPERIENCE.iter() {
                            ExperienceItem { key: "{item.company}", item }
                        }
                    }

                    div {
                        class: "card about-card",
                        style: skills.style(),
                        onmounted: move |evt| skills.observe(evt),
                        h3 { class: "card-title", "Skills" }
                        for category in SKILLS.iter() {
                            SkillGroup { key: "{category.title}", category }
                        }
                    }
                }
            }
        }
    }
}
