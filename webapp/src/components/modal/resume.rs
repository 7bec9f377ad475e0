use dioxus::prelude::*;

use api::profile::RESUME_PATH;

use crate::components::modal::{ModalSize, ModernModal, close_modal};

#[component]
pub fn ResumePreviewModal() -> Element {
    let footer = rsx! {
        a { class: "btn btn-primary btn-sm", href: RESUME_PATH, download: "resume.pdf", "Download Resume" }
        button { class: "btn btn-secondary btn-sm", onclick: move |_| close_modal(), "Close" }
    };

    rsx! {
        ModernModal { title: "Resume Preview", size: ModalSize::Large, footer,
            iframe {
                class: "resume-frame",
                src: "{RESUME_PATH}#view=FitH",
                title: "Resume Preview",
            }
        }
    }
}
