use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::common::dom::{set_body_scroll_locked, use_window_listener};

mod resume;
use resume::ResumePreviewModal;

// global modal signal
//
// any section can open a modal by pushing onto the stack, and the ModalBox in the
// layout shows whatever is on top
pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(Vec::new);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modal {
    ResumePreview,
}

pub fn open_modal(modal: Modal) {
    MODAL_STACK.with_mut(|v| v.push(modal));
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        v.pop();
    });
}

#[component]
pub fn ModalBox() -> Element {
    let top = MODAL_STACK.read().last().copied();

    // keep the page underneath still while anything is open
    use_effect(move || set_body_scroll_locked(!MODAL_STACK.read().is_empty()));

    match top {
        Some(Modal::ResumePreview) => rsx! {
            ResumePreviewModal {}
        },
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq)]
pub enum ModalSize {
    Medium,
    Large,
}

impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Medium => "max-width: 600px;",
        ModalSize::Large => "max-width: 48rem;",
    };

    use_window_listener("keydown", |evt| {
        let escape = evt
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");

        if escape {
            close_modal();
        }
    });

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal();
            },
            div {
                class: "modal-content",
                style: "{width}",
                // clicks inside the box should not reach the overlay
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h3 { class: "modal-title", "{props.title}" }
                    button { class: "btn-close", onclick: move |_| close_modal(), "×" }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
