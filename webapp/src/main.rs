#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::Layout;

mod home;
use home::HomePage;

mod sections;

mod timeline;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// everything lives on one page; moving between sections is done by scrolling to
// the section ids rather than by routing
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        HomePage {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        style { "{common::style::TIMELINE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
