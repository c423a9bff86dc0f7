use log::info;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod navigation;
mod observer;
mod section;
mod shell;
mod store;
mod dom {
    pub mod frame;
    pub mod listener;
    pub mod registry;
    pub mod viewport;
}
mod motion {
    pub mod crossfade;
    pub mod easing;
    pub mod preference;
    pub mod transform;
    pub mod tween;
}
mod components {
    pub mod back_to_top;
    pub mod follower;
    pub mod footer;
    pub mod navbar;
    pub mod splash;
    pub mod spotlight;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod home;
    pub mod products;
}

use shell::PageShell;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <PageShell />
    }
}

fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
