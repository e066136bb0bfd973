use yew::prelude::*;
use log::info;

mod config;
mod content;
mod expansion;
mod hooks;
mod host;
mod scroll;
mod styles;
mod components {
    pub mod icons;
    pub mod pillar_card;
    pub mod summary_card;
}
mod pages {
    pub mod framework;
}

use pages::framework::GeoFramework;


#[function_component]
fn App() -> Html {
    html! {
        <GeoFramework />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting GEO framework page");
    yew::Renderer::<App>::new().render();
}
