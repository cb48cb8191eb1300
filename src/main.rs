use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod animation {
    pub mod counter;
    pub mod easing;
    pub mod scroll;
}
mod carousel {
    pub mod controller;
}
mod booking {
    pub mod request;
}
mod effects {
    pub mod konami;
    pub mod particles;
}
mod components {
    pub mod booking_modal;
    pub mod loading_screen;
    pub mod nav;
    pub mod particle_field;
    pub mod reveal;
    pub mod review_carousel;
    pub mod sports_showcase;
    pub mod stat_counter;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Athlon Sports (bookings: {})", config::CONTACT_EMAIL);
    yew::Renderer::<App>::new().render();
}
