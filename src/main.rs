use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod scroll;
mod lead;
mod effects;
mod components;
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use scroll::ScrollProvider;


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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ScrollProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ScrollProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("Logger already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
