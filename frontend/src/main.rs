use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod icons;
mod navigation;
mod pages;
mod registration;
mod registration_success;
mod scroll;
mod sections;
mod styles;
mod submit;

use crate::pages::{AboutPage, DateTimePage, GamePage, HomePage, NotFound, RegisterPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/about")] About,
    #[at("/date-time")] DateTime,
    #[at("/game")] Game,
    #[at("/register")] Register,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-black text-white">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    web_sys::console::log_1(&format!("Route: {}", route.to_path()).into());
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::DateTime => html! { <DateTimePage /> },
        Route::Game => html! { <GamePage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/date-time"), Some(Route::DateTime));
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::Game.to_path(), "/game");
    }
}
