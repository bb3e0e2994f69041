use video_search_frontend::config::{API_BASE_URL, APP_NAME, DEBUG_MODE};
use video_search_frontend::logging;
use video_search_frontend::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logging::init_logger(*DEBUG_MODE);

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        *APP_NAME,
        *API_BASE_URL,
        *DEBUG_MODE
    );

    yew::Renderer::<App>::new().render();
}
