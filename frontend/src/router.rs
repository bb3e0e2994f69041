use crate::search::page::SearchPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home}>
                    {"Go back to search"}
                </Link<Route>>
            </div>
        },
    }
}
