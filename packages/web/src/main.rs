use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Dashboard, Login, PetDetail, PetNew, Pets, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/pets")]
    Pets {},
    #[route("/dashboard/pets/new")]
    PetNew {},
    #[route("/dashboard/pets/:id")]
    PetDetail { id: String },
    #[route("/dashboard/users")]
    Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
