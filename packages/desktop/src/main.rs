use dioxus::prelude::*;

use views::{EditNote, Login, NotFound, Notes, Protected, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Protected)]
        #[route("/notes")]
        Notes {},
        #[route("/note/:id/edit")]
        EditNote { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::NOTES_CSS }

        // Token lives in a file under the platform data directory here.
        ui::ApiProvider {
            ui::SessionProvider {
                ui::components::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
