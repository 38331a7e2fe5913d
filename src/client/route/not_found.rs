use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Page Not Found" }
        Page {
            class: "flex flex-col items-center justify-center gap-4 text-center",
            h1 { class: "text-5xl font-bold", "404" }
            p { "We couldn't find /{path}." }
            Link {
                to: Route::Home {},
                class: "btn btn-primary",
                "Back to home"
            }
        }
    }
}
