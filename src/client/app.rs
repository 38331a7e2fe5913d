use dioxus::prelude::*;

use crate::client::{
    constant::{SITE_DESCRIPTION, SITE_NAME},
    router::Route,
};

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        Router::<Route> {}
    }
}
