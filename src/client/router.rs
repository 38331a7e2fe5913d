use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Contact, Gallery, Home, News, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/news")]
    News {},

    #[route("/gallery")]
    Gallery {},

    #[route("/contact")]
    Contact {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
