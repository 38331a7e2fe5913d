use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl font-bold text-wrap",
                    {SITE_NAME}
                }
            }
        }
        nav {
            class: "flex items-center gap-2",
            NavLink { to: Route::Home {}, label: "Home" }
            NavLink { to: Route::News {}, label: "News" }
            NavLink { to: Route::Gallery {}, label: "Gallery" }
            NavLink { to: Route::Contact {}, label: "Contact" }
        }
    })
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx!(Link {
        to,
        class: "btn btn-ghost",
        active_class: "btn-active",
        {label}
    })
}
