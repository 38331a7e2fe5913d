use chrono::Utc;
use dioxus::prelude::*;

use crate::{client::model::date::date_badge, model::event::EventDto};

#[component]
pub fn EventCard(event: EventDto) -> Element {
    let is_past = !event.is_upcoming(Utc::now());
    let (day, month) = date_badge(&event.date);
    let posted = event.date.format("%Y-%m-%d").to_string();

    let card_class = if is_past {
        "bg-[#131217] text-gray-300"
    } else {
        "bg-white text-black"
    };

    rsx!(div {
        class: "flex flex-col md:flex-row overflow-hidden rounded-xl shadow-lg border border-gray-700 {card_class}",
        if let Some(banner_url) = event.banner_url.as_ref() {
            div {
                class: "w-full md:w-1/3 h-64 md:h-auto flex items-center justify-center bg-black",
                img {
                    class: "object-contain max-h-full",
                    src: "{banner_url}",
                    alt: "{event.title}",
                }
            }
        }
        div {
            class: "flex-1 p-6 md:p-10 flex flex-col justify-between",
            div {
                div {
                    class: "flex items-center gap-4 mb-3",
                    div {
                        class: "text-center px-3 py-2 rounded-md bg-primary text-white",
                        div { class: "text-lg font-bold leading-none", "{day}" }
                        div { class: "text-sm uppercase", "{month}" }
                    }
                    p { class: "text-sm opacity-70", "POSTED DATE: {posted}" }
                }
                h2 { class: "text-3xl font-extrabold mb-3", "{event.title}" }
                if !event.location.is_empty() {
                    p { class: "text-sm mb-2 opacity-80", "{event.location}" }
                }
                p { class: "text-base leading-relaxed mb-4", "{event.description}" }
            }
            if is_past {
                p { class: "text-red-500 font-semibold text-right", "Event already completed" }
            } else {
                p { class: "text-green-600 font-semibold text-right", "Upcoming Event" }
            }
        }
    })
}
