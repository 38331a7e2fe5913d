use chrono::Utc;
use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{EventCard, Page, SubscribeForm},
        constant::{SITE_DESCRIPTION, SITE_NAME, WELCOME_TITLE},
        model::date::format_display_date,
    },
    model::event::{EventDto, HomeEvents},
};

#[cfg(feature = "web")]
use crate::client::api::get_events;

const OFFERINGS: [(&str, &str); 3] = [
    (
        "Cultural Events",
        "Festivals, concerts and gatherings celebrating Nepali music, dance and food.",
    ),
    (
        "Community Support",
        "A welcoming network for families and newcomers settling in Colorado.",
    ),
    (
        "Youth Programs",
        "Language, arts and mentoring programs that keep the next generation connected.",
    ),
];

#[component]
pub fn Home() -> Element {
    let mut events = use_signal(Vec::<EventDto>::new);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_events().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(list)) => events.set(list.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch events: {}", err);
            events.set(Vec::new());
        }
        None => (),
    });

    let home = HomeEvents::from_events(events(), Utc::now());

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            Hero { featured: home.featured }
            section {
                class: "py-16 px-4 bg-[#1b1a1f]",
                div {
                    class: "max-w-5xl mx-auto",
                    h2 {
                        class: "text-3xl font-bold text-white mb-8 text-center",
                        "Upcoming Events"
                    }
                    if home.upcoming.is_empty() {
                        p {
                            class: "text-center text-gray-400",
                            "No upcoming events right now. Check back soon!"
                        }
                    } else {
                        div {
                            class: "flex flex-col gap-8",
                            for event in home.upcoming {
                                EventCard { key: "{event.id}", event }
                            }
                        }
                    }
                }
            }
            section {
                class: "py-16 px-4 bg-base-200",
                div {
                    class: "max-w-5xl mx-auto",
                    h2 {
                        class: "text-3xl font-bold mb-8 text-center",
                        "What We Offer"
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for (title, body) in OFFERINGS {
                            div {
                                key: "{title}",
                                class: "card bg-base-100 shadow-md",
                                div {
                                    class: "card-body",
                                    h3 { class: "card-title", {title} }
                                    p { {body} }
                                }
                            }
                        }
                    }
                }
            }
            section {
                class: "py-16 px-4 bg-primary text-white text-center",
                h2 {
                    class: "text-3xl font-bold mb-2",
                    "Stay Connected with {SITE_NAME}"
                }
                p {
                    class: "mb-6 text-white/80",
                    "Get event announcements and community news in your inbox."
                }
                SubscribeForm {}
            }
        }
    }
}

/// Hero band for the featured event, or the welcome text when there are no events.
#[component]
fn Hero(featured: Option<EventDto>) -> Element {
    let background = featured
        .as_ref()
        .and_then(|e| e.banner_url.as_ref())
        .map(|url| format!("background-image: url('{}');", url))
        .unwrap_or_default();

    rsx!(section {
        class: "relative flex items-center justify-center min-h-[28rem] bg-cover bg-center bg-[#2c2b30]",
        style: "{background}",
        div { class: "absolute inset-0 bg-black/60" }
        div {
            class: "relative z-10 max-w-3xl px-4 text-center text-white",
            if let Some(event) = featured {
                p {
                    class: "uppercase tracking-widest text-sm mb-2 opacity-80",
                    "{format_display_date(&event.date)}"
                    if !event.location.is_empty() {
                        " · {event.location}"
                    }
                }
                h1 {
                    class: "text-4xl md:text-6xl font-extrabold mb-4",
                    "{event.title}"
                }
                p { class: "text-lg", "{event.description}" }
            } else {
                h1 {
                    class: "text-4xl md:text-6xl font-extrabold mb-4",
                    {WELCOME_TITLE}
                }
                p { class: "text-lg", {SITE_DESCRIPTION} }
            }
        }
    })
}
