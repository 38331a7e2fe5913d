use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Markdown, Page, PageBanner},
        model::date::format_display_date,
    },
    model::news::NewsDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_news;

#[component]
pub fn News() -> Element {
    let mut news = use_signal(Vec::<NewsDto>::new);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_news().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(items)) => news.set(items.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch news: {}", err);
            news.set(Vec::new());
        }
        None => (),
    });

    rsx! {
        Title { "News" }
        Page {
            PageBanner {
                title: "Latest News",
                subtitle: "Updates and announcements from our community."
            }
            section {
                class: "max-w-4xl mx-auto py-12 px-4",
                if news().is_empty() {
                    p {
                        class: "text-center text-gray-400",
                        "No news has been published yet."
                    }
                } else {
                    div {
                        class: "flex flex-col gap-10",
                        for item in news() {
                            NewsCard { key: "{item.id}", item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NewsCard(item: NewsDto) -> Element {
    rsx!(article {
        class: "card bg-base-100 shadow-lg overflow-hidden",
        if let Some(banner_url) = item.banner_url.as_ref() {
            figure {
                img {
                    class: "w-full max-h-96 object-cover",
                    src: "{banner_url}",
                    alt: "{item.title}",
                }
            }
        }
        div {
            class: "card-body",
            h2 { class: "card-title text-2xl", "{item.title}" }
            p { class: "text-sm opacity-70", "{format_display_date(&item.date)}" }
            Markdown {
                class: "prose max-w-none",
                source: item.content.clone(),
            }
        }
    })
}
