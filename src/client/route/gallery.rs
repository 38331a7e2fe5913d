use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Page, PageBanner},
        model::lightbox::{next_index, prev_index},
    },
    model::gallery::GalleryImageDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_gallery;

#[component]
pub fn Gallery() -> Element {
    let mut images = use_signal(Vec::<GalleryImageDto>::new);
    let mut selected = use_signal(|| None::<usize>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_gallery().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(list)) => images.set(list.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch gallery: {}", err);
            images.set(Vec::new());
        }
        None => (),
    });

    let total = images().len();
    let open_image = selected().and_then(|index| images().get(index).cloned());

    rsx! {
        Title { "Gallery" }
        Page {
            PageBanner {
                title: "Gallery",
                subtitle: "Moments from our events and celebrations."
            }
            section {
                class: "max-w-6xl mx-auto py-12 px-4",
                if total == 0 {
                    p {
                        class: "text-center text-gray-400",
                        "No photos have been added yet."
                    }
                } else {
                    div {
                        class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                        for (index, image) in images().into_iter().enumerate() {
                            button {
                                key: "{image.id}",
                                class: "overflow-hidden rounded-lg aspect-square",
                                onclick: move |_| selected.set(Some(index)),
                                img {
                                    class: "w-full h-full object-cover hover:scale-105 transition-transform",
                                    src: "{image.image_url}",
                                    alt: image.caption.clone().unwrap_or_default(),
                                }
                            }
                        }
                    }
                }
            }
            if let (Some(index), Some(image)) = (selected(), open_image) {
                div {
                    class: "fixed inset-0 z-50 flex items-center justify-center bg-black/90",
                    onclick: move |_| selected.set(None),
                    button {
                        class: "btn btn-circle btn-ghost absolute top-4 right-4 text-white",
                        onclick: move |_| selected.set(None),
                        "✕"
                    }
                    button {
                        class: "btn btn-circle btn-ghost absolute left-4 text-white",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            selected.set(Some(prev_index(index, total)));
                        },
                        "❮"
                    }
                    figure {
                        class: "max-w-5xl max-h-[85vh] px-16",
                        onclick: move |evt| evt.stop_propagation(),
                        img {
                            class: "max-h-[75vh] mx-auto object-contain",
                            src: "{image.image_url}",
                            alt: image.caption.clone().unwrap_or_default(),
                        }
                        if let Some(caption) = image.caption.as_ref() {
                            figcaption {
                                class: "text-center text-white mt-4",
                                "{caption}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-circle btn-ghost absolute right-4 text-white",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            selected.set(Some(next_index(index, total)));
                        },
                        "❯"
                    }
                }
            }
        }
    }
}
