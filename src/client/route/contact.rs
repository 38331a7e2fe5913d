use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::{FaFacebook, FaInstagram, FaYoutube},
        fa_solid_icons::{FaEnvelope, FaLocationDot, FaPhone},
    },
    Icon,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::component::{Page, PageBanner},
    model::contact::ContactDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_contact;

#[component]
pub fn Contact() -> Element {
    let mut contact = use_signal(ContactDto::default);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_contact().await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(details)) => contact.set(details.clone()),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch contact details: {}", err);
            contact.set(ContactDto::default());
        }
        None => (),
    });

    let details = contact();
    let has_socials = details.facebook_url.is_some()
        || details.instagram_url.is_some()
        || details.youtube_url.is_some();

    rsx! {
        Title { "Contact Us" }
        Page {
            PageBanner {
                title: "Contact Us",
                subtitle: "We would love to hear from you."
            }
            section {
                class: "max-w-3xl mx-auto py-12 px-4 flex flex-col gap-6",
                if let Some(address) = details.address.clone() {
                    div {
                        class: "flex items-center gap-4",
                        Icon { width: 24, height: 24, fill: "currentColor", icon: FaLocationDot }
                        p { "{address}" }
                    }
                }
                if let Some(phone) = details.phone.clone() {
                    div {
                        class: "flex items-center gap-4",
                        Icon { width: 24, height: 24, fill: "currentColor", icon: FaPhone }
                        a { class: "link", href: "tel:{phone}", "{phone}" }
                    }
                }
                if let Some(email) = details.email.clone() {
                    div {
                        class: "flex items-center gap-4",
                        Icon { width: 24, height: 24, fill: "currentColor", icon: FaEnvelope }
                        a { class: "link", href: "mailto:{email}", "{email}" }
                    }
                }
                if has_socials {
                    div {
                        class: "flex gap-6 pt-4",
                        if let Some(url) = details.facebook_url.clone() {
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Facebook",
                                Icon { width: 32, height: 32, fill: "currentColor", icon: FaFacebook }
                            }
                        }
                        if let Some(url) = details.instagram_url.clone() {
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "Instagram",
                                Icon { width: 32, height: 32, fill: "currentColor", icon: FaInstagram }
                            }
                        }
                        if let Some(url) = details.youtube_url.clone() {
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "YouTube",
                                Icon { width: 32, height: 32, fill: "currentColor", icon: FaYoutube }
                            }
                        }
                    }
                }
            }
        }
    }
}
