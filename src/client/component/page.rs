use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-20 {class}",
            {children}
        }
    )
}

/// Gradient title band at the top of the content pages.
#[component]
pub fn PageBanner(title: &'static str, subtitle: &'static str) -> Element {
    rsx!(
        section {
            class: "py-20 text-center bg-gradient-to-b from-[#ff4e50] via-[#2c2b30] to-[#1b1a1f]",
            h1 {
                class: "text-4xl md:text-5xl font-extrabold tracking-tight text-white drop-shadow-lg",
                {title}
            }
            div { class: "w-1 h-10 bg-primary mx-auto mt-3 rounded" }
            p {
                class: "text-gray-200 mt-4 text-base md:text-lg",
                {subtitle}
            }
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center py-24",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
