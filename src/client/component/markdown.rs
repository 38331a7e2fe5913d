use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML. Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        event => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(source: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let html_output = render_markdown(&source);

    rsx!(div {
        class: "{class}",
        dangerous_inner_html: "{html_output}"
    })
}
