//! Read-only markdown rendering for recipe documents.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Render markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text, since recipe content comes
/// from the backend and ends up in `dangerous_inner_html`.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// A markdown document rendered inside a `div`.
#[component]
pub fn Markdown(source: String, #[props(default = "".to_string())] class: String) -> Element {
    let rendered = render_markdown(&source);

    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}
