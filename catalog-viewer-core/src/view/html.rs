use super::{DisplaySurface, ItemView, ViewFactory};
use crate::pagination::{NavButton, NavKind, PaginationControl};
use std::fmt::Write;

const HIDDEN_CLASS: &str = "d-none";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn turn_name(kind: NavKind) -> &'static str {
    match kind {
        NavKind::First => "first",
        NavKind::Prev => "prev",
        NavKind::Next => "next",
        NavKind::Last => "last",
    }
}

/// Produces HTML fragments for items and the pagination bar
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlViewFactory;

impl HtmlViewFactory {
    fn nav_button(out: &mut String, button: &NavButton) {
        let _ = write!(
            out,
            r#"<li class="page-item"><button type="button" data-turn="{}" data-goto="{}"{}>{}</button></li>"#,
            turn_name(button.kind),
            button.target,
            if button.disabled { " disabled" } else { "" },
            escape_html(button.label)
        );
    }
}

impl ViewFactory for HtmlViewFactory {
    type Node = String;

    fn placeholder(&self) -> String {
        r#"<li class="catalog-item is-placeholder"></li>"#.to_string()
    }

    fn item(&self, view: &ItemView) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<li class="catalog-item"><h3 class="catalog-title">{}</h3><ul class="catalog-images">"#,
            escape_html(&view.title)
        );
        for image in &view.images {
            let class = if image.primary {
                "catalog-image".to_string()
            } else {
                format!("catalog-image {}", HIDDEN_CLASS)
            };
            let src = escape_html(&image.src);
            let _ = write!(
                out,
                r#"<li class="{}"><a href="{}"><img src="{}" alt="{}"></a></li>"#,
                class,
                src,
                src,
                escape_html(&image.alt)
            );
        }
        out.push_str("</ul></li>");
        out
    }

    fn pagination(&self, control: &PaginationControl) -> String {
        let mut out = String::new();
        Self::nav_button(&mut out, &control.first);
        Self::nav_button(&mut out, &control.prev);
        for entry in control.visible_entries() {
            let _ = write!(
                out,
                r#"<li class="page-item"><button type="button" data-chunk="{}"{}>{}</button></li>"#,
                entry.id,
                if entry.active { r#" class="active""# } else { "" },
                entry.id
            );
        }
        Self::nav_button(&mut out, &control.next);
        Self::nav_button(&mut out, &control.last);
        out
    }
}

/// Surface that assembles a self-contained HTML fragment
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    container_selector: String,
    items: Vec<String>,
    pagination: String,
}

impl HtmlSurface {
    pub fn new(container_selector: impl Into<String>) -> Self {
        Self {
            container_selector: container_selector.into(),
            items: Vec::new(),
            pagination: String::new(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div data-container="{}"><ul data-items>{}</ul><ul data-pagination>{}</ul></div>"#,
            escape_html(&self.container_selector),
            self.items.concat(),
            self.pagination
        )
    }
}

impl DisplaySurface for HtmlSurface {
    type Node = String;

    fn clear_items(&mut self) {
        self.items.clear();
    }

    fn append_items(&mut self, nodes: Vec<String>) {
        self.items.extend(nodes);
    }

    fn replace_pagination(&mut self, node: String) {
        self.pagination = node;
    }
}
