//! Plain-text rendering for terminals.

use catalog_viewer_core::{ItemView, NavButton, PaginationControl, ViewFactory};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextViewFactory;

fn button_text(button: &NavButton) -> String {
    if button.disabled {
        format!("({})", button.label)
    } else {
        format!("[{}]", button.label)
    }
}

impl ViewFactory for TextViewFactory {
    type Node = String;

    fn placeholder(&self) -> String {
        "...".to_string()
    }

    fn item(&self, view: &ItemView) -> String {
        let mut lines = vec![view.title.clone()];
        match view.images.split_first() {
            Some((primary, rest)) => {
                lines.push(format!("  * {}", primary.src));
                if !rest.is_empty() {
                    let others = rest.iter().map(|image| &image.src).join(", ");
                    lines.push(format!("    +{} more: {}", rest.len(), others));
                }
            }
            None => lines.push("  (no images)".to_string()),
        }
        lines.join("\n")
    }

    fn pagination(&self, control: &PaginationControl) -> String {
        let pages = control
            .visible_entries()
            .map(|entry| {
                if entry.active {
                    format!("*{}*", entry.id)
                } else {
                    entry.id.to_string()
                }
            })
            .join(" ");

        format!(
            "{} {} {} {} {}",
            button_text(&control.first),
            button_text(&control.prev),
            pages,
            button_text(&control.next),
            button_text(&control.last)
        )
    }
}
