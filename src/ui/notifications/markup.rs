// SPDX-License-Identifier: MPL-2.0
//! Markup form of a toast, for surfaces that speak HTML.
//!
//! This is the library-facing output for embedders that render toasts as
//! HTML. The iced shell draws [`ToastNode::text`] instead, so
//! `NotificationSettings::escape_markup` only shows in this output.
//!
//! Whether a message is escaped is decided when the node is built;
//! [`fragment`] interpolates the node body as-is.

use super::surface::{Container, ToastNode};

/// Escapes the five markup-significant characters.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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

/// Renders one toast node as an HTML element.
#[must_use]
pub fn fragment(node: &ToastNode) -> String {
    format!(
        concat!(
            r#"<div class="{class}" data-id="{id}">"#,
            r#"<i class="fas {icon}" style="color: {color}; font-size: 1.25rem;"></i>"#,
            r#"<span style="flex: 1;">{body}</span>"#,
            r#"<button class="notification-close" aria-label="Dismiss"><i class="fas fa-times"></i></button>"#,
            "</div>"
        ),
        class = node.class_name(),
        id = node.id.raw(),
        icon = node.icon,
        color = node.color,
        body = node.body,
    )
}

/// Renders the whole container with its children in display order.
#[must_use]
pub fn container(container: &Container) -> String {
    let children: String = container.nodes().iter().map(fragment).collect();
    format!(r#"<div class="{}">{children}</div>"#, Container::CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{NotificationId, Severity};

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<img src=x onerror="a('b')"> & co"#),
            "&lt;img src=x onerror=&quot;a(&#39;b&#39;)&quot;&gt; &amp; co"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn fragment_carries_icon_color_and_body() {
        let node = ToastNode::new(NotificationId::from_raw(7), Severity::Success, "Saved");
        let html = fragment(&node);

        assert!(html.contains(r#"class="notification notification-success""#));
        assert!(html.contains("fa-check-circle"));
        assert!(html.contains("color: #10b981"));
        assert!(html.contains(r#"<span style="flex: 1;">Saved</span>"#));
        assert!(html.contains(r#"data-id="7""#));
    }
}
