// SPDX-License-Identifier: MPL-2.0
//! Renderable surface that toast nodes are attached to.
//!
//! [`ToastLayer`] is the retained layer the desktop shell draws from. It holds
//! at most one container, created on first use, whose children are the live
//! toast nodes in display order.

use super::notification::{NotificationId, Severity};
use std::fmt;

/// Failure to render onto the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The host has no renderable surface.
    Unavailable,
    /// The container could not be created or was lost.
    Detached(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Unavailable => write!(f, "no renderable surface available"),
            RenderError::Detached(reason) => write!(f, "toast container detached: {reason}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Rendered representation of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNode {
    pub id: NotificationId,
    pub severity: Severity,
    /// Body markup, already escaped when escaping is enabled.
    pub body: String,
    /// Message as plain text, for surfaces that draw text directly.
    pub text: String,
    pub icon: &'static str,
    pub color: &'static str,
    /// Set once the fade-out phase has started.
    pub fading: bool,
}

impl ToastNode {
    #[must_use]
    pub fn new(id: NotificationId, severity: Severity, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            id,
            severity,
            text: body.clone(),
            body,
            icon: severity.icon_class(),
            color: severity.color_hex(),
            fading: false,
        }
    }

    /// Sets the plain text when it differs from the body markup.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// CSS class list in the legacy `notification notification-<type>` form.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = format!("notification notification-{}", self.severity.name());
        if self.fading {
            class.push_str(" fading");
        }
        class
    }
}

/// Host document surface.
pub trait Surface {
    /// Creates the shared container if it does not exist yet.
    fn ensure_container(&mut self) -> Result<(), RenderError>;

    /// Appends a node at the end of the container.
    fn append(&mut self, node: ToastNode) -> Result<(), RenderError>;

    /// Flags a node as fading out. Unknown ids are ignored.
    fn mark_fading(&mut self, id: NotificationId);

    /// Detaches a node. Returns `false` if no such node was attached.
    fn remove(&mut self, id: NotificationId) -> bool;
}

/// The single toast container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    nodes: Vec<ToastNode>,
}

impl Container {
    /// Class name of the container element.
    pub const CLASS: &'static str = "notification-container";

    pub fn nodes(&self) -> &[ToastNode] {
        &self.nodes
    }

    #[must_use]
    pub fn position_of(&self, id: NotificationId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

/// In-memory retained surface drawn by the desktop toast overlay.
#[derive(Debug, Clone, Default)]
pub struct ToastLayer {
    container: Option<Container>,
    containers_created: usize,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The container, if any notification has been shown yet.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// How many containers this layer has ever created. Always 0 or 1.
    #[must_use]
    pub fn containers_created(&self) -> usize {
        self.containers_created
    }

    /// Attached nodes in display order.
    pub fn nodes(&self) -> &[ToastNode] {
        self.container.as_ref().map_or(&[], |c| c.nodes())
    }

    pub fn node(&self, id: NotificationId) -> Option<&ToastNode> {
        self.nodes().iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.node(id).is_some()
    }
}

impl Surface for ToastLayer {
    fn ensure_container(&mut self) -> Result<(), RenderError> {
        if self.container.is_none() {
            self.container = Some(Container::default());
            self.containers_created += 1;
            tracing::debug!("created toast container");
        }
        Ok(())
    }

    fn append(&mut self, node: ToastNode) -> Result<(), RenderError> {
        let container = self
            .container
            .as_mut()
            .ok_or_else(|| RenderError::Detached("append before container exists".into()))?;
        container.nodes.push(node);
        Ok(())
    }

    fn mark_fading(&mut self, id: NotificationId) {
        if let Some(node) = self
            .container
            .as_mut()
            .and_then(|c| c.nodes.iter_mut().find(|n| n.id == id))
        {
            node.fading = true;
        }
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        let before = container.nodes.len();
        container.nodes.retain(|n| n.id != id);
        container.nodes.len() != before
    }
}

/// Surface of a host that cannot render anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSurface;

impl Surface for UnavailableSurface {
    fn ensure_container(&mut self) -> Result<(), RenderError> {
        Err(RenderError::Unavailable)
    }

    fn append(&mut self, _node: ToastNode) -> Result<(), RenderError> {
        Err(RenderError::Unavailable)
    }

    fn mark_fading(&mut self, _id: NotificationId) {}

    fn remove(&mut self, _id: NotificationId) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: u64) -> ToastNode {
        ToastNode::new(NotificationId::from_raw(raw), Severity::Info, "body")
    }

    #[test]
    fn container_is_created_once() {
        let mut layer = ToastLayer::new();
        assert!(layer.container().is_none());

        layer.ensure_container().unwrap();
        layer.ensure_container().unwrap();
        assert_eq!(layer.containers_created(), 1);
    }

    #[test]
    fn append_without_container_fails() {
        let mut layer = ToastLayer::new();
        assert!(matches!(
            layer.append(node(0)),
            Err(RenderError::Detached(_))
        ));
    }

    #[test]
    fn remove_only_touches_target() {
        let mut layer = ToastLayer::new();
        layer.ensure_container().unwrap();
        layer.append(node(0)).unwrap();
        layer.append(node(1)).unwrap();

        assert!(layer.remove(NotificationId::from_raw(0)));
        assert!(!layer.remove(NotificationId::from_raw(0)));
        assert_eq!(layer.nodes().len(), 1);
        assert!(layer.contains(NotificationId::from_raw(1)));
    }

    #[test]
    fn class_name_reflects_severity_and_fading() {
        let mut n = ToastNode::new(NotificationId::from_raw(3), Severity::Warning, "x");
        assert_eq!(n.class_name(), "notification notification-warning");
        n.fading = true;
        assert_eq!(n.class_name(), "notification notification-warning fading");
    }

    #[test]
    fn unavailable_surface_always_errors() {
        let mut surface = UnavailableSurface;
        assert_eq!(surface.ensure_container(), Err(RenderError::Unavailable));
        assert_eq!(surface.append(node(0)), Err(RenderError::Unavailable));
    }
}
