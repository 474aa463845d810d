//! Abstract interfaces for host-side collaborators.
//!
//! Markdown-to-HTML conversion and HTML tree traversal belong to the preview
//! host. This module only names those capabilities so hook signatures can
//! refer to them; the host supplies the real implementations.

/// The host's markdown renderer.
pub trait MarkdownHost {
    /// Convert markdown source to an HTML fragment.
    fn parse(&self, markdown: &str) -> String;
}

/// Host-supplied capability for querying a parsed HTML tree.
///
/// Handed to the post-parse hook alongside the rendered fragment. The
/// built-in hooks never call it; it is part of the contract for future
/// extensions.
pub trait DocumentQuery {
    /// Serialized HTML of the nodes matching a CSS-style selector.
    fn select(&self, selector: &str) -> Vec<String>;
}

/// Query capability that matches nothing.
///
/// Used by bindings whose host keeps the real capability on its own side of
/// the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullQuery;

impl DocumentQuery for NullQuery {
    fn select(&self, _selector: &str) -> Vec<String> {
        Vec::new()
    }
}
