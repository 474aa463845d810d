//! The four-hook lifecycle contract and its default implementation.
//!
//! The preview host drives one render per document, invoking each hook once
//! and awaiting its result before continuing. Hooks are pure functions of
//! their input: no state survives a call and no call observes another.

use crate::error::HookError;
use crate::host::DocumentQuery;
use crate::preprocess::{self, PreprocessOptions};

/// Pipeline stage at which a hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    /// Before the host converts markdown to HTML.
    WillParse,
    /// After the host converts markdown to HTML.
    DidParse,
    /// Before the host-defined transform stage.
    WillTransform,
    /// After the host-defined transform stage.
    DidTransform,
}

impl std::fmt::Display for HookStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HookStage::WillParse => "will-parse",
            HookStage::DidParse => "did-parse",
            HookStage::WillTransform => "will-transform",
            HookStage::DidTransform => "did-transform",
        };
        f.write_str(name)
    }
}

/// The lifecycle hook contract consumed by the preview host.
///
/// Every method defaults to identity, so an implementation only overrides
/// the stages it cares about. Errors propagate to the host unchanged; this
/// module has no recovery action to offer.
pub trait LifecycleHooks {
    /// Rewrite markdown source before the host parses it.
    fn will_parse_markdown(&self, markdown: &str) -> Result<String, HookError> {
        Ok(markdown.to_string())
    }

    /// Inspect or rewrite the rendered HTML fragment.
    ///
    /// `query` is the host's capability for traversing the parsed tree.
    /// Reserved extension point; identity by default.
    fn did_parse_markdown(
        &self,
        html: &str,
        query: &dyn DocumentQuery,
    ) -> Result<String, HookError> {
        let _ = query;
        Ok(html.to_string())
    }

    /// Rewrite markdown before the host-defined transform stage.
    ///
    /// Reserved extension point; identity by default.
    fn will_transform_markdown(&self, markdown: &str) -> Result<String, HookError> {
        Ok(markdown.to_string())
    }

    /// Rewrite markdown after the host-defined transform stage.
    ///
    /// Reserved extension point; identity by default.
    fn did_transform_markdown(&self, markdown: &str) -> Result<String, HookError> {
        Ok(markdown.to_string())
    }
}

/// The built-in hook set: pre-parse rewrites, identity everywhere else.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Create a preprocessor with the given rewrite options.
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// The rewrite options in effect.
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }
}

impl LifecycleHooks for Preprocessor {
    fn will_parse_markdown(&self, markdown: &str) -> Result<String, HookError> {
        Ok(preprocess::apply_rewrites(&self.options, markdown).into_owned())
    }
}
