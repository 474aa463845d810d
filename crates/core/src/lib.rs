#![deny(missing_docs)]
//! mdprep core: markdown preview preprocessing and the lifecycle hook contract.
//!
//! The preview host calls four hooks per document render. The pre-parse hook
//! rewrites the markdown source (fence annotations, inline-code wrapping);
//! the remaining three hooks are identity pass-throughs reserved for future
//! use. Everything here is synchronous and stateless; the host-facing
//! asynchronous contract lives in the binding crates.

/// Hook error types.
pub mod error;
/// The four-hook lifecycle contract and its default implementation.
pub mod hooks;
/// Abstract interfaces for host-side collaborators.
pub mod host;
/// Pre-parse text rewrite utilities.
pub mod preprocess;

pub use error::HookError;
pub use hooks::{HookStage, LifecycleHooks, Preprocessor};
pub use host::{DocumentQuery, MarkdownHost, NullQuery};
pub use preprocess::{
    DEFAULT_FENCE_DIRECTIVE, DEFAULT_FENCE_LANGUAGE, DEFAULT_INLINE_CODE_TERMS, PreprocessOptions,
    annotate_fence_openers, apply_rewrites, wrap_inline_code,
};
