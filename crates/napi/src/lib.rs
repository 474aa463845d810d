#![deny(missing_docs)]
//! Node.js bindings exposing the mdprep lifecycle hooks.
//!
//! The preview host loads these exports and awaits each one at a fixed stage
//! of its render pipeline: pre-parse, post-parse, pre-transform,
//! post-transform. Every export resolves immediately; the async surface
//! exists to satisfy the host's deferred-value contract, not to do work off
//! the caller's thread.

use mdprep_core::{HookError, LifecycleHooks, NullQuery, PreprocessOptions, Preprocessor};
use napi::bindgen_prelude::*;
use napi_derive::napi;

/// Optional overrides for the pre-parse rewrites.
///
/// Omitted fields fall back to the built-in defaults (`haskell` fences,
/// `{.line-numbers}` directive, `类型类` inline term).
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct PreprocessConfig {
    /// Language tag whose fence openers receive the directive token.
    pub fence_language: Option<String>,
    /// Directive token inserted after the language tag.
    pub fence_directive: Option<String>,
    /// Literal terms to wrap in inline-code backticks.
    pub inline_code_terms: Option<Vec<String>>,
}

fn build_options(config: Option<PreprocessConfig>) -> PreprocessOptions {
    let cfg = config.unwrap_or_default();
    let defaults = PreprocessOptions::default();
    PreprocessOptions {
        fence_language: cfg.fence_language.unwrap_or(defaults.fence_language),
        fence_directive: cfg.fence_directive.unwrap_or(defaults.fence_directive),
        inline_code_terms: cfg.inline_code_terms.unwrap_or(defaults.inline_code_terms),
    }
}

fn to_napi_err(err: HookError) -> Error {
    Error::from_reason(err.to_string())
}

fn will_parse(markdown: &str, config: Option<PreprocessConfig>) -> Result<String> {
    Preprocessor::new(build_options(config))
        .will_parse_markdown(markdown)
        .map_err(to_napi_err)
}

fn did_parse(html: &str) -> Result<String> {
    Preprocessor::default()
        .did_parse_markdown(html, &NullQuery)
        .map_err(to_napi_err)
}

fn will_transform(markdown: &str) -> Result<String> {
    Preprocessor::default()
        .will_transform_markdown(markdown)
        .map_err(to_napi_err)
}

fn did_transform(markdown: &str) -> Result<String> {
    Preprocessor::default()
        .did_transform_markdown(markdown)
        .map_err(to_napi_err)
}

/// Rewrites markdown source before the host converts it to HTML.
///
/// Annotates `` ```haskell `` fence openers with `{.line-numbers}` and wraps
/// every `类型类` occurrence as inline code. Both rewrites hit all
/// occurrences and never fail.
#[napi(js_name = "onWillParseMarkdown")]
pub async fn on_will_parse_markdown(
    markdown: String,
    config: Option<PreprocessConfig>,
) -> Result<String> {
    will_parse(&markdown, config)
}

/// Returns the rendered HTML fragment unchanged.
///
/// The host keeps its tree-query capability (cheerio) on the JavaScript
/// side; this stage is a reserved extension point.
#[napi(js_name = "onDidParseMarkdown")]
pub async fn on_did_parse_markdown(html: String) -> Result<String> {
    did_parse(&html)
}

/// Returns the markdown unchanged before the host-defined transform stage.
///
/// Reserved extension point.
#[napi(js_name = "onWillTransformMarkdown")]
pub async fn on_will_transform_markdown(markdown: String) -> Result<String> {
    will_transform(&markdown)
}

/// Returns the markdown unchanged after the host-defined transform stage.
///
/// Reserved extension point.
#[napi(js_name = "onDidTransformMarkdown")]
pub async fn on_did_transform_markdown(markdown: String) -> Result<String> {
    did_transform(&markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_reproduces_plugin_behavior() {
        let out = will_parse("```haskell\nx\n```\n类型类", None).unwrap();
        assert_eq!(out, "```haskell {.line-numbers}\nx\n```\n`类型类`");
    }

    #[test]
    fn config_overrides_apply_per_call() {
        let config = PreprocessConfig {
            fence_language: Some("rust".to_string()),
            ..PreprocessConfig::default()
        };
        let out = will_parse("```rust\nx\n```", Some(config)).unwrap();
        assert_eq!(out, "```rust {.line-numbers}\nx\n```");
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let options = build_options(Some(PreprocessConfig {
            fence_directive: Some("{.numbered}".to_string()),
            ..PreprocessConfig::default()
        }));
        assert_eq!(options.fence_language, "haskell");
        assert_eq!(options.fence_directive, "{.numbered}");
        assert_eq!(options.inline_code_terms, vec!["类型类".to_string()]);
    }

    #[test]
    fn reserved_stages_are_identity() {
        assert_eq!(did_parse("<p>hi</p>").unwrap(), "<p>hi</p>");
        assert_eq!(will_transform("类型类").unwrap(), "类型类");
        assert_eq!(did_transform("").unwrap(), "");
    }
}
