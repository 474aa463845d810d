#![deny(missing_docs)]
//! WebAssembly bindings exposing the mdprep lifecycle hooks.
//!
//! Each export returns an already-settled `js_sys::Promise`, matching the
//! deferred-value contract the preview host awaits at every pipeline stage.
//! Nothing here suspends past the call boundary.

use mdprep_core::{HookError, LifecycleHooks, NullQuery, PreprocessOptions, Preprocessor};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Configuration accepted by the WASM hook functions.
/// Mirrors the NAPI `PreprocessConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmPreprocessConfig {
    /// Language tag whose fence openers receive the directive token.
    #[serde(default, alias = "fenceLanguage")]
    pub fence_language: Option<String>,
    /// Directive token inserted after the language tag.
    #[serde(default, alias = "fenceDirective")]
    pub fence_directive: Option<String>,
    /// Literal terms to wrap in inline-code backticks.
    #[serde(default, alias = "inlineCodeTerms")]
    pub inline_code_terms: Option<Vec<String>>,
}

fn parse_config(config: JsValue) -> WasmPreprocessConfig {
    if config.is_undefined() || config.is_null() {
        return WasmPreprocessConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_options(cfg: WasmPreprocessConfig) -> PreprocessOptions {
    let defaults = PreprocessOptions::default();
    PreprocessOptions {
        fence_language: cfg.fence_language.unwrap_or(defaults.fence_language),
        fence_directive: cfg.fence_directive.unwrap_or(defaults.fence_directive),
        inline_code_terms: cfg.inline_code_terms.unwrap_or(defaults.inline_code_terms),
    }
}

/// Settle a hook result into the promise the host awaits.
fn settle(result: Result<String, HookError>) -> js_sys::Promise {
    match result {
        Ok(text) => js_sys::Promise::resolve(&JsValue::from_str(&text)),
        Err(err) => js_sys::Promise::reject(&JsValue::from(js_sys::Error::new(&err.to_string()))),
    }
}

/// Rewrites markdown source before the host converts it to HTML.
///
/// Annotates `` ```haskell `` fence openers with `{.line-numbers}` and wraps
/// every `类型类` occurrence as inline code. `config` may override either
/// rewrite; pass `undefined` for the defaults.
#[wasm_bindgen(js_name = onWillParseMarkdown)]
pub fn on_will_parse_markdown(markdown: &str, config: JsValue) -> js_sys::Promise {
    let options = build_options(parse_config(config));
    settle(Preprocessor::new(options).will_parse_markdown(markdown))
}

/// Returns the rendered HTML fragment unchanged.
///
/// `query` is the host's tree-query capability; it stays opaque on this side
/// of the boundary. Reserved extension point.
#[wasm_bindgen(js_name = onDidParseMarkdown)]
pub fn on_did_parse_markdown(html: &str, query: JsValue) -> js_sys::Promise {
    let _ = query;
    settle(Preprocessor::default().did_parse_markdown(html, &NullQuery))
}

/// Returns the markdown unchanged before the host-defined transform stage.
///
/// Reserved extension point.
#[wasm_bindgen(js_name = onWillTransformMarkdown)]
pub fn on_will_transform_markdown(markdown: &str) -> js_sys::Promise {
    settle(Preprocessor::default().will_transform_markdown(markdown))
}

/// Returns the markdown unchanged after the host-defined transform stage.
///
/// Reserved extension point.
#[wasm_bindgen(js_name = onDidTransformMarkdown)]
pub fn on_did_transform_markdown(markdown: &str) -> js_sys::Promise {
    settle(Preprocessor::default().did_transform_markdown(markdown))
}
