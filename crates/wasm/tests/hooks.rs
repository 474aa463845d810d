#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Promise, Reflect};
use mdprep_wasm::{
    on_did_parse_markdown, on_did_transform_markdown, on_will_parse_markdown,
    on_will_transform_markdown,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

async fn resolve(promise: Promise) -> String {
    JsFuture::from(promise)
        .await
        .expect("hook promise resolves")
        .as_string()
        .expect("hook resolves to a string")
}

#[wasm_bindgen_test]
async fn will_parse_annotates_fences_and_wraps_terms() {
    let input = "```haskell\nmain = pure ()\n```\n\n类型类 is useful";
    let out = resolve(on_will_parse_markdown(input, JsValue::UNDEFINED)).await;
    assert_eq!(
        out,
        "```haskell {.line-numbers}\nmain = pure ()\n```\n\n`类型类` is useful"
    );
}

#[wasm_bindgen_test]
async fn will_parse_leaves_unmatched_input_untouched() {
    let input = "# Heading\n\n```js\n1\n```";
    let out = resolve(on_will_parse_markdown(input, JsValue::NULL)).await;
    assert_eq!(out, input);
}

#[wasm_bindgen_test]
async fn will_parse_accepts_camel_case_config() {
    let config = Object::new();
    Reflect::set(
        &config,
        &JsValue::from_str("fenceLanguage"),
        &JsValue::from_str("rust"),
    )
    .unwrap();

    let out = resolve(on_will_parse_markdown("```rust\nfn f() {}\n```", config.into())).await;
    assert_eq!(out, "```rust {.line-numbers}\nfn f() {}\n```");
}

#[wasm_bindgen_test]
async fn reserved_hooks_are_identity() {
    let html = "<pre><code>类型类</code></pre>";
    assert_eq!(
        resolve(on_did_parse_markdown(html, JsValue::UNDEFINED)).await,
        html
    );
    assert_eq!(resolve(on_will_transform_markdown("类型类")).await, "类型类");
    assert_eq!(resolve(on_did_transform_markdown("")).await, "");
}
