//! Pre-parse text rewrite utilities.
//!
//! Two rewrites run over the raw markdown source before the host parses it:
//!
//! - fence annotation: every literal `` ```<language> `` opener gains a
//!   trailing directive token so the rendered block shows line numbers;
//! - inline-code wrapping: every occurrence of a configured term is wrapped
//!   in single backticks so it renders as inline code.
//!
//! Both rewrites are global, case-sensitive, literal matches. The inline
//! wrap does not deduplicate: a term already inside a code span is wrapped
//! again, so re-running the rewrite adds another backtick layer.

use std::borrow::Cow;

/// Fence language annotated by default.
pub const DEFAULT_FENCE_LANGUAGE: &str = "haskell";

/// Directive token appended after the fence language.
pub const DEFAULT_FENCE_DIRECTIVE: &str = "{.line-numbers}";

/// Terms wrapped as inline code by default.
pub const DEFAULT_INLINE_CODE_TERMS: &[&str] = &["类型类"];

/// Options controlling the pre-parse rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Language tag whose fence openers receive the directive token.
    pub fence_language: String,
    /// Directive token inserted after the language tag.
    pub fence_directive: String,
    /// Literal terms to wrap in inline-code backticks.
    pub inline_code_terms: Vec<String>,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            fence_language: DEFAULT_FENCE_LANGUAGE.to_string(),
            fence_directive: DEFAULT_FENCE_DIRECTIVE.to_string(),
            inline_code_terms: DEFAULT_INLINE_CODE_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Append the directive token to every literal `` ```<language> `` opener.
///
/// Matching is a global, case-sensitive, byte-literal search; no other fence
/// is touched. Returns `Cow::Borrowed` when the input contains no opener.
pub fn annotate_fence_openers<'a>(input: &'a str, language: &str, directive: &str) -> Cow<'a, str> {
    let needle = format!("```{language}");
    let replacement = format!("```{language} {directive}");
    let (out, count) = replace_literal(input, &needle, &replacement);
    if count > 0 {
        log::debug!("annotated {count} `{language}` fence opener(s)");
    }
    out
}

/// Wrap every occurrence of `term` in single backtick delimiters.
///
/// Occurrences already inside code spans are wrapped again; the rewrite is
/// deliberately not idempotent.
pub fn wrap_inline_code<'a>(input: &'a str, term: &str) -> Cow<'a, str> {
    let replacement = format!("`{term}`");
    let (out, count) = replace_literal(input, term, &replacement);
    if count > 0 {
        log::debug!("wrapped {count} occurrence(s) of `{term}` as inline code");
    }
    out
}

/// Apply both rewrites to `input`.
///
/// The match patterns cannot overlap, so the order between the two rewrites
/// is immaterial. Infallible; inputs matching neither pattern pass through
/// borrowed and byte-identical.
pub fn apply_rewrites<'a>(options: &PreprocessOptions, input: &'a str) -> Cow<'a, str> {
    let mut text = annotate_fence_openers(input, &options.fence_language, &options.fence_directive);
    for term in &options.inline_code_terms {
        let next = wrap_inline_code(text.as_ref(), term);
        if let Cow::Owned(owned) = next {
            text = Cow::Owned(owned);
        }
    }
    text
}

/// Replace every occurrence of `needle` with `replacement`, returning the
/// result and the match count. Borrows the input when nothing matches.
fn replace_literal<'a>(
    input: &'a str,
    needle: &str,
    replacement: &str,
) -> (Cow<'a, str>, usize) {
    if needle.is_empty() || !input.contains(needle) {
        return (Cow::Borrowed(input), 0);
    }

    let mut out = String::with_capacity(input.len() + replacement.len());
    let mut rest = input;
    let mut count = 0usize;
    while let Some(pos) = rest.find(needle) {
        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = &rest[pos + needle.len()..];
        count += 1;
    }
    out.push_str(rest);
    (Cow::Owned(out), count)
}
