//! Text normalization: lowercase, URL stripping, Portuguese letter
//! filter, whitespace collapse.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("static URL pattern compiles"));

/// Characters allowed through normalization: ASCII letters plus the
/// accented letters of Portuguese. Everything else becomes a space.
fn is_portuguese_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'à' | 'â' | 'ã' | 'é' | 'ê' | 'í' | 'ó' | 'ô' | 'õ' | 'ú' | 'ü' | 'ç'
        )
}

/// Normalize raw review text into a lowercase, letters-only string with
/// single spaces. Idempotent.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let no_urls = URL_PATTERN.replace_all(&lowered, " ");

    let mut out = String::with_capacity(no_urls.len());
    let mut last_was_space = true;
    for c in no_urls.chars() {
        if is_portuguese_letter(c) {
            out.push(c);
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Fold the Portuguese diacritics to their ASCII base letter.
pub fn fold_diacritics(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
