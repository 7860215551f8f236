// src/core/tokenizer.rs

/// Punctuation characters that terminate a token, alongside whitespace.
pub const DELIMITERS: &str = "-@!#$%&*()[]{}\".,;:~`?<>+=_/|";

/// Splits `content` into lowercased tokens.
///
/// Tokens are separated by whitespace or any character in
/// [`DELIMITERS`]; empty fragments between adjacent separators are
/// dropped. No validity filtering happens here — callers decide what to
/// do with tokens that are not words (see [`is_word`]).
pub fn tokenize(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split(|c: char| c.is_whitespace() || DELIMITERS.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// A token counts as a word when every character is alphabetic or an
/// apostrophe. Digits, and tokens mixing letters with digits, are
/// rejected.
#[must_use]
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic() || c == '\'')
}
