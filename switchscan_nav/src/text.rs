// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edits on the typed-text buffer.

use alloc::{string::String, vec::Vec};

/// The word being typed: everything after the last whitespace.
///
/// Empty when the buffer is empty or ends in whitespace.
pub(crate) fn trailing_token(text: &str) -> &str {
    text.rsplit(char::is_whitespace).next().unwrap_or_default()
}

/// Replace the last whitespace-delimited word with `word` and end with a single space.
///
/// Whitespace between the remaining words is normalized to one space.
pub(crate) fn replace_last_token(buffer: &mut String, word: &str) {
    let mut words: Vec<&str> = buffer.split_whitespace().collect();
    words.pop();
    words.push(word);
    let mut out = words.join(" ");
    out.push(' ');
    *buffer = out;
}
