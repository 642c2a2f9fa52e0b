//! Splits text into pieces the speech endpoint accepts in one request.

use lazy_static::lazy_static;
use regex::Regex;

/// Longest piece, in characters, the speech endpoint will voice.
pub const MAX_CHUNK_CHARS: usize = 100;

lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(
        r"(?x)
        [.!?;:,…]+(?:\s+|$)|     # Latin punctuation followed by space or end
        [。，、！？；：]+|          # CJK punctuation, no trailing space
        \n+                       # Line breaks
        "
    )
    .unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPEAKABLE: Regex = Regex::new(r"[\p{L}\p{N}]").unwrap();
}

/// Break `input` into chunks of at most [`MAX_CHUNK_CHARS`] characters.
///
/// Sentences are kept whole where they fit and packed together greedily.
/// Chunks without any letter or digit are dropped, so punctuation-only input
/// yields nothing.
pub fn chunks(input: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences(input) {
        for piece in split_long(&sentence, MAX_CHUNK_CHARS) {
            if current.is_empty() {
                current = piece;
            } else if char_len(&current) + 1 + char_len(&piece) <= MAX_CHUNK_CHARS {
                current.push(' ');
                current.push_str(&piece);
            } else {
                chunks.push(std::mem::replace(&mut current, piece));
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|c| SPEAKABLE.is_match(c));
    chunks
}

fn sentences(input: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for m in SENTENCE_BREAK.find_iter(input) {
        push_normalized(&mut sentences, &input[last_end..m.end()]);
        last_end = m.end();
    }

    if last_end < input.len() {
        push_normalized(&mut sentences, &input[last_end..]);
    }

    sentences
}

fn push_normalized(out: &mut Vec<String>, text: &str) {
    let normalized = WHITESPACE.replace_all(text.trim(), " ");
    if !normalized.is_empty() {
        out.push(normalized.into_owned());
    }
}

/// Split at the last space before `max` characters, or mid-word when a
/// single word is longer than `max`.
fn split_long(segment: &str, max: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = segment;

    while char_len(rest) > max {
        // char_len(rest) > max guarantees the nth boundary exists
        let cut = rest
            .char_indices()
            .nth(max)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let space = if rest[cut..].starts_with(' ') {
            Some(cut)
        } else {
            rest[..cut].rfind(' ').filter(|&i| i > 0)
        };

        let (piece, remainder) = match space {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (&rest[..cut], &rest[cut..]),
        };

        let piece = piece.trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        rest = remainder.trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }

    pieces
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
