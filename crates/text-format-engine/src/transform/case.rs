//! Case conversion.

/// Chars that can start a word or sentence: ASCII letters, digits and `_`,
/// plus the Cyrillic block
pub fn is_latin_or_cyrillic(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Sentence terminators; a letter after one of these and whitespace starts a sentence
const SENTENCE_TERMINATORS: [char; 5] = ['.', '!', '?', '\n', '~'];

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Uppercase the first char of every word
///
/// A word starts at a Latin/Cyrillic char and runs to the next whitespace, so
/// `don't` and `e-mail` count as one word each.
pub fn capitalize_word(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if in_word {
            in_word = !c.is_whitespace();
            out.push(c);
        } else if is_latin_or_cyrillic(c) {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Uppercase the first letter of the text and of every sentence
pub fn capitalize_sentence(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if is_latin_or_cyrillic(c) && starts_sentence(&chars, i) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// True at text start, or after a terminator followed by one or more whitespace chars
fn starts_sentence(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let gap_start = chars[..i]
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |p| p + 1);
    if gap_start == i {
        return false;
    }

    let after_terminator =
        gap_start > 0 && SENTENCE_TERMINATORS.contains(&chars[gap_start - 1]);
    // A newline inside the gap is itself a terminator when whitespace follows it
    after_terminator || chars[gap_start..i - 1].contains(&'\n')
}
