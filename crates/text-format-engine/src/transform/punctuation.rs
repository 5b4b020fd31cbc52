//! ASCII to full-width Chinese punctuation.

/// Convert `,;:!?` to their full-width forms
///
/// A colon only converts after a char that is not an ASCII letter or digit,
/// so `http://` and `10:30` survive; `!` is kept before `[` so image links
/// such as `![alt](src)` stay intact.
pub fn convert_chinese_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev: Option<char> = None;

    while let Some(c) = chars.next() {
        let converted = match c {
            ',' => '，',
            ';' => '；',
            ':' if prev.is_some_and(|p| !p.is_ascii_alphanumeric()) => '：',
            '!' if chars.peek() != Some(&'[') => '！',
            '?' => '？',
            other => other,
        };
        out.push(converted);
        prev = Some(c);
    }

    out
}
