//! Reversible encoding of arbitrary keys into XML local names.
//!
//! A character that may not appear at its position in an XML 1.0 (fifth
//! edition) local name is written as `_x` followed by its code point in
//! uppercase hex and a closing `_`: four digits up to U+FFFF, eight above.
//! So `first name` becomes `first_x0020_name` and `1stField` becomes
//! `_x0031_stField`.
//!
//! Two extra rules make the mapping a bijection over every string:
//!
//! - An underscore followed by `x` or `X` is always escaped (`_x005F_`), so
//!   any `_x` in an encoded name starts an escape.
//! - The empty key is written as [`EMPTY_KEY_NAME`], a name no non-empty key
//!   can encode to.
//!
//! Decoding accepts either hex case and leaves sequences that are not valid
//! escapes untouched.

/// Element name used for the empty key.
pub const EMPTY_KEY_NAME: &str = "_x_";

/// Encode a key into a legal XML local name.
#[must_use]
pub fn encode_local_name(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY_NAME.to_owned();
    }

    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        let legal = if first {
            is_name_start_char(c)
        } else {
            is_name_char(c)
        };
        let starts_escape = c == '_' && matches!(chars.peek(), Some('x' | 'X'));

        if legal && !starts_escape {
            out.push(c);
        } else {
            push_escape(&mut out, c);
        }
        first = false;
    }

    out
}

/// Decode an XML local name produced by [`encode_local_name`] back into its key.
#[must_use]
pub fn decode_name(name: &str) -> String {
    if name == EMPTY_KEY_NAME {
        return String::new();
    }
    if !name.contains("_x") && !name.contains("_X") {
        return name.to_owned();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '_' && matches!(chars.get(i + 1), Some('x' | 'X')) {
            if let Some((c, consumed)) = parse_escape(&chars[i + 2..]) {
                out.push(c);
                i += 2 + consumed;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Whether `name` can be used as an element name: a local name, optionally
/// with a single namespace prefix.
#[must_use]
pub fn is_valid_element_name(name: &str) -> bool {
    match name.split_once(':') {
        Some((prefix, local)) => is_valid_local_name(prefix) && is_valid_local_name(local),
        None => is_valid_local_name(name),
    }
}

fn is_valid_local_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

/// `Char` from XML 1.0: characters allowed anywhere in a document.
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}'
        | '\u{A}'
        | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}'
    )
}

fn push_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    if code <= 0xFFFF {
        out.push_str(&format!("_x{code:04X}_"));
    } else {
        out.push_str(&format!("_x{code:08X}_"));
    }
}

/// Parse the hex digits and closing `_` of an escape. Returns the decoded
/// character and how many characters were consumed after the `_x` prefix.
fn parse_escape(rest: &[char]) -> Option<(char, usize)> {
    for digits in [4, 8] {
        if rest.len() > digits
            && rest[digits] == '_'
            && rest[..digits].iter().all(char::is_ascii_hexdigit)
        {
            let hex: String = rest[..digits].iter().collect();
            let c = u32::from_str_radix(&hex, 16)
                .ok()
                .and_then(char::from_u32)?;
            return Some((c, digits + 1));
        }
    }
    None
}

/// `NameStartChar` from XML 1.0 (fifth edition), without `:`.
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

/// `NameChar` from XML 1.0 (fifth edition), without `:`.
fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-'
            | '.'
            | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}'
        )
}
