//! Decoding of literal source text into values.
//!
//! Every function returns `None` when the text is not a literal it understands, in which case
//! callers keep the raw text.

/// The value of an integer literal
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Int(i64),
    /// Integer literals that do not fit an `i64` become floats
    Float(f64),
}

/// The quote that delimits the string an escape sequence appears in. Only an escaped quote
/// of the same kind loses its backslash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quote {
    Double,
    Backtick,
    Heredoc,
}

/// Decodes a constant string literal: single or double quoted, heredoc or nowdoc, with an
/// optional `b` prefix.
pub fn string_literal(raw: &str) -> Option<String> {
    let raw = raw
        .strip_prefix('b')
        .or_else(|| raw.strip_prefix('B'))
        .unwrap_or(raw);
    if let Some(heredoc) = raw.strip_prefix("<<<") {
        return heredoc_literal(heredoc);
    }
    if let Some(inner) = raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        return Some(single_quoted(inner));
    }
    if let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        return escaped(inner, Quote::Double);
    }
    None
}

/// Resolves the escapes of a single quoted body. Only `\\` and `\'` are escapes.
pub fn single_quoted(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next @ ('\\' | '\'')) = chars.peek().copied() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Resolves the escapes of a double quoted, backtick or heredoc body.
///
/// Unknown escapes are kept as written. Returns `None` for a malformed `\u{...}` escape or
/// when the escapes produce bytes that are not UTF-8.
pub fn escaped(inner: &str, quote: Quote) -> Option<String> {
    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' || i + 1 == bytes.len() {
            out.push(b);
            i += 1;
            continue;
        }
        let next = bytes[i + 1];
        i += 2;
        match next {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'v' => out.push(0x0B),
            b'e' => out.push(0x1B),
            b'f' => out.push(0x0C),
            b'\\' | b'$' => out.push(next),
            b'"' if quote == Quote::Double => out.push(next),
            b'`' if quote == Quote::Backtick => out.push(next),
            b'0'..=b'7' => {
                let digits = octal_digits(&bytes[i - 1..]);
                let value = digits
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                // `\400` and above wrap around, as PHP does
                out.push((value & 0xFF) as u8);
                i += digits.len() - 1;
            }
            b'x' if bytes.get(i).is_some_and(u8::is_ascii_hexdigit) => {
                let len = bytes[i..]
                    .iter()
                    .take(2)
                    .take_while(|b| b.is_ascii_hexdigit())
                    .count();
                let value = u8::from_str_radix(std::str::from_utf8(&bytes[i..i + len]).ok()?, 16)
                    .ok()?;
                out.push(value);
                i += len;
            }
            b'u' if bytes.get(i) == Some(&b'{') => {
                let close = bytes[i..].iter().position(|b| *b == b'}')? + i;
                let hex = std::str::from_utf8(&bytes[i + 1..close]).ok()?;
                let code_point = u32::from_str_radix(hex, 16).ok()?;
                let c = char::from_u32(code_point)?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                i = close + 1;
            }
            _ => {
                out.push(b'\\');
                out.push(next);
            }
        }
    }
    String::from_utf8(out).ok()
}

fn octal_digits(bytes: &[u8]) -> &[u8] {
    let len = bytes
        .iter()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(*b))
        .count();
    &bytes[..len]
}

/// Decodes a heredoc or nowdoc, given the text after `<<<`. The closing marker's indentation
/// is removed from every body line.
fn heredoc_literal(rest: &str) -> Option<String> {
    let (opening, tail) = rest.split_once('\n')?;
    let opening = opening.trim_matches([' ', '\t', '\r']);
    let (label, nowdoc) = if let Some(label) = opening
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        (label, true)
    } else {
        let label = opening
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(opening);
        (label, false)
    };

    let (body, closing) = match tail.rfind('\n') {
        Some(idx) => (&tail[..idx], &tail[idx + 1..]),
        None => ("", tail),
    };
    // the line break before the closing marker is not part of the body
    let body = body.strip_suffix('\r').unwrap_or(body);
    let indent = closing.len() - closing.trim_start_matches([' ', '\t']).len();
    if closing[indent..].trim_end_matches(';') != label {
        return None;
    }
    let indentation = &closing[..indent];

    let body = body
        .split('\n')
        .map(|line| line.strip_prefix(indentation).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");
    if nowdoc {
        Some(body)
    } else {
        escaped(&body, Quote::Heredoc)
    }
}

/// Decodes an integer literal in decimal, hex (`0x`), binary (`0b`) or octal (`0`/`0o`),
/// with optional `_` separators.
pub fn integer_literal(raw: &str) -> Option<Number> {
    let digits = raw.replace('_', "");
    let lower = digits.to_ascii_lowercase();
    let (radix, digits) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    match i64::from_str_radix(digits, radix) {
        Ok(value) => Some(Number::Int(value)),
        Err(_) if radix == 10 => digits.parse::<f64>().ok().map(Number::Float),
        Err(_) => Some(Number::Float(digits.chars().fold(0.0, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        }))),
    }
}

/// Decodes a floating point literal, e.g. `1.5`, `.5e-3` or `1_000.0`
pub fn float_literal(raw: &str) -> Option<f64> {
    let digits = raw.replace('_', "");
    let valid = digits
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !valid || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn single_quoted_strings() {
        assert_eq!(string_literal("'hi'").as_deref(), Some("hi"));
        assert_eq!(string_literal(r"'it\'s'").as_deref(), Some("it's"));
        assert_eq!(string_literal(r"'a\\b'").as_deref(), Some(r"a\b"));
        assert_eq!(string_literal(r"'a\nb'").as_deref(), Some(r"a\nb"));
        assert_eq!(string_literal("b'bytes'").as_deref(), Some("bytes"));
        assert_eq!(string_literal("''").as_deref(), Some(""));
    }

    #[test]
    fn double_quoted_strings() {
        assert_eq!(string_literal(r#""a\tb\n""#).as_deref(), Some("a\tb\n"));
        assert_eq!(string_literal(r#""\$x \"q\"""#).as_deref(), Some("$x \"q\""));
        assert_eq!(string_literal(r#""\x41\101\u{1F600}""#).as_deref(), Some("AA\u{1F600}"));
        assert_eq!(string_literal(r#""\q\x\u""#).as_deref(), Some(r"\q\x\u"));
        assert_eq!(string_literal(r#""\e\v\f""#).as_deref(), Some("\u{1b}\u{b}\u{c}"));
    }

    #[test]
    fn bad_escapes_are_not_decoded() {
        assert_eq!(string_literal(r#""\u{zz}""#), None);
        assert_eq!(string_literal(r#""\xff""#), None);
        assert_eq!(string_literal("FOO"), None);
    }

    #[test]
    fn escaped_quotes_depend_on_delimiter() {
        assert_eq!(escaped(r#"\"\`"#, Quote::Double).as_deref(), Some(r#""\`"#));
        assert_eq!(escaped(r#"\"\`"#, Quote::Backtick).as_deref(), Some(r#"\"`"#));
        assert_eq!(escaped(r#"\"\`"#, Quote::Heredoc).as_deref(), Some(r#"\"\`"#));
        assert_eq!(escaped("trailing\\", Quote::Double).as_deref(), Some("trailing\\"));
    }

    #[test]
    fn heredoc_and_nowdoc() {
        assert_eq!(
            string_literal("<<<EOT\nline\\tone\n  two\nEOT").as_deref(),
            Some("line\tone\n  two")
        );
        assert_eq!(
            string_literal("<<<'EOT'\n    raw\\t\n      more\n    EOT").as_deref(),
            Some("raw\\t\n  more")
        );
        assert_eq!(string_literal("<<<\"EOT\"\nEOT").as_deref(), Some(""));
        assert_eq!(string_literal("<<<EOT\nbody\nOTHER"), None);
    }

    #[test]
    fn heredocs_with_crlf_line_endings() {
        assert_eq!(
            string_literal("<<<EOT\r\nbody\r\nEOT").as_deref(),
            Some("body")
        );
        assert_eq!(
            string_literal("<<<EOT\r\na\r\nb\r\nEOT").as_deref(),
            Some("a\r\nb")
        );
        assert_eq!(
            string_literal("<<<'EOT'\r\n  raw\\n\r\n  EOT").as_deref(),
            Some("raw\\n")
        );
    }

    #[test]
    fn integers() {
        assert_eq!(integer_literal("42"), Some(Number::Int(42)));
        assert_eq!(integer_literal("0"), Some(Number::Int(0)));
        assert_eq!(integer_literal("0x1F"), Some(Number::Int(31)));
        assert_eq!(integer_literal("0b101"), Some(Number::Int(5)));
        assert_eq!(integer_literal("0755"), Some(Number::Int(493)));
        assert_eq!(integer_literal("0o17"), Some(Number::Int(15)));
        assert_eq!(integer_literal("1_000_000"), Some(Number::Int(1_000_000)));
        assert_eq!(integer_literal("09"), None);
        assert_eq!(integer_literal("0x"), None);
    }

    #[test]
    fn integer_overflow_becomes_float() {
        assert_eq!(
            integer_literal("9223372036854775808"),
            Some(Number::Float(9223372036854775808.0))
        );
        assert_eq!(
            integer_literal("0xFFFFFFFFFFFFFFFF"),
            Some(Number::Float(18446744073709551615.0))
        );
    }

    #[test]
    fn floats() {
        assert_eq!(float_literal("1.5"), Some(1.5));
        assert_eq!(float_literal("1.5e3"), Some(1500.0));
        assert_eq!(float_literal(".5"), Some(0.5));
        assert_eq!(float_literal("1_000.25"), Some(1000.25));
        assert_eq!(float_literal("inf"), None);
    }
}
