//! Directive command tokenizer
//!
//! Splits a raw directive command line into words. Double-quoted arguments
//! follow Go quoted-string syntax (see [`super::quoting`]); unquoted words
//! run to the next space or tab with no escaping. Environment references
//! (`$NAME`, `${NAME}`) are expanded once per word, after unquoting.

use crate::domain::quoting;
use crate::error::SyntaxError;

/// Split a directive command line into argument words.
///
/// ```
/// use goeval::domain::command::split;
///
/// let words = split(r#" date "+%Y-%m-%d""#).unwrap();
/// assert_eq!(words, vec!["date", "+%Y-%m-%d"]);
/// ```
pub fn split(line: &str) -> Result<Vec<String>, SyntaxError> {
    let mut words = Vec::new();
    let mut rest = line;

    'process: loop {
        rest = rest.trim_start_matches([' ', '\t']);
        if rest.is_empty() {
            break;
        }

        let bytes = rest.as_bytes();
        if bytes[0] == b'"' {
            let mut i = 1;
            while i < bytes.len() {
                match bytes[i] {
                    b'\\' => {
                        if i + 1 == bytes.len() {
                            return Err(SyntaxError::BadBackslash);
                        }
                        // Escaped character, whatever it is, is not a terminator
                        i += 2;
                    }
                    b'"' => {
                        let word = quoting::unquote(&rest[..i + 1])
                            .ok_or(SyntaxError::BadQuotedString)?;
                        words.push(word);
                        rest = &rest[i + 1..];
                        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
                            return Err(SyntaxError::MissingSpaceAfterQuote);
                        }
                        continue 'process;
                    }
                    _ => i += 1,
                }
            }
            return Err(SyntaxError::MismatchedQuote);
        }

        let end = rest.find([' ', '\t']).unwrap_or(rest.len());
        words.push(rest[..end].to_string());
        rest = &rest[end..];
    }

    for word in &mut words {
        *word = expand(word, |name| std::env::var(name).ok());
    }

    Ok(words)
}

/// Expand `$NAME` and `${NAME}` references in `s`.
///
/// Names are `[A-Za-z0-9_]+`. Undefined variables expand to the empty
/// string; a `$` that introduces neither form is kept literally, as is an
/// unterminated `${`.
pub fn expand<F>(s: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'{' {
                if let Some(close) = s[i + 2..].find('}') {
                    let name = &s[i + 2..i + 2 + close];
                    out.push_str(&lookup(name).unwrap_or_default());
                    i += close + 3;
                    continue;
                }
            } else {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && is_name_byte(bytes[end]) {
                    end += 1;
                }
                if end > start {
                    out.push_str(&lookup(&s[start..end]).unwrap_or_default());
                    i = end;
                    continue;
                }
            }
        }
        match s[i..].chars().next() {
            Some(c) => {
                out.push(c);
                i += c.len_utf8();
            }
            None => break,
        }
    }

    out
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
