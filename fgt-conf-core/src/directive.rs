//! Classification of single configuration lines.

/// One configuration line, classified by its leading keyword.
///
/// Classification works on the trimmed line. Payloads borrow from the input
/// and keep their internal spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `config <path>`, carrying the path after the keyword.
    Config(&'a str),
    /// `end`
    End,
    /// `edit <token>`, carrying the raw token text (quotes included).
    Edit(&'a str),
    /// `set <key> <args>`
    Set { key: &'a str, args: &'a str },
    /// `unset <key>`
    Unset(&'a str),
    /// `next`
    Next,
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else, trimmed.
    Other(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify a raw configuration line.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Directive::Blank;
        }
        match line {
            "end" => return Directive::End,
            "next" => return Directive::Next,
            _ => {}
        }

        let (keyword, rest) = split_keyword(line);
        match keyword {
            "config" if !rest.is_empty() => Directive::Config(rest),
            "edit" if !rest.is_empty() => Directive::Edit(rest),
            "unset" if !rest.is_empty() => Directive::Unset(rest),
            "set" if !rest.is_empty() => {
                let (key, args) = split_keyword(rest);
                Directive::Set { key, args }
            }
            _ => Directive::Other(line),
        }
    }
}

fn split_keyword(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

/// Return every double-quoted substring of `text`, in order.
///
/// Quotes pair up left to right; an unterminated trailing quote is ignored.
/// Empty quoted strings are returned as empty values.
pub fn quoted_values(text: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('"') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('"') else {
            break;
        };
        values.push(after[..close].to_string());
        rest = &after[close + 1..];
    }
    values
}

/// Return the name when `token` is exactly one non-empty double-quoted string.
pub fn quoted_name(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    if inner.is_empty() || inner.contains('"') {
        return None;
    }
    Some(inner)
}

/// Return the `n`-th (zero-based) whitespace-separated word of `text`.
pub fn nth_word(text: &str, n: usize) -> Option<&str> {
    text.split_whitespace().nth(n)
}
