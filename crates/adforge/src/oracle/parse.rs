//! Tolerant parsing of model output.
//!
//! Models wrap their answers in prose, use single quotes, leave trailing
//! commas or forget to quote keys. The helpers here cut out the first JSON
//! object or list and repair it into strict JSON before handing it to serde.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("no JSON object in response")]
    NoObject,

    #[error("no list in response")]
    NoList,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Slice from the first `{` to its matching `}`.
pub fn extract_json_object(response: &str) -> Option<&str> {
    extract_balanced(response, '{', '}')
}

/// Slice from the first `[` to its matching `]`.
pub fn extract_list(response: &str) -> Option<&str> {
    extract_balanced(response, '[', ']')
}

fn extract_balanced(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;

    let mut depth = 0;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for (i, c) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if quote.is_some() => {
                escape_next = true;
            }
            '"' | '\'' => match quote {
                Some(q) if q == c => quote = None,
                None => quote = Some(c),
                _ => {}
            },
            c if c == open && quote.is_none() => {
                depth += 1;
            }
            c if c == close && quote.is_none() => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses the first JSON object in `response`, repairing it if needed.
pub fn parse_object(response: &str) -> Result<Map<String, Value>, ParseError> {
    let raw = extract_json_object(response).ok_or(ParseError::NoObject)?;
    let value = parse_value(raw)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::Malformed(format!("expected object, got {}", other))),
    }
}

/// Parses the first bracketed list of strings in `response`.
pub fn parse_string_list(response: &str) -> Result<Vec<String>, ParseError> {
    let raw = extract_list(response).ok_or(ParseError::NoList)?;
    let value = parse_value(raw)?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(ParseError::Malformed(format!(
                    "expected string item, got {}",
                    other
                ))),
            })
            .collect(),
        other => Err(ParseError::Malformed(format!("expected list, got {}", other))),
    }
}

fn parse_value(raw: &str) -> Result<Value, ParseError> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str(&repair_json(raw))
            .map_err(|e| ParseError::Malformed(e.to_string())),
    }
}

/// Rewrites loose JSON into strict JSON.
///
/// Handles single-quoted strings, bare object keys, trailing commas and the
/// `True`/`False`/`None` literals.
pub fn repair_json(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut stack: Vec<char> = Vec::new();
    let mut expect_key = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' | '\'' => {
                i = copy_string(&chars, i, &mut out);
                expect_key = false;
                continue;
            }
            '{' => {
                stack.push('{');
                expect_key = true;
                out.push(c);
            }
            '[' => {
                stack.push('[');
                expect_key = false;
                out.push(c);
            }
            '}' | ']' => {
                stack.pop();
                let trimmed = out.trim_end().len();
                out.truncate(trimmed);
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(c);
                expect_key = false;
            }
            ',' => {
                out.push(c);
                expect_key = stack.last() == Some(&'{');
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if expect_key {
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                } else {
                    out.push_str(match word.as_str() {
                        "True" => "true",
                        "False" => "false",
                        "None" => "null",
                        other => other,
                    });
                }
                expect_key = false;
                continue;
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                out.push(c);
                expect_key = false;
            }
        }
        i += 1;
    }

    out
}

/// Copies the string starting at `chars[start]` as a double-quoted JSON string.
/// Returns the index just past the closing quote.
fn copy_string(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    let mut i = start + 1;
    out.push('"');

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' if i + 1 < chars.len() => {
                let next = chars[i + 1];
                if next == '\'' {
                    out.push('\'');
                } else {
                    out.push('\\');
                    out.push(next);
                }
                i += 2;
                continue;
            }
            c if c == quote => {
                out.push('"');
                return i + 1;
            }
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
        i += 1;
    }

    out.push('"');
    i
}
