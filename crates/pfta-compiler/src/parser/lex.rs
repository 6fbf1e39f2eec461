//! Line classification: the first parsing pass.

use pfta_core::error::FaultTreeTextError;

pub const LINE_EXPLAINER: &str = "A line must have one of the following forms:\n    \
    <class>: <identifier>  (an object declaration)\n    \
    - <key>: <value>       (a property setting)\n    \
    # <comment>            (a comment)\n    \
    <blank line>           (used before the next declaration)";

/// One input line, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Object {
        line_number: usize,
        class: String,
        id: String,
    },
    Property {
        line_number: usize,
        key: String,
        value: String,
    },
    Comment {
        line_number: usize,
    },
    Blank {
        line_number: usize,
    },
}

impl Line {
    pub fn line_number(&self) -> usize {
        match self {
            Line::Object { line_number, .. }
            | Line::Property { line_number, .. }
            | Line::Comment { line_number, .. }
            | Line::Blank { line_number, .. } => *line_number,
        }
    }
}

/// Classify every line of `text`, 1-indexed.
pub fn lex(text: &str) -> Result<Vec<Line>, FaultTreeTextError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| classify_line(i + 1, line))
        .collect()
}

fn classify_line(line_number: usize, line: &str) -> Result<Line, FaultTreeTextError> {
    if line.trim().is_empty() {
        return Ok(Line::Blank { line_number });
    }

    if line.trim_start().starts_with('#') {
        return Ok(Line::Comment { line_number });
    }

    if let Some(property) = try_property(line_number, line) {
        return property;
    }

    if let Some(object) = try_object(line_number, line) {
        return object;
    }

    Err(FaultTreeTextError::InvalidLine {
        line_number,
        message: format!("invalid line `{line}`"),
        explainer: LINE_EXPLAINER.to_string(),
    })
}

fn try_property(line_number: usize, line: &str) -> Option<Result<Line, FaultTreeTextError>> {
    let rest = line.strip_prefix("- ")?;
    let colon = rest.find(':')?;
    let key = &rest[..colon];
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    let after_colon = &rest[colon + 1..];
    let value = after_colon.strip_prefix(char::is_whitespace)?.trim();
    if value.is_empty() {
        return None;
    }
    Some(Ok(Line::Property {
        line_number,
        key: key.to_string(),
        value: value.to_string(),
    }))
}

fn try_object(line_number: usize, line: &str) -> Option<Result<Line, FaultTreeTextError>> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let colon = line.find(':')?;
    let class = &line[..colon];
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return None;
    }
    let after_colon = &line[colon + 1..];
    let id = after_colon.strip_prefix(char::is_whitespace)?.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return None;
    }
    Some(Ok(Line::Object {
        line_number,
        class: class.to_string(),
        id: id.to_string(),
    }))
}

#[cfg(test)]
#[path = "lex_tests.rs"]
mod lex_tests;
