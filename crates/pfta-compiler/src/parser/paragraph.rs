//! Paragraph grouping: the second parsing pass.

use pfta_core::error::FaultTreeTextError;

use super::lex::Line;

/// A maximal run of consecutive OBJECT/PROPERTY lines (comments and blank
/// lines are separators, never members). `object` is `None` only for a
/// paragraph with no header line, permitted solely for the first paragraph
/// (the implicit `FaultTree` object).
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub object: Option<Line>,
    pub properties: Vec<Line>,
}

/// Group classified lines into paragraphs, consecutive non-blank,
/// non-comment lines forming one paragraph each.
pub fn group(lines: &[Line]) -> Result<Vec<Paragraph>, FaultTreeTextError> {
    let mut paragraphs = Vec::new();
    let mut chunk: Vec<Line> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        match line {
            Line::Object { .. } | Line::Property { .. } => chunk.push(line.clone()),
            Line::Comment { .. } | Line::Blank { .. } => {}
        }

        let is_last = i + 1 == lines.len();
        let is_blank = matches!(line, Line::Blank { .. });

        if (is_last || is_blank) && !chunk.is_empty() {
            paragraphs.push(into_paragraph(std::mem::take(&mut chunk))?);
        }
    }

    Ok(paragraphs)
}

fn into_paragraph(chunk: Vec<Line>) -> Result<Paragraph, FaultTreeTextError> {
    let mut iter = chunk.into_iter();
    let first = iter.next().expect("chunk is never empty");

    let (object, properties_head) = match &first {
        Line::Object { .. } => (Some(first.clone()), Vec::new()),
        Line::Property { .. } => (None, vec![first.clone()]),
        Line::Comment { .. } | Line::Blank { .. } => {
            unreachable!("comment/blank lines are filtered out of paragraph chunks before grouping")
        }
    };

    let mut properties = properties_head;
    for line in iter {
        match &line {
            Line::Property { .. } => properties.push(line),
            Line::Object { line_number, class, .. } => {
                return Err(FaultTreeTextError::SmotheredObject {
                    line_number: *line_number,
                    message: format!("missing blank line before declaration of `{class}`"),
                })
            }
            Line::Comment { .. } | Line::Blank { .. } => {
                unreachable!("comment/blank lines are filtered out of paragraph chunks before grouping")
            }
        }
    }

    Ok(Paragraph { object, properties })
}

#[cfg(test)]
#[path = "paragraph_tests.rs"]
mod paragraph_tests;
