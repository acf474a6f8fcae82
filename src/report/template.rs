//! Marker-delimited template splicing.

use crate::error::TemplateError;

/// Replace whatever sits between `start` and `end` with `content`.
///
/// Both markers are kept. The first occurrence of each marker is used.
pub fn splice(
    document: &str,
    start: &str,
    end: &str,
    content: &str,
) -> Result<String, TemplateError> {
    let start_index = document
        .find(start)
        .ok_or_else(|| TemplateError::MarkerNotFound(start.to_string()))?;
    let end_index = document
        .find(end)
        .ok_or_else(|| TemplateError::MarkerNotFound(end.to_string()))?;

    let body_start = start_index + start.len();
    if end_index < body_start {
        return Err(TemplateError::MarkerOrder {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut spliced = String::with_capacity(document.len() + content.len());
    spliced.push_str(&document[..body_start]);
    spliced.push_str(content);
    spliced.push_str(&document[end_index..]);

    Ok(spliced)
}
