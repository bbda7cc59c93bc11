//! Reader for the systemd unit-file dialect of INI.
//!
//! Only structure is produced here: sections in file order, each with its options. Nothing is
//! interpreted, so the validators decide what a section or option means.

use thiserror::Error;

/// systemd refuses option lines longer than LINE_MAX once continuations are joined.
pub const LINE_MAX: usize = 2048;

/// A single `Key=Value` line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOption {
    pub name: String,
    pub value: String,
}

/// A `[Name]` header and the options that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSection {
    pub name: String,
    pub options: Vec<UnitOption>,
}

impl UnitSection {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitFileError {
    #[error("line {line}: option line exceeds 2048 bytes")]
    LineTooLong { line: usize },
    #[error("line {line}: section header is missing a closing ']'")]
    UnterminatedSection { line: usize },
    #[error("line {line}: unexpected text after section header: {trailing:?}")]
    TrailingGarbage { line: usize, trailing: String },
    #[error("line {line}: expected 'Key=Value', found {content:?}")]
    MissingSeparator { line: usize, content: String },
    #[error("line {line}: option has an empty name")]
    EmptyOptionName { line: usize },
}

/// Boundary between the validators and whatever understands unit-file syntax.
pub trait UnitFileParser {
    fn deserialize(&self, text: &str) -> Result<Vec<UnitSection>, UnitFileError>;
}

/// Parser following systemd's own reading rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemdUnitParser;

impl UnitFileParser for SystemdUnitParser {
    fn deserialize(&self, text: &str) -> Result<Vec<UnitSection>, UnitFileError> {
        deserialize(text)
    }
}

/// Parse unit-file text into its sections.
pub fn deserialize(text: &str) -> Result<Vec<UnitSection>, UnitFileError> {
    let mut sections: Vec<UnitSection> = Vec::new();
    // Pending option whose value ended in a line continuation.
    let mut continued: Option<(String, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;

        if let Some((name, mut value)) = continued.take() {
            let trimmed = raw.trim();
            if is_comment(trimmed) {
                continued = Some((name, value));
                continue;
            }
            let (chunk, more) = split_continuation(trimmed);
            if !chunk.is_empty() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(chunk);
            }
            check_length(&name, &value, line_no)?;
            if more {
                continued = Some((name, value));
            } else {
                push_option(&mut sections, name, value);
            }
            continue;
        }

        let line = raw.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some(close) = header.find(']') else {
                return Err(UnitFileError::UnterminatedSection { line: line_no });
            };
            let trailing = header[close + 1..].trim();
            if !trailing.is_empty() {
                return Err(UnitFileError::TrailingGarbage {
                    line: line_no,
                    trailing: trailing.to_string(),
                });
            }
            sections.push(UnitSection::new(&header[..close]));
            continue;
        }

        // Text ahead of the first header is skipped, as systemd does.
        if sections.is_empty() {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            return Err(UnitFileError::MissingSeparator {
                line: line_no,
                content: line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(UnitFileError::EmptyOptionName { line: line_no });
        }
        let (value, more) = split_continuation(value.trim());
        check_length(name, value, line_no)?;
        if more {
            continued = Some((name.to_string(), value.to_string()));
        } else {
            push_option(&mut sections, name.to_string(), value.to_string());
        }
    }

    // A continuation on the final line just ends the value.
    if let Some((name, value)) = continued {
        push_option(&mut sections, name, value);
    }

    Ok(sections)
}

/// True when any section carries `name`. The first match is enough.
pub fn has_section(sections: &[UnitSection], name: &str) -> bool {
    sections.iter().any(|section| section.name == name)
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

fn check_length(name: &str, value: &str, line: usize) -> Result<(), UnitFileError> {
    if name.len() + 1 + value.len() > LINE_MAX {
        return Err(UnitFileError::LineTooLong { line });
    }
    Ok(())
}

fn split_continuation(value: &str) -> (&str, bool) {
    match value.strip_suffix('\\') {
        Some(rest) => (rest.trim_end(), true),
        None => (value, false),
    }
}

fn push_option(sections: &mut [UnitSection], name: String, value: String) {
    if let Some(section) = sections.last_mut() {
        section.options.push(UnitOption { name, value });
    }
}
