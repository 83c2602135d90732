//! Message-format templates.
//!
//! A template is a literal string with `{placeholder}` substitutions, parsed
//! once at logger initialization and rendered per record. [`MessageTemplate::captures`]
//! inverts a rendered line back into its fields, which is what the
//! round-trip tests lean on.

use std::collections::HashMap;

use crate::error::TemplateError;
use crate::record::LogRecord;

/// A field that can be substituted into a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Record timestamp (`YYYY-MM-DD HH:MM:SS`, local time).
    Timestamp,
    /// Source file of the caller.
    File,
    /// Source line of the caller.
    Line,
    /// Uppercase level name.
    Level,
    /// Rendered message payload.
    Message,
}

impl Placeholder {
    /// Placeholder name as written inside braces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::File => "file",
            Self::Line => "line",
            Self::Level => "level",
            Self::Message => "message",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "timestamp" => Some(Self::Timestamp),
            "file" => Some(Self::File),
            "line" => Some(Self::Line),
            "level" => Some(Self::Level),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// A parsed message-format template.
///
/// # Examples
///
/// ```rust
/// use mnemosyne_core::MessageTemplate;
///
/// let template = MessageTemplate::parse("{level} {message}").unwrap();
/// assert!(MessageTemplate::parse("{nope}").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownPlaceholder`] for a brace pair whose
    /// name is not one of `timestamp`/`file`/`line`/`level`/`message`, and
    /// [`TemplateError::UnclosedPlaceholder`] for a `{` with no closing
    /// brace.
    pub fn parse(format: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = format;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or(TemplateError::UnclosedPlaceholder)?;
            let name = &after[..close];
            let placeholder =
                Placeholder::from_name(name).ok_or_else(|| TemplateError::UnknownPlaceholder {
                    name: name.to_string(),
                })?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Field(placeholder));
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Renders a record through the template.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field(Placeholder::Timestamp) => {
                    line.push_str(&record.formatted_timestamp());
                }
                Segment::Field(Placeholder::File) => line.push_str(record.file),
                Segment::Field(Placeholder::Line) => line.push_str(&record.line.to_string()),
                Segment::Field(Placeholder::Level) => line.push_str(record.level.as_str()),
                Segment::Field(Placeholder::Message) => line.push_str(&record.message),
            }
        }
        line
    }

    /// Matches a rendered line back against the template, returning the
    /// captured field values.
    ///
    /// Placeholder captures are non-greedy up to the next literal segment;
    /// returns `None` when the line does not fit the template.
    #[must_use]
    pub fn captures<'a>(&self, line: &'a str) -> Option<HashMap<Placeholder, &'a str>> {
        let mut fields = HashMap::new();
        let mut rest = line;
        let mut iter = self.segments.iter().peekable();

        while let Some(segment) = iter.next() {
            match segment {
                Segment::Literal(text) => {
                    rest = rest.strip_prefix(text.as_str())?;
                }
                Segment::Field(placeholder) => {
                    let end = match iter.peek() {
                        Some(Segment::Literal(next)) => rest.find(next.as_str())?,
                        Some(Segment::Field(_)) | None => rest.len(),
                    };
                    fields.insert(*placeholder, &rest[..end]);
                    rest = &rest[end..];
                }
            }
        }

        rest.is_empty().then_some(fields)
    }
}
