//! Error types for path-data parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A character that cannot start any token
    #[error("invalid character {ch:?} at {span:?}")]
    InvalidCharacter { ch: char, span: Span },

    /// A number appeared while no command was active
    #[error("missing command before number at {span:?}")]
    MissingCommand { span: Span },

    /// A drawing or close command appeared before any move command, or the
    /// path data was empty (`command` is `None`)
    #[error("path must start with a move command at {span:?}")]
    MissingMove { command: Option<char>, span: Span },

    /// A number too large to represent as a finite value
    #[error("number out of range at {span:?}")]
    NumberOutOfRange { span: Span },

    /// A command letter outside M, L, H, V, C and Z (either case)
    #[error("unsupported path command '{command}' at {span:?}")]
    UnsupportedCommand { command: char, span: Span },

    /// The operand run of a command ended partway through a group
    #[error("command '{command}' takes {expected} operands per group, found {found}")]
    IncompleteOperands {
        command: char,
        expected: usize,
        found: usize,
        span: Span,
    },
}

impl PathError {
    pub fn span(&self) -> &Span {
        match self {
            PathError::InvalidCharacter { span, .. }
            | PathError::MissingCommand { span }
            | PathError::MissingMove { span, .. }
            | PathError::NumberOutOfRange { span }
            | PathError::UnsupportedCommand { span, .. }
            | PathError::IncompleteOperands { span, .. } => span,
        }
    }

    fn label(&self) -> String {
        match self {
            PathError::InvalidCharacter { ch, .. } => format!("{:?} is not valid here", ch),
            PathError::MissingCommand { .. } => "number without a preceding command".to_string(),
            PathError::MissingMove { command: None, .. } => "path data is empty".to_string(),
            PathError::MissingMove { .. } => "add an M or m command before this".to_string(),
            PathError::NumberOutOfRange { .. } => "not a finite number".to_string(),
            PathError::UnsupportedCommand { command, .. } => {
                format!("'{}' is not supported (use M, L, H, V, C or Z)", command)
            }
            PathError::IncompleteOperands {
                expected, found, ..
            } => format!("expected {} numbers here, found {}", expected, found),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| self.to_string()),
            Err(_) => self.to_string(),
        }
    }
}
