use crate::parser::Rule;
use pest::error::{Error as PestError, LineColLocation};
use std::fmt;

/// What went wrong; every kind is fatal for the run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    Lex,
    UnknownMnemonic,
    Operand,
    DuplicateLabel,
    UndefinedLabel,
    Displacement,
    Io,
}

/// One reported error with its 1-based source line. The driver renders
/// diagnostics as `<file>:<line>: Error: <message>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    message: String,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind, message: String) -> Diagnostic {
        Diagnostic {
            line,
            kind,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&self, path: &str) -> String {
        format!("{}:{}: Error: {}", path, self.line, self.message)
    }

    pub fn lex(line: usize, text: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Lex,
            format!("invalid token '{}'", text.trim()),
        )
    }

    pub fn from_pest(err: &PestError<Rule>) -> Diagnostic {
        let line = match err.line_col {
            LineColLocation::Pos((line, _)) => line,
            LineColLocation::Span((line, _), _) => line,
        };
        Diagnostic::new(line, DiagnosticKind::Lex, "invalid token".to_owned())
    }

    pub fn unknown_mnemonic(line: usize, name: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::UnknownMnemonic,
            format!("unknown mnemonic '{}'", name),
        )
    }

    pub fn operand(line: usize, mnemonic: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Operand,
            format!("invalid operand for '{}'", mnemonic),
        )
    }

    pub fn invalid_number(line: usize, text: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Operand,
            format!("invalid number '{}'", text),
        )
    }

    pub fn immediate_range(line: usize, mnemonic: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Operand,
            format!("immediate out of range for '{}'", mnemonic),
        )
    }

    pub fn duplicate_label(line: usize, name: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::DuplicateLabel,
            format!("duplicate label '{}'", name),
        )
    }

    pub fn undefined_label(line: usize, name: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::UndefinedLabel,
            format!("undefined label '{}'", name),
        )
    }

    pub fn branch_range(line: usize) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Displacement,
            "label too far, use register-based branch".to_owned(),
        )
    }

    pub fn label_range(line: usize, name: &str) -> Diagnostic {
        Diagnostic::new(
            line,
            DiagnosticKind::Displacement,
            format!("label '{}' out of immediate range", name),
        )
    }

    pub fn program_too_large(words: usize) -> Diagnostic {
        Diagnostic::new(
            0,
            DiagnosticKind::Operand,
            format!("program of {} words exceeds the address space", words),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: Error: {}", self.line, self.message)
    }
}
