use std::fmt;

use thiserror::Error;

use super::token::TokenType;

/// The statement grammar a token sequence was being checked against.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatementKind {
    Select,
    Insert,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => f.write_str("SELECT"),
            Self::Insert => f.write_str("INSERT"),
        }
    }
}

/// Structural defects of a parenthesised group.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GroupError {
    #[error("missing \"(\" at start of group")]
    MissingOpenGroup,
    #[error("empty group")]
    EmptyGroup,
    #[error("missing \")\" at end of group")]
    MissingCloseGroup,
}

/// The first grammatical defect found in a token sequence.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Unsupported statement: {kind} (`{lexeme}`)")]
    UnsupportedStatement { kind: TokenType, lexeme: String },

    #[error("Malformed SELECT statement: {0}")]
    MalformedSelect(&'static str),

    #[error("Malformed INSERT statement: {0}")]
    MalformedInsert(&'static str),

    #[error("Malformed {statement} statement: {source}")]
    Group {
        statement: StatementKind,
        source: GroupError,
    },
}

impl ValidationError {
    /// The group defect behind this error, if any.
    pub fn group_error(&self) -> Option<GroupError> {
        match self {
            Self::Group { source, .. } => Some(*source),
            _ => None,
        }
    }
}
