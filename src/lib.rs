//! Front end of a small SQL-like command interpreter.
//!
//! A line is split into [`Token`]s by [`tokenize`] and then checked by [`validate`]
//! against the two supported statements:
//!
//! ```text
//! SELECT <fields> FROM <table>
//! INSERT INTO <table> [ ( <columns> ) ] VALUES ( <values> )
//! ```
//!
//! Tokens are whitespace delimited, so groups are written `( a , b )`.

pub mod sql;
pub mod table;

pub use sql::{
    consume_group, tokenize, validate, GroupError, StatementKind, Token, TokenType,
    ValidationError,
};
