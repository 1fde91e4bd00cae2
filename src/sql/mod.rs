pub mod error;
pub mod keywords;
pub mod parser;
pub mod scanner;
pub mod token;

pub use error::{GroupError, StatementKind, ValidationError};
pub use parser::{consume_group, validate};
pub use scanner::tokenize;
pub use token::{Token, TokenType};
