use super::error::{GroupError, StatementKind, ValidationError};
use super::token::{Token, TokenType};

/// Checks that `tokens` form a supported statement, reporting the first defect.
///
/// An empty sequence has nothing to check and is accepted.
pub fn validate(tokens: &[Token]) -> Result<(), ValidationError> {
    Parser::new(tokens).validate()
}

/// Consumes one `( ... )` group from the front of `tokens` and returns what follows it.
///
/// The group ends at the first `)`, so a nested `(` is just another element. Elements
/// are not checked beyond there being at least one.
pub fn consume_group(tokens: &[Token]) -> Result<&[Token], GroupError> {
    let rest = match tokens.split_first() {
        Some((open, rest)) if open.is(TokenType::OpenGroup) => rest,
        _ => return Err(GroupError::MissingOpenGroup),
    };

    let close = rest.iter().position(|t| t.is(TokenType::CloseGroup));
    let interior = &rest[..close.unwrap_or(rest.len())];
    if interior.is_empty() {
        return Err(GroupError::EmptyGroup);
    }

    match close {
        Some(close) => Ok(&rest[close + 1..]),
        None => Err(GroupError::MissingCloseGroup),
    }
}

/// Cursor over a borrowed token sequence. Validation never mutates the caller's tokens.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, current: 0 }
    }

    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let Some(first) = self.peek() else {
            return Ok(());
        };
        match first.token_type {
            TokenType::Select => self.select_stmt(),
            TokenType::Insert => self.insert_stmt(),
            kind => Err(ValidationError::UnsupportedStatement {
                kind,
                lexeme: first.lexeme.clone(),
            }),
        }
    }

    // SELECT select_list FROM table_name
    //
    // select_list is either "*" or any run of tokens up to FROM.
    fn select_stmt(&mut self) -> Result<(), ValidationError> {
        if !self.matches(TokenType::Select) {
            return Err(ValidationError::MalformedSelect("does not start with SELECT"));
        }

        loop {
            if self.check(TokenType::From) {
                break;
            }
            let Some(item) = self.advance() else {
                return Err(ValidationError::MalformedSelect(
                    "reached end of tokens prematurely",
                ));
            };
            if item.is(TokenType::Wildcard) {
                break;
            }
        }

        // FROM plus at least one token naming the table
        if self.remaining().len() < 2 {
            return Err(ValidationError::MalformedSelect(
                "not enough tokens for FROM clause",
            ));
        }
        Ok(())
    }

    // INSERT INTO table_name [( a, b, ... )] VALUES ( x, y, ... )
    fn insert_stmt(&mut self) -> Result<(), ValidationError> {
        if !self.matches(TokenType::Insert) || !self.matches(TokenType::Into) {
            return Err(ValidationError::MalformedInsert(
                "does not start with INSERT INTO",
            ));
        }

        if self.advance().is_none() {
            return Err(ValidationError::MalformedInsert("missing table name"));
        }

        if !self.is_at_end() && !self.check(TokenType::Values) {
            self.group(StatementKind::Insert)?;
        }

        if !self.matches(TokenType::Values) {
            return Err(ValidationError::MalformedInsert("missing VALUES keyword"));
        }

        self.group(StatementKind::Insert)
    }

    fn group(&mut self, statement: StatementKind) -> Result<(), ValidationError> {
        let rest = consume_group(self.remaining())
            .map_err(|source| ValidationError::Group { statement, source })?;
        self.current = self.tokens.len() - rest.len();
        Ok(())
    }

    fn matches(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.current += 1;
            return true;
        }
        false
    }

    fn check(&self, token_type: TokenType) -> bool {
        self.peek().is_some_and(|t| t.is(token_type))
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.current..]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
