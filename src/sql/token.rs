use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenType {
    // Statement verbs
    Insert, Select,

    // Prepositions
    From, Into, Values,

    // Punctuation
    Wildcard, Terminator, OpenGroup, CloseGroup,

    // Anything the vocabulary does not know, identifiers and values included
    Unknown,
}

impl TokenType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Wildcard => "WILDCARD",
            Self::Terminator => "TERMINATOR",
            Self::OpenGroup => "OPEN_GROUP",
            Self::CloseGroup => "CLOSE_GROUP",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
        }
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.token_type, self.lexeme)
    }
}
