use std::{collections::HashMap, sync::LazyLock};

use super::token::{Token, TokenType};

static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    HashMap::from([
        ("insert", TokenType::Insert),
        ("select", TokenType::Select),
        ("from", TokenType::From),
        ("into", TokenType::Into),
        ("values", TokenType::Values),
        ("*", TokenType::Wildcard),
        (";", TokenType::Terminator),
        ("(", TokenType::OpenGroup),
        (")", TokenType::CloseGroup),
    ])
});

static LEXEMES: LazyLock<HashMap<TokenType, &'static str>> =
    LazyLock::new(|| KEYWORDS.iter().map(|(text, kind)| (*kind, *text)).collect());

/// Classifies `text`, falling back to `Unknown`. The returned token keeps `text` as typed.
pub fn lookup(text: &str) -> Token {
    let keyword = text.to_lowercase();
    let token_type = KEYWORDS
        .get(keyword.as_str())
        .copied()
        .unwrap_or(TokenType::Unknown);
    Token::new(token_type, text)
}

/// Canonical spelling of `token_type`; `Unknown` has none.
pub fn lexeme(token_type: TokenType) -> Option<&'static str> {
    LEXEMES.get(&token_type).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_but_keeps_text() {
        let token = lookup("SeLeCt");
        assert_eq!(token.token_type, TokenType::Select);
        assert_eq!(token.lexeme, "SeLeCt");
    }

    #[test]
    fn lookup_unknown() {
        let token = lookup("users");
        assert_eq!(token, Token::new(TokenType::Unknown, "users"));
        assert_eq!(lookup("").token_type, TokenType::Unknown);
    }

    #[test]
    fn punctuation() {
        assert_eq!(lookup("*").token_type, TokenType::Wildcard);
        assert_eq!(lookup(";").token_type, TokenType::Terminator);
        assert_eq!(lookup("(").token_type, TokenType::OpenGroup);
        assert_eq!(lookup(")").token_type, TokenType::CloseGroup);
        // glued punctuation is not split out
        assert_eq!(lookup("(a").token_type, TokenType::Unknown);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(lexeme(TokenType::Values), Some("values"));
        assert_eq!(lexeme(TokenType::CloseGroup), Some(")"));
        assert_eq!(lexeme(TokenType::Unknown), None);
    }

    #[test]
    fn tables_are_inverse() {
        assert_eq!(KEYWORDS.len(), 9);
        assert_eq!(LEXEMES.len(), KEYWORDS.len());
        for (text, kind) in KEYWORDS.iter() {
            assert_eq!(lexeme(*kind), Some(*text));
            assert_eq!(lookup(text).token_type, *kind);
        }
    }
}
