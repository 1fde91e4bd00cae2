use super::{keywords, token::Token};

/// Splits a line into whitespace-delimited words and classifies each one.
///
/// There is no quoting and no punctuation splitting: `users(a,b)` is a single
/// word, so groups have to be written as `( a , b )`.
pub struct Scanner {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Self {
        Scanner {
            source: source.into(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        if c.is_whitespace() {
            return;
        }
        while !self.is_at_end() && !self.peek().is_whitespace() {
            self.advance();
        }
        self.add_token();
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    // Offsets are byte positions, so step by the width of the char.
    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn add_token(&mut self) {
        let text = &self.source[self.start..self.current];
        self.tokens.push(keywords::lookup(text));
    }
}

pub fn tokenize(line: &str) -> Vec<Token> {
    Scanner::new(line).scan_tokens()
}
