use crate::lexer::tokens::{Token, TokenKind};

/// An owned token sequence with a single forward-only read cursor.
///
/// The cursor starts at 0 and never passes `len()`; a read at `len()` is the
/// end-of-input condition.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    /// Moves past the current token and returns it, or `None` at the end.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.is_at_end() {
            return None;
        }

        self.cursor += 1;
        self.tokens.get(self.cursor - 1)
    }
}
