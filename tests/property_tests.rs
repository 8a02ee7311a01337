use proptest::prelude::*;
use proptest::string::string_regex;
use recognizer::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::{parser::recognize, verdict::Verdict},
};

fn source_text() -> impl Strategy<Value = String> {
    string_regex("[a-z0-9(){}=!,;+*%\\- \t\n]{0,200}").unwrap()
}

fn token_kind() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

// Property: every lexeme is a non-empty, whitespace-free piece of the input
proptest! {
    #[test]
    fn prop_lexemes_are_substrings(source in source_text()) {
        for token in tokenize(&source) {
            prop_assert!(!token.lexeme.is_empty());
            prop_assert!(!token.lexeme.chars().any(|ch| ch.is_whitespace()));
            prop_assert!(source.contains(&token.lexeme));
        }
    }
}

// Property: re-tokenizing the space-joined lexemes gives the same tokens
proptest! {
    #[test]
    fn prop_tokenize_is_idempotent(source in source_text()) {
        let tokens = tokenize(&source);
        let joined = tokens
            .iter()
            .map(|token| token.lexeme.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(tokenize(&joined), tokens);
    }
}

// Property: both stages are deterministic
proptest! {
    #[test]
    fn prop_stages_are_deterministic(source in source_text()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
        prop_assert_eq!(recognize(tokenize(&source)), recognize(tokenize(&source)));
    }
}

// Property: any kind sequence yields one verdict, and failures stay in bounds
proptest! {
    #[test]
    fn prop_recognize_reports_in_bounds(kinds in prop::collection::vec(token_kind(), 0..64)) {
        let tokens = kinds
            .iter()
            .map(|kind| recognizer::lexer::tokens::Token::new(*kind, "x"))
            .collect::<Vec<_>>();
        let total = tokens.len();

        if let Verdict::Rejected(error) = recognize(tokens) {
            if let Some(position) = error.get_position() {
                prop_assert!(position <= total);
            }
        }
    }
}

// Property: reserved words and two-character operators always win
proptest! {
    #[test]
    fn prop_priority_classification(pad in "[ \t\n]{1,3}") {
        let tokens = tokenize(&format!("while{pad}=={pad}!={pad}return"));

        prop_assert_eq!(tokens.len(), 4);
        prop_assert_eq!(tokens[0].kind, TokenKind::While);
        prop_assert_eq!(tokens[1].kind, TokenKind::BinOp);
        prop_assert_eq!(tokens[2].kind, TokenKind::BinOp);
        prop_assert_eq!(tokens[3].kind, TokenKind::Return);
    }
}
