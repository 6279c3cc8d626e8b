pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // every character is matched by `Symbol` at worst, so the lexer cannot fail
        let Ok(kind) = result else {
            continue;
        };

        if kind.is_whitespace() {
            continue;
        }

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_equation() {
        compare_tokens(
            "2x + 3 = 7",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Unknown, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "7"),
            ],
        );
    }

    #[test]
    fn parenthesized_with_dot() {
        compare_tokens(
            "12.(X-4)/3",
            [
                (TokenKind::Int, "12"),
                (TokenKind::Dot, "."),
                (TokenKind::OpenParen, "("),
                (TokenKind::Unknown, "X"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "4"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Div, "/"),
                (TokenKind::Int, "3"),
            ],
        );
    }

    #[test]
    fn unknown_symbols() {
        compare_tokens(
            "y$x",
            [
                (TokenKind::Symbol, "y"),
                (TokenKind::Symbol, "$"),
                (TokenKind::Unknown, "x"),
            ],
        );
    }

    #[test]
    fn complete_skips_whitespace() {
        let tokens = tokenize_complete(" 4 x\t= 1 ");
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Unknown, TokenKind::Assign, TokenKind::Int]);
        assert_eq!(tokens[1].span, 3..4);
    }
}
