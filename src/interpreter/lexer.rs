use std::fmt;

use logos::Logos;
use tracing::warn;

use crate::{ast::Position, config::ScanPolicy, error::ParseError};

/// Represents a lexical token in the source input.
///
/// Identifiers and numbers carry their payload; every other token is fully
/// described by its variant.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// End of input. The generated lexer never yields it; [`Scanner`] returns
    /// it once the source is exhausted.
    Eof,
    /// Identifier tokens, such as `x` or `add_2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `return`
    #[token("return")]
    Return,
    /// `fn`
    #[token("fn")]
    Fn,
    /// Newlines only advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Describes the token for diagnostics, including the lexeme of
    /// identifiers and numbers.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Number(value) => format!("number {value}"),
            other => format!("'{other}'"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "<end of file>",
            Self::Identifier(_) => "identifier",
            Self::Number(_) => "number",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Return => "return",
            Self::Fn => "fn",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so tokens can be given a
/// line/column position.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Accumulates a digit run into an `i64`, wrapping on overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> i64 {
    lex.slice().bytes().fold(0i64, |value, digit| {
                           value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
                       })
}

fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Hands out tokens one at a time, with their source position.
///
/// Once the input is exhausted every call returns [`Token::Eof`]. Stray
/// characters are handled according to the [`ScanPolicy`]; a `!` that does not
/// start `!=` is always fatal.
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, Token>,
    policy:   ScanPolicy,
    warnings: Vec<ParseError>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str, policy: ScanPolicy) -> Self {
        Self { lexer: Token::lexer_with_extras(source,
                                               LexerExtras { line:       1,
                                                             line_start: 0, }),
               policy,
               warnings: Vec::new() }
    }

    /// Scans the next token.
    ///
    /// # Errors
    /// - `ExpectedEquals` for a `!` not followed by `=`.
    /// - `InvalidCharacter` for a stray character under
    ///   [`ScanPolicy::FailFast`].
    pub fn next_token(&mut self) -> Result<(Token, Position), ParseError> {
        loop {
            let Some(result) = self.lexer.next() else {
                return Ok((Token::Eof, self.end_position()));
            };
            let position = self.token_position();
            match result {
                Ok(token) => return Ok((token, position)),
                Err(()) => self.reject(position)?,
            }
        }
    }

    /// Consumes the scanner, returning the recorded warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<ParseError> {
        self.warnings
    }

    fn reject(&mut self, position: Position) -> Result<(), ParseError> {
        let slice = self.lexer.slice();
        if slice.starts_with('!') {
            return Err(ParseError::ExpectedEquals { position });
        }

        let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        let error = ParseError::InvalidCharacter { character, position };
        match self.policy {
            ScanPolicy::FailFast => Err(error),
            ScanPolicy::Recover => {
                warn!(%position, ?character, "skipping invalid input character");
                self.warnings.push(error);
                Ok(())
            },
        }
    }

    fn token_position(&self) -> Position {
        let extras = &self.lexer.extras;
        Position::new(extras.line, self.lexer.span().start - extras.line_start + 1)
    }

    fn end_position(&self) -> Position {
        let extras = &self.lexer.extras;
        Position::new(extras.line, self.lexer.source().len() - extras.line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str, policy: ScanPolicy) -> Result<Vec<(Token, Position)>, ParseError> {
        let mut scanner = Scanner::new(input, policy);
        let mut tokens = Vec::new();
        loop {
            let (token, position) = scanner.next_token()?;
            if token == Token::Eof {
                return Ok(tokens);
            }
            tokens.push((token, position));
        }
    }

    fn check_lex_one_token(input: &str, expected: Token) {
        let tokens = scan_all(input, ScanPolicy::FailFast).unwrap();
        assert_eq!(tokens, vec![(expected, Position::new(1, 1))], "input: {input:?}");
    }

    #[test]
    fn lex_keywords() {
        check_lex_one_token("if", Token::If);
        check_lex_one_token("else", Token::Else);
        check_lex_one_token("while", Token::While);
        check_lex_one_token("return", Token::Return);
        check_lex_one_token("fn", Token::Fn);
    }

    #[test]
    fn keywords_need_the_whole_identifier() {
        check_lex_one_token("iffy", Token::Identifier("iffy".to_string()));
        check_lex_one_token("returns", Token::Identifier("returns".to_string()));
        check_lex_one_token("fn_", Token::Identifier("fn_".to_string()));
        check_lex_one_token("_while2", Token::Identifier("_while2".to_string()));
    }

    #[test]
    fn lex_operators() {
        check_lex_one_token("+", Token::Plus);
        check_lex_one_token("-", Token::Minus);
        check_lex_one_token("*", Token::Star);
        check_lex_one_token("/", Token::Slash);
        check_lex_one_token("<", Token::Less);
        check_lex_one_token(">", Token::Greater);
        check_lex_one_token("==", Token::EqualEqual);
        check_lex_one_token("!=", Token::BangEqual);
        check_lex_one_token("=", Token::Equals);
        check_lex_one_token("(", Token::LParen);
        check_lex_one_token(")", Token::RParen);
        check_lex_one_token("{", Token::LBrace);
        check_lex_one_token("}", Token::RBrace);
        check_lex_one_token(";", Token::Semicolon);
        check_lex_one_token(",", Token::Comma);
    }

    #[test]
    fn lex_numbers() {
        check_lex_one_token("0", Token::Number(0));
        check_lex_one_token("42", Token::Number(42));
        check_lex_one_token("007", Token::Number(7));
    }

    #[test]
    fn number_literals_wrap_around() {
        check_lex_one_token("9223372036854775807", Token::Number(i64::MAX));
        check_lex_one_token("9223372036854775808", Token::Number(i64::MIN));
    }

    #[test]
    fn lex_token_sequence_with_positions() {
        let tokens = scan_all("x = 3;\n  y==x", ScanPolicy::FailFast).unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("x".to_string()), Position::new(1, 1)),
                        (Token::Equals, Position::new(1, 3)),
                        (Token::Number(3), Position::new(1, 5)),
                        (Token::Semicolon, Position::new(1, 6)),
                        (Token::Identifier("y".to_string()), Position::new(2, 3)),
                        (Token::EqualEqual, Position::new(2, 4)),
                        (Token::Identifier("x".to_string()), Position::new(2, 6)),]);
    }

    #[test]
    fn eof_is_returned_repeatedly() {
        let mut scanner = Scanner::new("a\n", ScanPolicy::FailFast);
        assert!(matches!(scanner.next_token().unwrap().0, Token::Identifier(_)));
        assert_eq!(scanner.next_token().unwrap(), (Token::Eof, Position::new(2, 1)));
        assert_eq!(scanner.next_token().unwrap(), (Token::Eof, Position::new(2, 1)));
    }

    #[test]
    fn stray_characters_are_skipped_when_recovering() {
        let mut scanner = Scanner::new("1 @ 2", ScanPolicy::Recover);
        assert_eq!(scanner.next_token().unwrap().0, Token::Number(1));
        assert_eq!(scanner.next_token().unwrap().0, Token::Number(2));
        assert_eq!(scanner.next_token().unwrap().0, Token::Eof);
        assert_eq!(scanner.into_warnings(),
                   [ParseError::InvalidCharacter { character: '@',
                                                    position:  Position::new(1, 3), }]);
    }

    #[test]
    fn stray_characters_are_fatal_when_failing_fast() {
        let error = scan_all("1 @ 2", ScanPolicy::FailFast).unwrap_err();
        assert_eq!(error,
                   ParseError::InvalidCharacter { character: '@',
                                                  position:  Position::new(1, 3), });
    }

    #[test]
    fn lone_bang_is_always_fatal() {
        for policy in [ScanPolicy::Recover, ScanPolicy::FailFast] {
            let error = scan_all("a ! b", policy).unwrap_err();
            assert_eq!(error,
                       ParseError::ExpectedEquals { position: Position::new(1, 3) });
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Token::Eof.to_string(), "<end of file>");
        assert_eq!(Token::Identifier("x".to_string()).to_string(), "identifier");
        assert_eq!(Token::Number(1).to_string(), "number");
        assert_eq!(Token::BangEqual.to_string(), "!=");
        assert_eq!(Token::Identifier("x".to_string()).describe(), "identifier 'x'");
        assert_eq!(Token::Semicolon.describe(), "';'");
    }
}
