//! Token types produced by the [`lexer`](crate::lexer).

use std::fmt;

use crate::span::Span;

/// Tokens of the floorplan language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    // Keywords
    Floorplan,
    Floor,
    Room,
    SubRoom,
    At,
    Size,
    Walls,
    Label,
    Composed,
    Of,
    Connect,
    To,
    Opens,
    Into,
    Swing,
    Outside,

    // Literals
    StringLiteral(String),
    Number(f64),
    Identifier(&'src str),

    // Punctuation
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Colon,        // :
    Comma,        // ,
    Dot,          // .
    Percent,      // %

    // Trivia
    LineComment(&'src str),
    BlockComment(&'src str),
    Whitespace,
    Newline,
}

impl Token<'_> {
    /// Returns `true` for whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::Newline | Token::LineComment(_) | Token::BlockComment(_)
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Floorplan => write!(f, "floorplan"),
            Token::Floor => write!(f, "floor"),
            Token::Room => write!(f, "room"),
            Token::SubRoom => write!(f, "sub-room"),
            Token::At => write!(f, "at"),
            Token::Size => write!(f, "size"),
            Token::Walls => write!(f, "walls"),
            Token::Label => write!(f, "label"),
            Token::Composed => write!(f, "composed"),
            Token::Of => write!(f, "of"),
            Token::Connect => write!(f, "connect"),
            Token::To => write!(f, "to"),
            Token::Opens => write!(f, "opens"),
            Token::Into => write!(f, "into"),
            Token::Swing => write!(f, "swing"),
            Token::Outside => write!(f, "outside"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            Token::Number(n) => write!(f, "{n}"),
            Token::Identifier(id) => write!(f, "{id}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
            Token::Percent => write!(f, "%"),
            Token::LineComment(c) => write!(f, "#{c}"),
            Token::BlockComment(c) => write!(f, "/*{c}*/"),
            Token::Whitespace => write!(f, " "),
            Token::Newline => writeln!(f),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
