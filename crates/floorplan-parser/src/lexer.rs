//! Lexical analyzer for floorplan source text.
//!
//! The lexer converts source text into a stream of [`Token`]s for parsing.
//! It keeps whitespace and comments as trivia tokens so spans stay exact.
//!
//! The public entry point is [`tokenize`], which performs error-recovering
//! lexical analysis and collects all diagnostics in a single pass.

use winnow::{
    Parser as _,
    ascii::float,
    combinator::{alt, cut_err, not, opt, peek, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{literal, none_of, one_of, take_until, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Rich diagnostic information for lexer errors.
///
/// Attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

/// Returns true for characters that may continue an identifier or keyword.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parse an escape sequence in a string starting with backslash.
fn string_escape(input: &mut Input<'_>) -> IResult<char> {
    let escape_start = input.current_token_start();

    '\\'.parse_next(input)?;

    let escaped: IResult<char> = one_of(['"', '\\', 'n', 't'])
        .map(|c| match c {
            'n' => '\n',
            't' => '\t',
            other => other,
        })
        .parse_next(input);

    escaped.map_err(|_| {
        ErrMode::Cut(ContextError::new().add_context(
            input,
            &input.checkpoint(),
            LexerDiagnostic {
                code: ErrorCode::E003,
                message: "invalid escape sequence",
                help: Some("valid escapes: `\\\"`, `\\\\`, `\\n`, `\\t`"),
                start: escape_start,
            },
        ))
    })
}

/// Parse a double-quoted string literal.
///
/// Strings may not span lines.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let string_char = none_of(['"', '\\', '\n', '\r']);
    let string_content = repeat(0.., alt((string_escape, string_char))).fold(
        String::new,
        |mut acc, ch| {
            acc.push(ch);
            acc
        },
    );

    let start_pos = input.current_token_start();
    '"'.parse_next(input)?;

    // Committed after the opening quote
    cut_err(terminated(string_content, '"'))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated string literal",
            help: Some("add closing `\"` before the end of the line"),
            start: start_pos,
        })
        .parse_next(input)
        .map(Token::StringLiteral)
}

/// Parse a number such as `12`, `1.5` or `-2.25`.
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(float, peek(not(one_of(|c: char| is_word_char(c) && c != '-'))))
        .map(Token::Number)
        .parse_next(input)
}

/// Parse a line comment starting with `#`
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded('#', take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse a `/* ... */` block comment
fn block_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let start_pos = input.current_token_start();
    "/*".parse_next(input)?;

    cut_err(terminated(take_until(0.., "*/"), "*/"))
        .context(LexerDiagnostic {
            code: ErrorCode::E004,
            message: "unterminated block comment",
            help: Some("add closing `*/`"),
            start: start_pos,
        })
        .map(Token::BlockComment)
        .parse_next(input)
}

/// Parse keywords with word boundary checking
fn keyword<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        alt((
            // `floorplan` before its prefix `floor`
            literal("floorplan"),
            literal("floor"),
            literal("sub-room"),
            literal("room"),
            literal("at"),
            literal("size"),
            literal("walls"),
            literal("label"),
            literal("composed"),
            literal("of"),
            literal("connect"),
            literal("to"),
            literal("opens"),
            literal("into"),
            literal("swing"),
            literal("outside"),
        )),
        peek(not(one_of(is_word_char))),
    )
    .map(|keyword: &str| match keyword {
        "floorplan" => Token::Floorplan,
        "floor" => Token::Floor,
        "sub-room" => Token::SubRoom,
        "room" => Token::Room,
        "at" => Token::At,
        "size" => Token::Size,
        "walls" => Token::Walls,
        "label" => Token::Label,
        "composed" => Token::Composed,
        "of" => Token::Of,
        "connect" => Token::Connect,
        "to" => Token::To,
        "opens" => Token::Opens,
        "into" => Token::Into,
        "swing" => Token::Swing,
        "outside" => Token::Outside,
        _ => unreachable!(),
    })
    .parse_next(input)
}

/// Parse identifiers: a letter or `_`, then letters, digits, `_` or `-`
fn identifier<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., is_word_char),
    )
        .take()
        .map(Token::Identifier)
        .parse_next(input)
}

/// Parse single character tokens
fn single_char_token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        '{'.value(Token::LeftBrace),
        '}'.value(Token::RightBrace),
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
        ':'.value(Token::Colon),
        ','.value(Token::Comma),
        '.'.value(Token::Dot),
        '%'.value(Token::Percent),
    ))
    .parse_next(input)
}

/// Parse whitespace (spaces, tabs, etc. but not newlines)
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        line_comment,
        block_comment,
        string_literal,
        keyword,           // Must come before identifier
        identifier,        // Must come before number so `inf` stays a name
        number,
        single_char_token,
        newline,           // Must come before whitespace
        whitespace,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Tokenize the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            match positioned_token(&mut input) {
                Ok(token) => self.tokens.push(token),
                Err(e) => {
                    let error_pos = input.current_token_start();
                    let diagnostic = Self::convert_err_mode(e, error_pos);
                    let code = diagnostic.code();
                    self.diagnostics.emit(diagnostic);
                    Self::recover(&mut input, code);
                }
            }
        }
    }

    /// Skip past the offending input so lexing can resume.
    fn recover(input: &mut Input<'a>, code: Option<ErrorCode>) {
        match code {
            // Everything after an unclosed `/*` is comment text
            Some(ErrorCode::E004) => {
                let _ = input.next_slice(input.eof_offset());
            }
            // Drop the rest of the string so its closing quote does not open a new one
            Some(ErrorCode::E003) => {
                let _: IResult<_> =
                    (take_while(0.., |c: char| c != '"' && c != '\n'), opt('"')).parse_next(input);
            }
            _ => {
                if !input.is_empty() {
                    let _ = input.next_token();
                }
            }
        }
    }

    /// Finish lexing and return tokens or collected errors.
    fn finish(self) -> Result<Vec<PositionedToken<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E002 (unexpected character) when no lexer context is
    /// attached to the error.
    fn convert_err_mode(err: ErrMode<ContextError<LexerDiagnostic>>, error_pos: usize) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E002)
            .with_label(span, ErrorCode::E002.description())
    }
}

/// Tokenize source text, collecting every lexer error.
///
/// # Returns
///
/// - `Ok(tokens)` - All tokens, trivia included
/// - `Err(ParseError)` - One or more errors occurred; contains all diagnostics
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_single_token(input: &str, expected: Token<'_>) {
        let mut located_input = LocatingSlice::new(input);
        let result = positioned_token(&mut located_input);
        assert!(result.is_ok(), "Failed to parse: {input}");
        assert_eq!(result.unwrap().token, expected);
    }

    fn significant(input: &str) -> Vec<Token<'_>> {
        tokenize(input)
            .expect("Failed to tokenize input")
            .into_iter()
            .map(|t| t.token)
            .filter(|t| !t.is_trivia())
            .collect()
    }

    fn error_codes(input: &str) -> Vec<ErrorCode> {
        tokenize(input)
            .expect_err("Expected lexer to fail")
            .diagnostics()
            .iter()
            .filter_map(|d| d.code())
            .collect()
    }

    #[test]
    fn test_keywords() {
        test_single_token("floorplan", Token::Floorplan);
        test_single_token("floor", Token::Floor);
        test_single_token("room", Token::Room);
        test_single_token("sub-room", Token::SubRoom);
        test_single_token("at", Token::At);
        test_single_token("size", Token::Size);
        test_single_token("walls", Token::Walls);
        test_single_token("label", Token::Label);
        test_single_token("composed", Token::Composed);
        test_single_token("of", Token::Of);
        test_single_token("connect", Token::Connect);
        test_single_token("to", Token::To);
        test_single_token("opens", Token::Opens);
        test_single_token("into", Token::Into);
        test_single_token("swing", Token::Swing);
        test_single_token("outside", Token::Outside);
    }

    #[test]
    fn test_keyword_word_boundaries() {
        test_single_token("floors", Token::Identifier("floors"));
        test_single_token("floorplan2", Token::Identifier("floorplan2"));
        test_single_token("top", Token::Identifier("top"));
        test_single_token("room-1", Token::Identifier("room-1"));
        test_single_token("atrium", Token::Identifier("atrium"));
        test_single_token("outside_deck", Token::Identifier("outside_deck"));
    }

    #[test]
    fn test_identifiers() {
        test_single_token("Kitchen", Token::Identifier("Kitchen"));
        test_single_token("_hall", Token::Identifier("_hall"));
        test_single_token("double-door", Token::Identifier("double-door"));
        test_single_token("room2", Token::Identifier("room2"));
        test_single_token("x", Token::Identifier("x"));
        test_single_token("inf", Token::Identifier("inf"));
    }

    #[test]
    fn test_numbers() {
        test_single_token("10", Token::Number(10.0));
        test_single_token("1.5", Token::Number(1.5));
        test_single_token("12.25", Token::Number(12.25));
        test_single_token("-2", Token::Number(-2.0));
    }

    #[test]
    fn test_punctuation() {
        test_single_token("(", Token::LeftParen);
        test_single_token(")", Token::RightParen);
        test_single_token("{", Token::LeftBrace);
        test_single_token("}", Token::RightBrace);
        test_single_token("[", Token::LeftBracket);
        test_single_token("]", Token::RightBracket);
        test_single_token(":", Token::Colon);
        test_single_token(",", Token::Comma);
        test_single_token(".", Token::Dot);
        test_single_token("%", Token::Percent);
    }

    #[test]
    fn test_string_literals() {
        test_single_token(
            "\"Living room\"",
            Token::StringLiteral("Living room".to_string()),
        );
        test_single_token("\"\"", Token::StringLiteral(String::new()));
        test_single_token(
            r#""say \"hi\"\tnow\\""#,
            Token::StringLiteral("say \"hi\"\tnow\\".to_string()),
        );
        test_single_token(
            r#""two\nlines""#,
            Token::StringLiteral("two\nlines".to_string()),
        );
    }

    #[test]
    fn test_comments() {
        test_single_token("# a note", Token::LineComment(" a note"));
        test_single_token("/* block */", Token::BlockComment(" block "));
        test_single_token("/* multi\nline */", Token::BlockComment(" multi\nline "));
    }

    #[test]
    fn test_size_and_position_tokens() {
        assert_eq!(
            significant("at (1.5,2.75) size (10 x 12)"),
            vec![
                Token::At,
                Token::LeftParen,
                Token::Number(1.5),
                Token::Comma,
                Token::Number(2.75),
                Token::RightParen,
                Token::Size,
                Token::LeftParen,
                Token::Number(10.0),
                Token::Identifier("x"),
                Token::Number(12.0),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_connection_tokens() {
        assert_eq!(
            significant("connect RoomA.right to outside door at 50% swing: left"),
            vec![
                Token::Connect,
                Token::Identifier("RoomA"),
                Token::Dot,
                Token::Identifier("right"),
                Token::To,
                Token::Outside,
                Token::Identifier("door"),
                Token::At,
                Token::Number(50.0),
                Token::Percent,
                Token::Swing,
                Token::Colon,
                Token::Identifier("left"),
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("room Hall").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].span, Span::new(0..4));
        assert_eq!(tokens[1].span, Span::new(4..5));
        assert_eq!(tokens[2].span, Span::new(5..9));
    }

    #[test]
    fn test_error_code_e001_unterminated_string() {
        let err = tokenize("label \"Kitchen\nroom").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E001));
        // From the opening quote to the end of the line
        assert_eq!(diag.primary_span(), Some(Span::new(6..14)));
    }

    #[test]
    fn test_error_code_e002_unexpected_character() {
        assert_eq!(error_codes("room $ Hall"), vec![ErrorCode::E002]);
        assert_eq!(error_codes("a ; b @ c"), vec![ErrorCode::E002, ErrorCode::E002]);
    }

    #[test]
    fn test_error_code_e003_invalid_escape() {
        // The rest of the string is skipped, so no cascading E001
        assert_eq!(error_codes(r#"label "bad \q escape" room"#), vec![ErrorCode::E003]);
    }

    #[test]
    fn test_error_code_e004_unterminated_block_comment() {
        let err = tokenize("floorplan /* never closed\nfloor f1 {").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E004));
        assert_eq!(diag.primary_span().map(|s| s.start()), Some(10));
    }

    #[test]
    fn test_errors_with_valid_tokens_between() {
        assert_eq!(
            error_codes("room $ Hall \"open"),
            vec![ErrorCode::E002, ErrorCode::E001]
        );
    }
}
