//! Parser for floorplan source tokens.
//!
//! This module transforms a token stream from the [`lexer`](crate::lexer) into
//! a parsed AST defined in [`parser_types`](crate::parser_types). The public
//! entry point is [`build_floorplan`].

use winnow::{
    Parser,
    combinator::{alt, opt, preceded, repeat},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use floorplan_core::semantic::RoomKind;

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
    span::{Span, Spanned},
    tokens::{PositionedToken, Token},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
    /// Remaining token count (`eof_offset()`) at error start position
    ///
    /// Used to calculate start_offset as: `tokens.len() - start_offset_value`
    StartOffset(usize),
}

type Input<'src> = FloorplanTokenSlice<'src>;
type Error = ErrMode<ContextError<Context>>;
type IResult<O> = std::result::Result<O, Error>;
/// Type alias for winnow TokenSlice with our positioned tokens
type FloorplanTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

/// Run `f` committed: any failure becomes a Cut error that remembers where
/// the committed construct started.
fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    let start_remaining = input.eof_offset();

    match f(input) {
        Ok(o) => Ok(o),
        Err(ErrMode::Backtrack(mut e)) | Err(ErrMode::Cut(mut e)) => {
            e.push(Context::StartOffset(start_remaining));
            Err(ErrMode::Cut(e))
        }
        Err(e) => Err(e),
    }
}

/// Helper to create a Cut error with StartOffset context
fn cut_error_with_offset(input: &Input<'_>, label: &'static str) -> Error {
    let mut e = ContextError::new();
    e.push(Context::Label(label));
    e.push(Context::StartOffset(input.eof_offset()));
    ErrMode::Cut(e)
}

/// Match exactly one `expected` token and return its span.
fn token<'src>(
    expected: Token<'static>,
    label: &'static str,
) -> impl Parser<Input<'src>, Span, Error> {
    any.verify_map(move |token: &PositionedToken<'_>| {
        (token.token == expected).then_some(token.span)
    })
    .context(Context::Label(label))
}

/// Parse whitespace and comments
fn ws_comment(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| token.is_trivia())
        .void()
        .parse_next(input)
}

/// Parse zero or more whitespace/comments
fn ws_comments0(input: &mut Input<'_>) -> IResult<()> {
    repeat(0.., ws_comment).parse_next(input)
}

fn identifier<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Identifier(name) => Some(Spanned::new(name, token.span)),
        _ => None,
    })
    .context(Context::Label("identifier"))
    .parse_next(input)
}

fn number(input: &mut Input<'_>) -> IResult<Spanned<f64>> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::Number(value) => Some(Spanned::new(value, token.span)),
        _ => None,
    })
    .context(Context::Label("number"))
    .parse_next(input)
}

fn string_literal(input: &mut Input<'_>) -> IResult<Spanned<String>> {
    any.verify_map(|token: &PositionedToken<'_>| match &token.token {
        Token::StringLiteral(s) => Some(Spanned::new(s.clone(), token.span)),
        _ => None,
    })
    .context(Context::Label("string literal"))
    .parse_next(input)
}

fn room_kind(input: &mut Input<'_>) -> IResult<Spanned<RoomKind>> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::Room => Some(Spanned::new(RoomKind::Room, token.span)),
        Token::SubRoom => Some(Spanned::new(RoomKind::SubRoom, token.span)),
        _ => None,
    })
    .context(Context::Label("`room` or `sub-room`"))
    .parse_next(input)
}

/// Parse the `x` between width and height.
fn size_separator(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| matches!(token.token, Token::Identifier("x")))
        .void()
        .context(Context::Label("`x` between width and height"))
        .parse_next(input)
}

/// Parse `(x, y)`
fn position(input: &mut Input<'_>) -> IResult<(Spanned<f64>, Spanned<f64>)> {
    token(Token::LeftParen, "`(`").parse_next(input)?;
    ws_comments0.parse_next(input)?;
    let x = number.parse_next(input)?;
    ws_comments0.parse_next(input)?;
    token(Token::Comma, "`,` between coordinates").parse_next(input)?;
    ws_comments0.parse_next(input)?;
    let y = number.parse_next(input)?;
    ws_comments0.parse_next(input)?;
    token(Token::RightParen, "`)`").parse_next(input)?;
    Ok((x, y))
}

/// Parse `(W x H)`
fn dimensions(input: &mut Input<'_>) -> IResult<(Spanned<f64>, Spanned<f64>)> {
    token(Token::LeftParen, "`(`").parse_next(input)?;
    ws_comments0.parse_next(input)?;
    let width = number.parse_next(input)?;
    ws_comments0.parse_next(input)?;
    size_separator.parse_next(input)?;
    ws_comments0.parse_next(input)?;
    let height = number.parse_next(input)?;
    ws_comments0.parse_next(input)?;
    token(Token::RightParen, "`)`").parse_next(input)?;
    Ok((width, height))
}

/// Parse a single `direction: type` wall entry
fn wall_spec<'src>(input: &mut Input<'src>) -> IResult<types::WallSpec<'src>> {
    let direction = identifier
        .context(Context::Label("wall direction"))
        .parse_next(input)?;
    ws_comments0.parse_next(input)?;
    token(Token::Colon, "`:` after wall direction").parse_next(input)?;
    ws_comments0.parse_next(input)?;
    let wall_type = identifier
        .context(Context::Label("wall type"))
        .parse_next(input)?;

    Ok(types::WallSpec {
        direction,
        wall_type,
    })
}

/// Parse a bracketed wall list, allowing a trailing comma
///
/// Examples:
/// - `[]`
/// - `[top: solid, left: door]`
/// - `[top: solid, left: door,]`
fn walls<'src>(input: &mut Input<'src>) -> IResult<Vec<types::WallSpec<'src>>> {
    token(Token::LeftBracket, "`[` to open the wall list").parse_next(input)?;

    let mut walls = Vec::new();
    loop {
        ws_comments0.parse_next(input)?;
        if opt(token(Token::RightBracket, "`]`"))
            .parse_next(input)?
            .is_some()
        {
            return Ok(walls);
        }

        walls.push(wall_spec.parse_next(input)?);
        ws_comments0.parse_next(input)?;

        if opt(token(Token::Comma, "`,`")).parse_next(input)?.is_none() {
            token(Token::RightBracket, "`,` or `]` in wall list").parse_next(input)?;
            return Ok(walls);
        }
    }
}

/// Parse `label "text"`
fn room_label(input: &mut Input<'_>) -> IResult<Spanned<String>> {
    token(Token::Label, "`label`").parse_next(input)?;
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        string_literal
            .context(Context::Label("label text"))
            .parse_next(input)
    })
}

/// Parse `composed of [ room* ]`
fn composed_of<'src>(input: &mut Input<'src>) -> IResult<Vec<types::Room<'src>>> {
    token(Token::Composed, "`composed`").parse_next(input)?;
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        token(Token::Of, "`of` after `composed`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        token(Token::LeftBracket, "`[`").parse_next(input)?;
        let rooms = rooms.parse_next(input)?;
        ws_comments0.parse_next(input)?;
        token(Token::RightBracket, "`]` to close `composed of`").parse_next(input)?;
        Ok(rooms)
    })
}

/// Parse a room or sub-room declaration
///
/// ## Grammar:
///   `(room | sub-room) NAME at (X, Y) size (W x H) walls [...] [label "..."] [composed of [...]]`
///
/// The trailing `label` and `composed of` clauses are each optional and may
/// appear in either order.
fn room<'src>(input: &mut Input<'src>) -> IResult<types::Room<'src>> {
    let kind = room_kind.parse_next(input)?;

    // Committed after the room keyword
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        let name = identifier
            .context(Context::Label("room name"))
            .parse_next(input)?;

        ws_comments0.parse_next(input)?;
        token(Token::At, "`at`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        let (x, y) = position.parse_next(input)?;

        ws_comments0.parse_next(input)?;
        token(Token::Size, "`size`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        let (width, height) = dimensions.parse_next(input)?;

        ws_comments0.parse_next(input)?;
        token(Token::Walls, "`walls`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        let walls = walls.parse_next(input)?;

        let mut label = None;
        let mut sub_rooms = None;
        loop {
            let checkpoint = input.checkpoint();
            ws_comments0.parse_next(input)?;

            if label.is_none() {
                if let Some(text) = opt(room_label).parse_next(input)? {
                    label = Some(text);
                    continue;
                }
            }
            if sub_rooms.is_none() {
                if let Some(rooms) = opt(composed_of).parse_next(input)? {
                    sub_rooms = Some(rooms);
                    continue;
                }
            }

            input.reset(&checkpoint);
            break;
        }

        Ok(types::Room {
            kind,
            name,
            x,
            y,
            width,
            height,
            walls,
            label,
            sub_rooms: sub_rooms.unwrap_or_default(),
        })
    })
}

/// Parse zero or more rooms, each preceded by optional trivia
fn rooms<'src>(input: &mut Input<'src>) -> IResult<Vec<types::Room<'src>>> {
    repeat(0.., preceded(ws_comments0, room)).parse_next(input)
}

/// Parse `floor ID { room* }`
fn floor<'src>(input: &mut Input<'src>) -> IResult<types::Floor<'src>> {
    token(Token::Floor, "`floor`").parse_next(input)?;

    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        let id = identifier
            .context(Context::Label("floor identifier"))
            .parse_next(input)?;
        ws_comments0.parse_next(input)?;
        token(Token::LeftBrace, "`{` to open the floor").parse_next(input)?;

        let rooms = rooms.parse_next(input)?;

        ws_comments0.parse_next(input)?;
        token(Token::RightBrace, "`}` to close the floor").parse_next(input)?;

        Ok(types::Floor { id, rooms })
    })
}

/// Parse `outside`, `Room` or `Room.wall`
fn endpoint<'src>(input: &mut Input<'src>) -> IResult<types::Endpoint<'src>> {
    alt((
        token(Token::Outside, "`outside`").map(types::Endpoint::Outside),
        (
            identifier,
            opt(preceded(
                token(Token::Dot, "`.`"),
                identifier.context(Context::Label("wall direction after `.`")),
            )),
        )
            .map(|(name, wall)| types::Endpoint::Room { name, wall }),
    ))
    .context(Context::Label("room name or `outside`"))
    .parse_next(input)
}

/// Parse `at N%`
fn door_position(input: &mut Input<'_>) -> IResult<Spanned<f64>> {
    token(Token::At, "`at`").parse_next(input)?;
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        let value = number
            .context(Context::Label("door position"))
            .parse_next(input)?;
        ws_comments0.parse_next(input)?;
        token(Token::Percent, "`%` after door position").parse_next(input)?;
        Ok(value)
    })
}

/// Parse `opens into ROOM`
fn opens_into<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    token(Token::Opens, "`opens`").parse_next(input)?;
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        token(Token::Into, "`into` after `opens`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        identifier
            .context(Context::Label("room name"))
            .parse_next(input)
    })
}

/// Parse `swing: VALUE`
fn swing<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    token(Token::Swing, "`swing`").parse_next(input)?;
    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        token(Token::Colon, "`:` after `swing`").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        identifier
            .context(Context::Label("swing direction"))
            .parse_next(input)
    })
}

/// Parse a connection statement
///
/// Syntax: `connect FROM to TO DOOR_TYPE [at N%] [opens into ROOM] [swing: SIDE]`
///
/// Examples:
/// - `connect Hall to Kitchen door`
/// - `connect RoomA.right to RoomB.left door at 50% opens into RoomA swing: left`
/// - `connect Hall.bottom to outside double-door`
fn connection<'src>(input: &mut Input<'src>) -> IResult<types::Connection<'src>> {
    token(Token::Connect, "`connect`").parse_next(input)?;

    cut_err(input, |input| {
        ws_comments0.parse_next(input)?;
        let from = endpoint.parse_next(input)?;
        ws_comments0.parse_next(input)?;
        token(Token::To, "`to` between endpoints").parse_next(input)?;
        ws_comments0.parse_next(input)?;
        let to = endpoint.parse_next(input)?;
        ws_comments0.parse_next(input)?;
        let door_type = identifier
            .context(Context::Label("door type"))
            .parse_next(input)?;

        let position = opt(preceded(ws_comments0, door_position)).parse_next(input)?;
        let opens_into = opt(preceded(ws_comments0, opens_into)).parse_next(input)?;
        let swing = opt(preceded(ws_comments0, swing)).parse_next(input)?;

        Ok(types::Connection {
            from,
            to,
            door_type,
            position,
            opens_into,
            swing,
        })
    })
}

/// Parse a complete document
fn floorplan<'src>(input: &mut Input<'src>) -> IResult<types::Floorplan<'src>> {
    ws_comments0.parse_next(input)?;
    token(Token::Floorplan, "`floorplan`").parse_next(input)?;

    let floors = repeat(0.., preceded(ws_comments0, floor)).parse_next(input)?;
    let connections = repeat(0.., preceded(ws_comments0, connection)).parse_next(input)?;
    ws_comments0.parse_next(input)?;

    if !input.is_empty() {
        return Err(cut_error_with_offset(input, "`floor` or `connect`"));
    }

    Ok(types::Floorplan {
        floors,
        connections,
    })
}

/// Span covering the first and last significant tokens of `tokens`.
fn significant_span(tokens: &[PositionedToken<'_>]) -> Span {
    let mut significant = tokens
        .iter()
        .filter(|t| !matches!(t.token, Token::Whitespace | Token::Newline));
    match (significant.next(), significant.next_back()) {
        (Some(first), Some(last)) => first.span.union(last.span),
        (Some(only), None) => only.span,
        _ => tokens
            .first()
            .map(|t| t.span)
            .unwrap_or_default(),
    }
}

/// Convert winnow errors to a [`Diagnostic`]
///
/// Extracts position information from error context (StartOffset) and calculates
/// precise error spans using the token array.
fn convert_error(error: Error, tokens: &[PositionedToken<'_>], current_remaining: usize) -> Diagnostic {
    // Extract start offset from error context if available
    let start_remaining = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().find_map(|ctx| match ctx {
            Context::StartOffset(n) => Some(*n),
            _ => None,
        }),
        _ => None,
    };

    // Calculate offsets from remaining token counts
    let end_offset = tokens.len() - current_remaining;
    let start_offset = start_remaining.map(|r| tokens.len() - r).unwrap_or(0);

    match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
            let contexts: Vec<String> = e
                .context()
                .filter_map(|ctx| match ctx {
                    Context::Label(label) => Some(format!("expected {label}")),
                    _ => None,
                })
                .collect();

            let message = if contexts.is_empty() {
                "unexpected token or end of input".to_string()
            } else {
                contexts.join(" → ")
            };

            let error_span = if end_offset < tokens.len() {
                if start_offset < end_offset
                    && matches!(
                        tokens[end_offset].token,
                        Token::RightBrace | Token::RightBracket
                    )
                {
                    // Hit a closing delimiter early: blame the construct before it
                    significant_span(&tokens[start_offset..end_offset])
                } else {
                    tokens[end_offset].span
                }
            } else {
                // EOF: point at the last significant token
                tokens
                    .iter()
                    .rev()
                    .find(|t| !matches!(t.token, Token::Whitespace | Token::Newline))
                    .map(|t| t.span)
                    .unwrap_or_default()
            };

            Diagnostic::error(format!("unexpected token: {message}"))
                .with_code(ErrorCode::E100)
                .with_label(error_span, "unexpected token")
                .with_help("check syntax and token positioning")
        }
        ErrMode::Incomplete(_) => {
            // Input is never streamed, so this is not expected.
            let error_span = tokens
                .get(end_offset)
                .map(|t| t.span)
                .unwrap_or_else(|| significant_span(tokens));

            Diagnostic::error("incomplete input, more tokens expected")
                .with_code(ErrorCode::E101)
                .with_label(error_span, "incomplete")
                .with_help("ensure input is complete")
        }
    }
}

/// Build the spanned AST of a document from its tokens
pub fn build_floorplan<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<types::Floorplan<'src>, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match floorplan.parse_next(&mut token_slice) {
        Ok(floorplan) => Ok(floorplan),
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining))
        }
    }
}
