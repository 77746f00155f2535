use winnow::ascii::digit1;
use winnow::combinator::{alt, eof, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{rest, take_until, take_while};

// -- Whitespace & identifiers -----------------------------------------------

/// Whitespace inside a condition: space, `\t`, `\n`, vertical tab, form feed,
/// `\r`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Line terminators that may not appear inside a quoted literal.
const LINE_BREAKS: [char; 5] = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., is_space)
        .void()
        .parse_next(input)
}

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

// -- Connective splitting ---------------------------------------------------

/// Splits around the first `separator` and returns the text before it and the
/// text up to the next `separator` (or the end). Anything after a second
/// separator is left unconsumed and never looked at.
fn segments<'i>(input: &mut &'i str, separator: &str) -> ModalResult<(&'i str, &'i str)> {
    (
        take_until(0.., separator),
        separator,
        alt((take_until(0.., separator), rest)),
    )
        .map(|(first, _, second)| (first, second))
        .parse_next(input)
}

pub(crate) fn split_on<'i>(text: &'i str, separator: &str) -> Option<(&'i str, &'i str)> {
    let mut input = text;
    segments(&mut input, separator).ok()
}

// -- Conditions -------------------------------------------------------------

fn comparator<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((">=", ">", "<=", "<", "=")).parse_next(input)
}

fn quoted_text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(
        '\'',
        rest.verify_map(|s: &'i str| {
            s.strip_suffix('\'')
                .filter(|inner| !inner.is_empty() && !inner.contains(LINE_BREAKS))
        }),
    )
    .parse_next(input)
}

/// `identifier (>|<|>=|<=|=) digits`
fn integer_condition(input: &mut &str) -> ModalResult<()> {
    (ident, ws, comparator, ws, digit1, eof)
        .void()
        .parse_next(input)
}

/// `identifier = 'text'`
fn text_condition(input: &mut &str) -> ModalResult<()> {
    (ident, ws, '=', ws, quoted_text, eof)
        .void()
        .parse_next(input)
}

pub(crate) fn condition(input: &mut &str) -> ModalResult<()> {
    alt((integer_condition, text_condition)).parse_next(input)
}
