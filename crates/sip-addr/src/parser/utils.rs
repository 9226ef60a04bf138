// Span helpers shared by the socket address and URI parsers

use nom::{
    bytes::complete::{take_till, take_until},
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, recognize},
    sequence::delimited,
};

use super::ParseResult;
use crate::error::{Error, Result};

// IPv6reference = "[" *( any but "]" ) "]"
// The content is validated afterwards by the address classifier.
pub(crate) fn ipv6_reference(input: &str) -> ParseResult<'_, &str> {
    delimited(char('['), take_until("]"), char(']'))(input)
}

/// Splits `input` at the first character contained in `delims`.
///
/// Returns the text before the delimiter and the text from the delimiter
/// onward, or `None` when no delimiter occurs.
pub fn split_once_any<'a>(input: &'a str, delims: &[char]) -> Option<(&'a str, &'a str)> {
    let result: ParseResult<&str> = take_till(|c: char| delims.contains(&c))(input);
    match result {
        Ok((tail, head)) if !tail.is_empty() => Some((head, tail)),
        _ => None,
    }
}

/// Locates the `]` closing a literal that opens `input`.
///
/// Returns the literal with both brackets and the text following it.
pub fn find_matching_bracket(input: &str) -> Option<(&str, &str)> {
    recognize(ipv6_reference)(input)
        .ok()
        .map(|(rest, literal)| (literal, rest))
}

/// Returns the interior of a token wrapped in `[` and `]`.
pub fn strip_brackets(token: &str) -> Option<&str> {
    token.strip_prefix('[')?.strip_suffix(']')
}

/// Parses a port made only of ASCII digits that fits in 16 bits.
pub fn parse_port(text: &str) -> Result<u16> {
    all_consuming(map_res(digit1, str::parse::<u16>))(text)
        .map(|(_, port)| port)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| Error::InvalidPort(text.to_string()))
}
