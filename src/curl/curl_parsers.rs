use indexmap::IndexMap;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag, take_till},
    character::complete::{anychar, char},
    combinator::{map, recognize, value},
    error::context,
    multi::fold_many0,
    sequence::{delimited, tuple},
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Result, UncurlError};

const CURL_CMD: &str = "curl";
const HEADER_FLAG: &str = "-H ";
pub const DATA_RAW_FLAG: &str = "--data-raw";

pub fn is_curl(input: &str) -> bool {
    input.trim_start().to_lowercase().starts_with(CURL_CMD)
}

/// Recognize a whole `-H '<key>: <value>'` fragment, quotes included.
pub fn header_fragment_parse(input: &str) -> IResult<&str, &str> {
    context(
        "Header fragment parse",
        recognize(tuple((tag("-H '"), is_not("'"), char('\'')))),
    )(input)
}

/// Parse `--data-raw '<body>'` and yield the body between the quotes.
pub fn data_raw_parse(input: &str) -> IResult<&str, &str> {
    context(
        "Data raw parse",
        delimited(tag("--data-raw '"), take_till(|c: char| c == '\''), char('\'')),
    )(input)
}

/// Run `parser` at every position of the input, left to right, and collect
/// the non-overlapping matches. A position where `parser` fails is skipped
/// by one char.
pub fn scan_parse<'a, O, F>(mut parser: F) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<O>>
where
    O: Clone,
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    move |input: &'a str| {
        fold_many0(
            alt((map(&mut parser, Some), value(None, anychar))),
            Vec::new,
            |mut acc: Vec<O>, found| {
                acc.extend(found);
                acc
            },
        )(input)
    }
}

macro_rules! scan_command {
    ($name:ident, $inner_func:ident) => {
        pub fn $name(input: &str) -> Result<Vec<&str>> {
            scan_parse($inner_func)(input)
                .map(|(_rest, found)| found)
                .map_err(|e| UncurlError::Parse(format!("{}: {}", stringify!($name), e)))
        }
    };
}

scan_command!(header_fragments_scan, header_fragment_parse);
scan_command!(data_raw_scan, data_raw_parse);

/// Turn one `-H '<key>: <value>'` fragment into its key and value.
///
/// Only the text between the first `-H ` and a possible next one is read.
/// Quotes are dropped, then the text is split on the first `: `. Later `: `
/// stay in the value; with no `: ` at all the value is empty.
pub fn extract_header(input: &str) -> Result<(String, String)> {
    let header = input
        .split(HEADER_FLAG)
        .nth(1)
        .ok_or_else(|| UncurlError::MissingHeaderFlag(input.into()))?
        .replace('\'', "");

    let (key, value) = header.split_once(": ").unwrap_or((header.as_str(), ""));
    trace!(key, value, "extracted header");
    Ok((key.into(), value.into()))
}

/// Collect every `-H '...'` header of a curl command. A repeated key keeps
/// its first position and takes the last value.
pub fn extract_headers(input: &str) -> Result<IndexMap<String, String>> {
    let mut headers = IndexMap::new();
    for fragment in header_fragments_scan(input)? {
        let (key, value) = extract_header(fragment)?;
        headers.insert(key, value);
    }
    debug!(headers = headers.len(), "extracted headers");
    Ok(headers)
}

/// Parse the first `--data-raw '...'` body of a curl command as JSON.
/// `None` when the command carries no single-quoted raw body.
pub fn parse_data(input: &str) -> Result<Option<Value>> {
    let Some(body) = data_raw_scan(input)?.into_iter().next() else {
        debug!("no --data-raw body found");
        return Ok(None);
    };

    let data = serde_json::from_str(body)?;
    debug!(bytes = body.len(), "parsed --data-raw body");
    Ok(Some(data))
}
