use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tracing::debug;
use winnow::{
    ModalResult, Parser,
    combinator::{opt, preceded, separated},
    token::take_till,
};

use crate::error::{Result, UncurlError};

/// Example url: "https://x.com/a?b=1&c=2=3"
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    pub base_url: String,                  // https://x.com/a
    pub params: IndexMap<String, String>, // ?b=1&c=2=3 --> {b: 1, c: 2=3}
}

/// One `key=value` piece. The key stops at the first `=`, the value runs to
/// the next `&` and keeps any further `=`.
fn parse_param<'a>(s: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    (
        take_till(0.., ['=', '&']),
        opt(preceded('=', take_till(0.., '&'))),
    )
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .parse_next(s)
}

fn parse_query_string<'a>(s: &mut &'a str) -> ModalResult<Vec<(&'a str, &'a str)>> {
    separated(1.., parse_param, '&').parse_next(s)
}

/// Percent-decode `url` and break it into the base url and its query params.
///
/// Only the text between the first and a possible second `?` is read as the
/// query string.
pub fn parse_url(url: &str) -> Result<ParsedUrl> {
    let unquoted = percent_decode_str(url).decode_utf8_lossy();
    let mut url_parts = unquoted.split('?');
    let base_url = url_parts.next().unwrap_or_default().to_string();

    let Some(query) = url_parts.next() else {
        debug!(%base_url, "url has no query string");
        return Ok(ParsedUrl {
            base_url,
            params: IndexMap::new(),
        });
    };

    let params: IndexMap<String, String> = parse_query_string
        .parse(query)
        .map_err(|e| UncurlError::Parse(format!("query string {query:?}: {e}")))?
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    debug!(%base_url, params = params.len(), "parsed url");
    Ok(ParsedUrl { base_url, params })
}
