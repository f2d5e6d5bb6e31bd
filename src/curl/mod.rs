pub mod curl_parsers;
pub mod parser;

use indexmap::IndexMap;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Result, UncurlError},
    url::parser::{ParsedUrl, parse_url},
};
use curl_parsers::{DATA_RAW_FLAG, extract_headers, parse_data};
use parser::url_argument;

pub use curl_parsers::{extract_header, is_curl};

/// A "Copy as cURL" command broken down into the parts needed to replay it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uncurled {
    pub base_url: String,
    pub params: IndexMap<String, String>,
    pub headers: IndexMap<String, String>,
    /// Present only when the command mentions `--data-raw`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Uncurled {
    pub fn new(url: ParsedUrl, headers: IndexMap<String, String>) -> Self {
        Self {
            base_url: url.base_url,
            params: url.params,
            headers,
            data: None,
        }
    }

    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.data = Some(data);
        self
    }

    /// `POST` when the command carried a body, `GET` otherwise.
    pub fn method(&self) -> Method {
        match self.data {
            Some(_) => Method::POST,
            None => Method::GET,
        }
    }
}

/// Break a curl command as copied from the browser dev tools into base url,
/// query params, headers and (when `--data-raw` shows up) the JSON body.
///
/// The url is the second space-delimited token of the command. A url with
/// spaces in it, or a flag placed before the url, yields a wrong `base_url`
/// rather than an error.
pub fn uncurl(input: &str) -> Result<Uncurled> {
    let url = url_argument(input).ok_or_else(|| UncurlError::MissingUrl(input.into()))?;

    let mut uncurled = Uncurled::new(parse_url(&url)?, extract_headers(input)?);
    if input.contains(DATA_RAW_FLAG) {
        // `--data-raw` without a single-quoted body still marks a POST.
        let data = parse_data(input)?.unwrap_or_else(|| Value::String(String::new()));
        uncurled.set_data(data);
    }

    debug!(
        base_url = %uncurled.base_url,
        params = uncurled.params.len(),
        headers = uncurled.headers.len(),
        has_data = uncurled.data.is_some(),
        "uncurled command"
    );
    Ok(uncurled)
}
