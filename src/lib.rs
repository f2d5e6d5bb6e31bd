pub mod curl;
pub mod error;
pub mod request;
pub mod url;

#[cfg(test)]
mod test_util;

pub use curl::{Uncurled, uncurl};
pub use error::{Result, UncurlError};
pub use request::{build_request, request, request_with};
pub use url::parser::{ParsedUrl, parse_url};
