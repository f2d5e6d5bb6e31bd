use std::time::Duration;

use reqwest::blocking::{Client, Request, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, info};

use crate::{curl::Uncurled, error::Result};

/// A blocking client without the default request timeout.
pub fn default_client() -> Result<Client> {
    Ok(Client::builder().timeout(None::<Duration>).build()?)
}

fn with_body(builder: RequestBuilder, data: &Value) -> RequestBuilder {
    match data {
        // `--data-raw` without a quoted body
        Value::String(s) if s.is_empty() => builder.body(String::new()),
        data => builder.json(data),
    }
}

/// Build the request `uncurled` describes, without sending it.
///
/// Headers go in before the body, so a `Content-Type` copied from the browser
/// wins over the `application/json` default of a JSON body.
pub fn build_request(client: &Client, uncurled: &Uncurled) -> Result<Request> {
    let builder = client
        .request(uncurled.method(), &uncurled.base_url)
        .query(&uncurled.params);

    let builder = uncurled
        .headers
        .iter()
        .fold(builder, |builder, (key, value)| {
            builder.header(key.as_str(), value.as_str())
        });

    let builder = match &uncurled.data {
        Some(data) => with_body(builder, data),
        None => builder,
    };

    Ok(builder.build()?)
}

/// Replay `uncurled` with a fresh client: `POST` with the body when it has
/// one, `GET` otherwise. Errors from the client are passed up as they are.
pub fn request(uncurled: &Uncurled) -> Result<Response> {
    request_with(&default_client()?, uncurled)
}

pub fn request_with(client: &Client, uncurled: &Uncurled) -> Result<Response> {
    let request = build_request(client, uncurled)?;
    info!(method = %request.method(), url = %request.url(), "sending request");

    let response = client.execute(request)?;
    debug!(status = %response.status(), "received response");
    Ok(response)
}
