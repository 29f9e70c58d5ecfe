//! REST client of the community resource map backend.

use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use resmap_boundary::Acknowledgement;

mod admin;
mod public;

pub use self::{admin::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Api(#[from] resmap_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// Characters that are left as they are within a single path segment
/// or query value.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

async fn rejection(response: Response) -> Error {
    // the body of an error response is not guaranteed to be JSON
    let mut err = response
        .json::<resmap_boundary::Error>()
        .await
        .unwrap_or_default();
    err.http_status = response.status();
    Error::Api(err)
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(rejection(response).await)
    }
}

/// Like [`into_json`] but for mutations whose success body is
/// informative only (it might even be empty or echo the stored record).
pub async fn into_ack(response: Response) -> Result<Acknowledgement> {
    if !response.ok() {
        return Err(rejection(response).await);
    }
    let body = response.text().await?;
    Ok(parse_ack(&body))
}

fn parse_ack(body: &str) -> Acknowledgement {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .map(|value| Acknowledgement {
            message: value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned),
            id: value.get("id").and_then(|id| match id {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
        })
        .unwrap_or_default()
}
