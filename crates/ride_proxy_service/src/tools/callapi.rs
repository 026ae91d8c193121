/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::call_external_api;
use crate::tools::prometheus::CALL_EXTERNAL_API;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode, Url};
use hyper::ext::ReasonPhrase;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use tracing::{error, info};

/// Failure of a single outbound call to the upstream.
///
/// The `Display` of every variant is the text that ends up in the `details` field of the
/// error envelope, so transport failures and upstream status failures share one shape.
#[derive(Debug, thiserror::Error)]
pub enum CallAPIError {
    #[error("{status_text}")]
    UpstreamStatus { status: u16, status_text: String },
    #[error("{0}")]
    ExternalAPICallError(String),
    #[error("{0}")]
    DeserializationError(String),
    #[error("{0}")]
    InvalidRequest(String),
}

/// Sends one request to the upstream and classifies its response.
///
/// Headers are given as name/value pairs and only their names are logged, since they carry
/// credentials and bearer tokens. Every upstream call is bodiless.
///
/// # Returns
///
/// * `Ok(T)` if the upstream answered with a success status and a body that deserializes into `T`.
/// * `Err(CallAPIError)` if the request could not be built or sent, or if [`handle_api_response`]
///   rejects the response.
pub async fn call_api<T>(
    client: &Client,
    method: Method,
    url: &Url,
    headers: Vec<(&str, &str)>,
) -> Result<T, CallAPIError>
where
    T: DeserializeOwned,
{
    let start_time = std::time::Instant::now();

    let mut header_map = HeaderMap::new();

    for (header_key, header_value) in headers {
        let header_name = HeaderName::from_str(header_key).map_err(|_| {
            CallAPIError::InvalidRequest(format!("Invalid Header Name : {header_key}"))
        })?;
        let header_value = HeaderValue::from_str(header_value).map_err(|_| {
            CallAPIError::InvalidRequest(format!("Invalid Header Value For : {header_key}"))
        })?;

        header_map.insert(header_name, header_value);
    }

    let header_names = header_map
        .keys()
        .map(|header_name| header_name.as_str())
        .collect::<Vec<&str>>()
        .join(",");

    let resp = client
        .request(method.to_owned(), url.to_owned())
        .headers(header_map.to_owned())
        .send()
        .await;

    let url_str = format!(
        "{}://{}:{}",
        url.scheme(),
        url.host_str().unwrap_or(""),
        url.port_or_known_default().unwrap_or(80)
    );

    let status = match resp.as_ref() {
        Ok(resp) => resp.status().as_str().to_string(),
        Err(err) => err
            .status()
            .map(|status| status.to_string())
            .unwrap_or("UNKNOWN".to_string()),
    };

    call_external_api!(
        method.as_str(),
        url_str.as_str(),
        url.path(),
        status.as_str(),
        start_time
    );

    match resp {
        Ok(resp) => {
            if resp.status().is_success() {
                info!(tag = "[OUTGOING API]", request_method = %method, request_url = %url_str, request_path = url.path(), request_headers = header_names, response_status = resp.status().as_str(), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            } else {
                error!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_url = %url_str, request_path = url.path(), request_headers = header_names, response_status = resp.status().as_str(), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            }
            handle_api_response::<T>(resp).await
        }
        Err(err) => {
            error!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_url = %url_str, request_path = url.path(), request_headers = header_names, error = format!("{:?}", err), latency = format!("{:?}ms", start_time.elapsed().as_millis()));
            Err(CallAPIError::ExternalAPICallError(err.to_string()))
        }
    }
}

/// Splits an upstream response into success and failure.
///
/// On a non-success status the body is read as text and logged once, and the caller only
/// gets the status text back, which is the reason phrase the upstream actually sent. On
/// success the body is parsed as JSON into `T`.
pub async fn handle_api_response<T>(resp: Response) -> Result<T, CallAPIError>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    let reason = resp.extensions().get::<ReasonPhrase>().cloned();

    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|err| CallAPIError::DeserializationError(err.to_string()))
    } else {
        let error_text = resp.text().await.unwrap_or_default();
        error!(tag = "[UPSTREAM API - FAILURE BODY]", response_status = status.as_str(), response_body = %error_text);
        Err(CallAPIError::UpstreamStatus {
            status: status.as_u16(),
            status_text: status_text(status, reason.as_ref()),
        })
    }
}

/// Reason phrase of a response.
///
/// Only a non-canonical phrase arrives as a `ReasonPhrase` extension, otherwise the canonical
/// phrase of the status stands in, and a status without one falls back to its bare code.
fn status_text(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    reason
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .filter(|reason| !reason.is_empty())
        .or_else(|| status.canonical_reason().map(|reason| reason.to_string()))
        .unwrap_or_else(|| status.as_str().to_string())
}
