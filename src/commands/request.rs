//! Request command
//!
//! Sends one request through the [`Host`] without any network transport.

use crate::api::{Host, Method, Request, Response};
use crate::stats::ResultStore;
use anyhow::Result;
use chrono::Utc;

/// Build a request from CLI arguments and dispatch it
///
/// # Errors
///
/// Returns an error if `method` is not GET or POST.
pub fn send_request<S: ResultStore>(
    host: &mut Host<S>,
    method: &str,
    target: &str,
    body: Option<String>,
) -> Result<Response> {
    let method: Method = method.parse()?;
    let request = Request::new(method, target, body);
    log::info!("{method} {}", request.path);
    Ok(host.handle(&request, Utc::now()))
}
