//! Transport-agnostic request handling
//!
//! A [`Host`] owns a corpus, a selector and a results store and answers the
//! game's JSON routes. Any transport (HTTP server, CLI, tests) builds a
//! [`Request`], calls [`Host::handle`] and sends back the [`Response`].
//!
//! | Route | Body | Reply |
//! |-------|------|-------|
//! | `GET /word?mode=&category=` | | `{word, mode}` |
//! | `POST /word/validate` | `{word}` | `{isValid}` |
//! | `POST /results` | `GameResult` | stored result |
//! | `GET /results?limit=N` | | results, newest first |
//! | `GET /stats` | | `GameStats` |
//! | `GET /cache-stats` | | category cache entries |
//! | `POST /cache/refresh` | `{category}` | `{category, wordCount}` |

mod host;

pub use host::Host;

use crate::corpus::CorpusError;
use crate::stats::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Results returned when no limit is given
pub const DEFAULT_RESULTS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(ApiError::BadRequest(format!("unsupported method {other}"))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A request with its path split from its query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Request {
    /// Build a request from a target such as `/word?mode=daily`
    #[must_use]
    pub fn new(method: Method, target: &str, body: Option<String>) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(k), percent_decode(v))
            })
            .collect();

        Self {
            method,
            path: path.trim_end_matches('/').to_string(),
            query,
            body,
        }
    }

    #[must_use]
    pub fn get(target: &str) -> Self {
        Self::new(Method::Get, target, None)
    }

    #[must_use]
    pub fn post(target: &str, body: impl Into<String>) -> Self {
        Self::new(Method::Post, target, Some(body.into()))
    }

    /// First value for a query parameter
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parse the JSON body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` if the body is missing or does not match `T`.
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, ApiError> {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest("missing request body".into()))?;
        serde_json::from_str(body).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// Decode `+` and `%XX` escapes in a query component
///
/// Malformed escapes are kept as written.
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                if let Some(byte) = hex {
                    out.push(byte);
                    i += 2;
                } else {
                    out.push(b'%');
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Status code and JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    /// 200 with `body` serialized to JSON
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if `body` cannot be serialized.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self { status: 200, body })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status < 400
    }
}

impl From<ApiError> for Response {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.status(),
            body: serde_json::json!({ "error": error.to_string() }),
        }
    }
}

/// Request failures and the status code each maps to
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("no route for {method} {path}")]
    NotFound { method: Method, path: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Store(_) | Self::Corpus(_) | Self::Internal(_) => 500,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValidateBody {
    word: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateReply {
    is_valid: bool,
}

#[derive(Debug, Deserialize)]
struct RefreshBody {
    category: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshReply {
    category: String,
    word_count: usize,
}
