//! Structured error bodies returned by the API.
//!
//! Every typed failure response (`400`, `401`, `403`, `404`, `409` and the
//! default) shares one layout:
//!
//! ```json
//! {"error": {"code": 404, "message": "...", "trace_id": "...", "errors": []}}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level error response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(rename = "error")]
    pub detail: ErrorDetail,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorDetail {
    /// HTTP status code of the failure.
    pub code: i32,

    /// Detailed causes, mostly used by authentication failures.
    pub errors: Vec<ErrorItem>,

    pub message: String,

    /// Internal serial ID of the request.
    pub trace_id: String,
}

/// One nested cause inside [`ErrorDetail::errors`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorItem {
    /// Service (and cluster) the error originated from.
    pub domain: String,

    /// Resource or parameter the error relates to.
    pub location: String,

    /// Kind of `location`: header, parameter, bucket...
    pub location_type: String,

    pub message: String,

    /// Why the error happened, possibly with a hint for resolving it.
    pub reason: String,
}

impl ErrorBody {
    pub fn new(code: u16, message: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail {
                code: i32::from(code),
                errors: Vec::new(),
                message: message.into(),
                trace_id: trace_id.into(),
            },
        }
    }

    /// Status this body describes. A missing code is reported as `500`.
    pub fn status(&self) -> i32 {
        if self.detail.code == 0 {
            500
        } else {
            self.detail.code
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status: {}, message: {}, trace: {}, inner_error: {}",
            self.status(),
            self.detail.message,
            self.detail.trace_id,
            ErrorItems(&self.detail.errors)
        )
    }
}

impl std::error::Error for ErrorBody {}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "domain: {}, location: {}, location_type: {}, message: {}, reason: {}",
            self.domain, self.location, self.location_type, self.message, self.reason
        )
    }
}

struct ErrorItems<'a>(&'a [ErrorItem]);

impl fmt::Display for ErrorItems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{{{item}}}")?;
        }
        Ok(())
    }
}
