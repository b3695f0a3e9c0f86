//! Wire types shared by every financial open API call.
//!
//! Account-level endpoints take a `Header` object next to their own fields
//! and answer with a `Header` plus a `REC` payload:
//!
//! ```json
//! {
//!   "Header": { "responseCode": "H0000", "responseMessage": "정상처리 되었습니다.", ... },
//!   "REC": { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Common request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub api_name: String,

    /// `YYYYMMDD`
    pub transmission_date: String,

    /// `HHMMSS`
    pub transmission_time: String,

    pub institution_code: String,

    pub fintech_app_no: String,

    /// Same value as `api_name`
    pub api_service_code: String,

    /// Date + time + 6 random digits (20 digits)
    pub institution_transaction_unique_no: String,

    pub api_key: String,

    pub user_key: String,
}

/// Request body with the header flattened next to the call's own fields.
#[derive(Debug, Serialize)]
pub struct WithHeader<'a, T: Serialize> {
    #[serde(rename = "Header")]
    pub header: RequestHeader,

    #[serde(flatten)]
    pub body: &'a T,
}

/// Successful account-level response; the header is not needed once the status was 2xx.
#[derive(Debug, Deserialize)]
pub struct RecResponse<T> {
    #[serde(rename = "REC")]
    pub rec: T,
}

/// Error body returned by the bank.
///
/// Member endpoints return the fields at the top level; account-level
/// endpoints nest them under `Header`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub response_code: Option<String>,
    pub response_message: Option<String>,

    #[serde(rename = "Header")]
    pub header: Option<Box<ErrorBody>>,
}

impl ErrorBody {
    /// `(code, message)` from whichever level carries them.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match (self.response_code, self.header) {
            (Some(code), _) => (Some(code), self.response_message),
            (None, Some(header)) => header.into_parts(),
            (None, None) => (None, self.response_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_reads_top_level_code() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"responseCode":"E4003","responseMessage":"존재하지 않는 ID입니다."}"#,
        )
        .unwrap();

        let (code, message) = body.into_parts();
        assert_eq!(code.as_deref(), Some("E4003"));
        assert_eq!(message.as_deref(), Some("존재하지 않는 ID입니다."));
    }

    #[test]
    fn error_body_reads_nested_header() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"Header":{"responseCode":"A1003","responseMessage":"계좌번호가 유효하지 않습니다."}}"#,
        )
        .unwrap();

        let (code, _) = body.into_parts();
        assert_eq!(code.as_deref(), Some("A1003"));
    }
}
