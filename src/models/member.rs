//! Member data models and API request/response types.
//!
//! This module defines:
//! - `MemberRequest`: Request body for login and member creation
//! - `MemberSearchRequest`: Request body for member lookup
//! - `MemberSearchResponse`: Record returned by a lookup
//! - `MemberResponse`: Response body for login and creation

use serde::{Deserialize, Serialize};

/// Request body for login and member creation.
///
/// # JSON Example
///
/// ```json
/// {
///   "apiKey": "a1b2c3...",
///   "userId": "alice@example.com",
///   "userName": "Alice"
/// }
/// ```
///
/// # Validation
///
/// - `apiKey`, `userId`: Required
/// - `userName`: Optional, forwarded to the bank when present
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    /// Institution API key issued by the bank
    pub api_key: String,

    /// Member identifier (usually an email address)
    pub user_id: String,

    /// Display name for a newly created member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl MemberRequest {
    /// The lookup half of this request.
    pub fn search_request(&self) -> MemberSearchRequest {
        MemberSearchRequest {
            api_key: self.api_key.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

/// Request body for member lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchRequest {
    pub api_key: String,
    pub user_id: String,
}

/// Member record returned by a lookup.
///
/// `created` and `modified` are kept as the bank formats them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchResponse {
    pub user_id: String,
    pub user_name: String,
    pub institution_code: String,
    pub user_key: String,
    pub created: String,
    pub modified: String,
}

/// Response body for login and member creation.
///
/// # JSON Example
///
/// ```json
/// {
///   "userId": "alice@example.com",
///   "userName": "Alice",
///   "institutionCode": "00100",
///   "userKey": "2695628f-11a1-418e-b533-9ae19e0650ec",
///   "created": "2024-08-21T10:21:02.123+09:00",
///   "modified": "2024-08-21T10:21:02.123+09:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    /// Member identifier
    pub user_id: String,

    /// Member display name
    pub user_name: String,

    /// Institution the member is registered under
    pub institution_code: String,

    /// Per-member key used on account-level bank calls
    pub user_key: String,

    /// Registration timestamp as reported by the bank
    pub created: String,

    /// Last modification timestamp as reported by the bank
    pub modified: String,
}

/// Convert a lookup result into the login response shape, field for field.
impl From<MemberSearchResponse> for MemberResponse {
    fn from(found: MemberSearchResponse) -> Self {
        Self {
            user_id: found.user_id,
            user_name: found.user_name,
            institution_code: found.institution_code,
            user_key: found.user_key,
            created: found.created,
            modified: found.modified,
        }
    }
}
