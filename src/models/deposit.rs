//! Deposit account request/response types.

use serde::{Deserialize, Serialize};

/// Request body for opening a deposit account.
///
/// # JSON Example
///
/// ```json
/// {
///   "withdrawalAccountNo": "0016174648358792",
///   "accountTypeUniqueNo": "001-2-81fe2deafd1943",
///   "depositBalance": 1000000
/// }
/// ```
///
/// All three fields are required; their values are passed to the bank as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositAccountRequest {
    /// Demand deposit account the initial balance is drawn from
    pub withdrawal_account_no: String,

    /// Deposit product identifier
    pub account_type_unique_no: String,

    /// Initial deposit in won
    pub deposit_balance: i64,
}

/// Newly opened deposit account, as reported by the bank.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositAccountResponse {
    pub bank_code: String,
    pub bank_name: String,
    pub account_no: String,
    pub account_name: String,
    pub withdrawal_bank_code: String,
    pub withdrawal_account_no: String,
    pub subscription_period: String,
    pub interest_rate: String,
    pub deposit_balance: i64,
    pub account_create_date: String,
    pub account_expiry_date: String,
}
