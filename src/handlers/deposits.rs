//! Deposit account HTTP handlers.

use axum::extract::State;

use crate::{
    error::AppError,
    handlers::ApiJson,
    models::deposit::{CreateDepositAccountRequest, CreateDepositAccountResponse},
    response::{ApiResponse, success_response},
    state::AppState,
};

/// Open a deposit account.
///
/// # Endpoint
///
/// `POST /api/deposit/createDepositAccount`
///
/// # Request Body
///
/// ```json
/// {
///   "withdrawalAccountNo": "0016174648358792",
///   "accountTypeUniqueNo": "001-2-81fe2deafd1943",
///   "depositBalance": 1000000
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The bank's account record, unmodified
/// - **Error (400)**: A field is missing or has the wrong type
/// - **Error (422)**: The bank rejected the request
pub async fn create_deposit_account(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateDepositAccountRequest>,
) -> Result<ApiResponse<CreateDepositAccountResponse>, AppError> {
    let account = state
        .deposit_service
        .create_deposit_account(
            &request.withdrawal_account_no,
            &request.account_type_unique_no,
            request.deposit_balance,
        )
        .await?;

    Ok(success_response(account))
}
