//! Deposit service - opening deposit accounts through the bank.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        deposit::{CreateDepositAccountRequest, CreateDepositAccountResponse},
        fin_api::{RecResponse, WithHeader},
    },
    services::fin_api_client::FinApiClient,
};

/// Bank endpoint for opening a deposit account. The bank names its `apiName` after the last path segment.
const CREATE_DEPOSIT_ACCOUNT_PATH: &str = "edu/deposit/createAccount";
const CREATE_DEPOSIT_ACCOUNT_API: &str = "createAccount";

#[async_trait]
pub trait DepositService: Send + Sync {
    /// Open a deposit account funded from `withdrawal_account_no`.
    async fn create_deposit_account(
        &self,
        withdrawal_account_no: &str,
        account_type_unique_no: &str,
        deposit_balance: i64,
    ) -> Result<CreateDepositAccountResponse, AppError>;
}

/// `DepositService` backed by the financial open API.
///
/// Calls are made with the configured institution API key and user key.
pub struct FinApiDepositService {
    client: Arc<FinApiClient>,
}

impl FinApiDepositService {
    pub fn new(client: Arc<FinApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DepositService for FinApiDepositService {
    async fn create_deposit_account(
        &self,
        withdrawal_account_no: &str,
        account_type_unique_no: &str,
        deposit_balance: i64,
    ) -> Result<CreateDepositAccountResponse, AppError> {
        let header = self.client.request_header(
            CREATE_DEPOSIT_ACCOUNT_API,
            self.client.api_key(),
            self.client.user_key(),
        );
        tracing::info!(
            "opening deposit account {} from {} (tx {})",
            account_type_unique_no,
            withdrawal_account_no,
            header.institution_transaction_unique_no
        );

        let body = CreateDepositAccountRequest {
            withdrawal_account_no: withdrawal_account_no.to_string(),
            account_type_unique_no: account_type_unique_no.to_string(),
            deposit_balance,
        };
        let response: RecResponse<CreateDepositAccountResponse> = self
            .client
            .post_json(
                CREATE_DEPOSIT_ACCOUNT_PATH,
                &WithHeader {
                    header,
                    body: &body,
                },
            )
            .await?;

        Ok(response.rec)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Records calls and echoes the inputs into a fixed account.
    #[derive(Default)]
    pub(crate) struct MockDepositService {
        pub calls: Mutex<Vec<(String, String, i64)>>,
    }

    pub(crate) fn opened_account(withdrawal: &str, balance: i64) -> CreateDepositAccountResponse {
        CreateDepositAccountResponse {
            bank_code: "001".to_string(),
            bank_name: "한국은행".to_string(),
            account_no: "0012345678901234".to_string(),
            account_name: "정기예금".to_string(),
            withdrawal_bank_code: "001".to_string(),
            withdrawal_account_no: withdrawal.to_string(),
            subscription_period: "365".to_string(),
            interest_rate: "3.5".to_string(),
            deposit_balance: balance,
            account_create_date: "20240901".to_string(),
            account_expiry_date: "20250901".to_string(),
        }
    }

    #[async_trait]
    impl DepositService for MockDepositService {
        async fn create_deposit_account(
            &self,
            withdrawal_account_no: &str,
            account_type_unique_no: &str,
            deposit_balance: i64,
        ) -> Result<CreateDepositAccountResponse, AppError> {
            self.calls.lock().unwrap().push((
                withdrawal_account_no.to_string(),
                account_type_unique_no.to_string(),
                deposit_balance,
            ));
            Ok(opened_account(withdrawal_account_no, deposit_balance))
        }
    }

    #[tokio::test]
    async fn sends_header_and_fields_and_returns_rec() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::default();
        let seen_in_stub = seen.clone();
        let app = Router::new().route(
            "/api/v1/edu/deposit/createAccount",
            post(move |Json(body): Json<Value>| {
                let seen = seen_in_stub.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(json!({
                        "Header": { "responseCode": "H0000", "responseMessage": "정상처리 되었습니다." },
                        "REC": serde_json::to_value(opened_account("123", 1000)).unwrap(),
                    }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let config = Config::from_iter([
            ("FIN_API_KEY".to_string(), "service-key".to_string()),
            ("FIN_API_USER_KEY".to_string(), "user-key".to_string()),
            ("FIN_API_BASE_URL".to_string(), format!("http://{addr}/api/v1/")),
        ])
        .unwrap();
        let service = FinApiDepositService::new(Arc::new(FinApiClient::new(&config).unwrap()));

        let account = service
            .create_deposit_account("123", "T1", 1000)
            .await
            .unwrap();

        assert_eq!(account, opened_account("123", 1000));

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["withdrawalAccountNo"], "123");
        assert_eq!(body["accountTypeUniqueNo"], "T1");
        assert_eq!(body["depositBalance"], 1000);
        assert_eq!(body["Header"]["apiName"], "createAccount");
        assert_eq!(body["Header"]["apiServiceCode"], "createAccount");
        assert_eq!(body["Header"]["apiKey"], "service-key");
        assert_eq!(body["Header"]["userKey"], "user-key");
    }
}
