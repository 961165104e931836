//! API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use minibank_ledger::{Account, LedgerError, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

// ============ Response Types ============

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            balance: account.balance.value(),
            created_at: account.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction_date: DateTime<Utc>,
    pub amount: Decimal,
    pub balance_after_transaction: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            transaction_date: tx.timestamp,
            amount: tx.amount,
            balance_after_transaction: tx.balance_after.value(),
            kind: tx.kind,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============ Request Types ============

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Defaults to the current time when omitted
    pub transaction_date: Option<DateTime<Utc>>,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Open a new account
pub async fn create_account(State(state): State<AppState>) -> impl IntoResponse {
    let account = state.engine.create_account();
    (StatusCode::CREATED, Json(AccountResponse::from(account)))
}

/// Get an account's id and current balance
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Response {
    match state.engine.get_account(account_id) {
        Ok(account) => (StatusCode::OK, Json(AccountResponse::from(account))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Apply a deposit or withdrawal to an account
pub async fn process_transaction(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<TransactionRequest>,
) -> Response {
    let timestamp = request.transaction_date.unwrap_or_else(Utc::now);
    match state
        .engine
        .process_transaction(account_id, request.kind, request.amount, timestamp)
    {
        Ok(tx) => (StatusCode::CREATED, Json(TransactionResponse::from(tx))).into_response(),
        Err(err) => error_response(err),
    }
}

/// List an account's transactions in the order they were applied
pub async fn list_transactions(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Response {
    match state.engine.transactions(account_id) {
        Ok(transactions) => {
            let body: Vec<TransactionResponse> =
                transactions.into_iter().map(TransactionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Map a ledger error to its response status and JSON body
fn error_response(err: LedgerError) -> Response {
    let status = match err {
        LedgerError::AccountNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InvalidAmount(_) | LedgerError::InsufficientFunds { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
