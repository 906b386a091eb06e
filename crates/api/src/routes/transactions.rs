//! Transaction recording routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use chrono::{DateTime, Utc};
use finlens_core::transaction::{Transaction, TransactionType};
use finlens_shared::{
    AppError,
    types::{CategoryId, UserId},
};
use finlens_store::NewTransaction;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/transactions", post(create_transaction))
}

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Positive amount.
    pub amount: Decimal,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category ID.
    pub category_id: CategoryId,
    /// Defaults to now.
    pub date: Option<DateTime<Utc>>,
    /// Free text.
    #[serde(default)]
    pub description: String,
}

async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    if request.amount <= Decimal::ZERO {
        return Err(AppError::Validation("amount must be positive".to_string()).into());
    }

    let transaction = state
        .store
        .record_transaction(NewTransaction {
            user_id,
            amount: request.amount,
            transaction_type: request.transaction_type,
            category_id: request.category_id,
            date: request.date.unwrap_or_else(Utc::now),
            description: request.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
