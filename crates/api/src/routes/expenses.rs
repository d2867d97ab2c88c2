//! Expense record routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, guard, middleware::AuthUser};
use cashpool_core::ledger::validation::{validate_amount, validate_date, validate_reason};
use cashpool_db::{
    ExpenseRepository, MemberRepository, entities::expenses, repositories::expense::ExpenseChanges,
};
use cashpool_shared::{AppError, ResourceKind};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/{id}", get(get_expense))
        .route("/expenses/{id}", put(update_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// Request body for creating an expense record.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Transaction date (YYYY-MM-DD); defaults to today.
    pub date: Option<String>,
    /// Reason text.
    pub reason: String,
    /// Amount, strictly positive.
    pub amount: Decimal,
}

/// Request body for partially updating an expense record.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New transaction date (YYYY-MM-DD).
    pub date: Option<String>,
    /// New reason text.
    pub reason: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
}

/// Response for an expense record.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Record ID.
    pub id: i64,
    /// Owning member ID.
    pub member_id: i64,
    /// Transaction date.
    pub date: String,
    /// Reason text.
    pub reason: String,
    /// Amount.
    pub amount: Decimal,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: model.id,
            member_id: model.member_id,
            date: model.date.to_string(),
            reason: model.reason,
            amount: model.amount,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// POST /expenses - Record an expense for the authenticated member.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let members = MemberRepository::new((*state.db).clone());

    guard::ensure_caller_in_community(&members, auth.member_id(), auth.community_id()).await?;

    let date = validate_date(payload.date.as_deref())?;
    let reason = validate_reason(&payload.reason)?;
    let amount = validate_amount(payload.amount)?;

    let expense = ExpenseRepository::new((*state.db).clone())
        .create(auth.member_id(), date, &reason, amount)
        .await?;

    info!(member_id = auth.member_id(), expense_id = expense.id, "Expense record created");

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// GET /expenses/{id} - Read one expense record (community-scoped).
async fn get_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let expense = ExpenseRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Expense))?;

    let members = MemberRepository::new((*state.db).clone());
    guard::ensure_record_readable(&members, expense.member_id, auth.community_id()).await?;

    Ok(Json(ExpenseResponse::from(expense)))
}

/// PUT /expenses/{id} - Partially update an owned expense record.
async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());

    let expense = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Expense))?;

    guard::ensure_owner(expense.member_id, auth.member_id())?;

    let changes = ExpenseChanges {
        date: match payload.date.as_deref() {
            Some(raw) => Some(validate_date(Some(raw))?),
            None => None,
        },
        reason: payload.reason.as_deref().map(validate_reason).transpose()?,
        amount: payload.amount.map(validate_amount).transpose()?,
    };

    let updated = repo.update(expense, changes).await?;

    info!(member_id = auth.member_id(), expense_id = updated.id, "Expense record updated");

    Ok(Json(ExpenseResponse::from(updated)))
}

/// DELETE /expenses/{id} - Delete an owned expense record.
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ExpenseRepository::new((*state.db).clone());

    let expense = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Expense))?;

    guard::ensure_owner(expense.member_id, auth.member_id())?;

    repo.delete(expense.id).await?;

    info!(member_id = auth.member_id(), expense_id = id, "Expense record deleted");

    Ok(StatusCode::NO_CONTENT)
}
