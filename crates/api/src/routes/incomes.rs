//! Income record routes.

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
use cashpool_core::ledger::validation::{
    validate_amount, validate_date, validate_percentage, validate_reason,
};
use cashpool_db::{
    IncomeRepository, MemberRepository, entities::incomes, repositories::income::IncomeChanges,
};
use cashpool_shared::{AppError, ResourceKind};

/// Creates the income routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/incomes", post(create_income))
        .route("/incomes/{id}", get(get_income))
        .route("/incomes/{id}", put(update_income))
        .route("/incomes/{id}", delete(delete_income))
}

/// Request body for creating an income record.
#[derive(Debug, Deserialize)]
pub struct CreateIncomeRequest {
    /// Transaction date (YYYY-MM-DD); defaults to today.
    pub date: Option<String>,
    /// Reason text.
    pub reason: String,
    /// Amount, strictly positive.
    pub amount: Decimal,
    /// Contribution percentage; the member's default applies when absent.
    pub contribution_percentage: Option<i16>,
}

/// Request body for partially updating an income record.
#[derive(Debug, Deserialize)]
pub struct UpdateIncomeRequest {
    /// New transaction date (YYYY-MM-DD).
    pub date: Option<String>,
    /// New reason text.
    pub reason: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New contribution percentage.
    pub contribution_percentage: Option<i16>,
}

/// Response for an income record.
#[derive(Debug, Serialize)]
pub struct IncomeResponse {
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
    /// Resolved contribution percentage.
    pub contribution_percentage: i16,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

impl From<incomes::Model> for IncomeResponse {
    fn from(model: incomes::Model) -> Self {
        Self {
            id: model.id,
            member_id: model.member_id,
            date: model.date.to_string(),
            reason: model.reason,
            amount: model.amount,
            contribution_percentage: model.contribution_percentage,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// POST /incomes - Record an income for the authenticated member.
async fn create_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateIncomeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let members = MemberRepository::new((*state.db).clone());

    // The token's community claim is re-checked against the store on writes.
    let member =
        guard::ensure_caller_in_community(&members, auth.member_id(), auth.community_id()).await?;

    let date = validate_date(payload.date.as_deref())?;
    let reason = validate_reason(&payload.reason)?;
    let amount = validate_amount(payload.amount)?;
    let contribution_percentage = validate_percentage(payload.contribution_percentage)?
        .unwrap_or(member.contribution_percentage);

    let income = IncomeRepository::new((*state.db).clone())
        .create(
            auth.member_id(),
            date,
            &reason,
            amount,
            contribution_percentage,
        )
        .await?;

    info!(member_id = auth.member_id(), income_id = income.id, "Income record created");

    Ok((StatusCode::CREATED, Json(IncomeResponse::from(income))))
}

/// GET /incomes/{id} - Read one income record (community-scoped).
async fn get_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<IncomeResponse>, ApiError> {
    let income = IncomeRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Income))?;

    let members = MemberRepository::new((*state.db).clone());
    guard::ensure_record_readable(&members, income.member_id, auth.community_id()).await?;

    Ok(Json(IncomeResponse::from(income)))
}

/// PUT /incomes/{id} - Partially update an owned income record.
async fn update_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateIncomeRequest>,
) -> Result<Json<IncomeResponse>, ApiError> {
    let repo = IncomeRepository::new((*state.db).clone());

    let income = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Income))?;

    guard::ensure_owner(income.member_id, auth.member_id())?;

    let changes = IncomeChanges {
        date: match payload.date.as_deref() {
            Some(raw) => Some(validate_date(Some(raw))?),
            None => None,
        },
        reason: payload.reason.as_deref().map(validate_reason).transpose()?,
        amount: payload.amount.map(validate_amount).transpose()?,
        contribution_percentage: validate_percentage(payload.contribution_percentage)?,
    };

    let updated = repo.update(income, changes).await?;

    info!(member_id = auth.member_id(), income_id = updated.id, "Income record updated");

    Ok(Json(IncomeResponse::from(updated)))
}

/// DELETE /incomes/{id} - Delete an owned income record.
async fn delete_income(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = IncomeRepository::new((*state.db).clone());

    let income = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(ResourceKind::Income))?;

    guard::ensure_owner(income.member_id, auth.member_id())?;

    repo.delete(income.id).await?;

    info!(member_id = auth.member_id(), income_id = id, "Income record deleted");

    Ok(StatusCode::NO_CONTENT)
}
