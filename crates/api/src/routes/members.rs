//! Member balance and transaction-list routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::ApiError, guard, middleware::AuthUser};
use cashpool_core::ledger::{TransactionEntry, balance::balance};
use cashpool_db::{ExpenseRepository, IncomeRepository, MemberRepository, TransactionRepository};
use cashpool_shared::types::{PageRequest, PageResponse};

/// Creates the member routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/members/{member_id}/balance", get(get_balance))
        .route("/members/{member_id}/transactions", get(list_transactions))
}

/// Response for a member's balance.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Contribution-weighted income minus expenses, all-time.
    pub balance: Decimal,
}

/// GET /members/{member_id}/balance - A member's all-time net balance.
///
/// Readable by any member of the target's community.
async fn get_balance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(member_id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let members = MemberRepository::new((*state.db).clone());
    guard::ensure_member_in_community(&members, member_id, auth.community_id()).await?;

    let incomes = IncomeRepository::new((*state.db).clone())
        .all_for_member(member_id)
        .await?;
    let expenses = ExpenseRepository::new((*state.db).clone())
        .all_for_member(member_id)
        .await?;

    let net = balance(
        incomes
            .into_iter()
            .map(|income| (income.amount, income.contribution_percentage)),
        expenses.into_iter().map(|expense| expense.amount),
    );

    Ok(Json(BalanceResponse { balance: net }))
}

/// GET /members/{member_id}/transactions - Merged, paginated record view.
///
/// Incomes and expenses are presented as one date-descending sequence.
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(member_id): Path<i64>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<TransactionEntry>>, ApiError> {
    // Bounds are checked before any storage query is issued.
    page.validate()?;

    let members = MemberRepository::new((*state.db).clone());
    guard::ensure_member_in_community(&members, member_id, auth.community_id()).await?;

    let transactions = TransactionRepository::new((*state.db).clone());
    let total_items = transactions.count_for_member(member_id).await?;
    let items = transactions
        .page_for_member(member_id, page.offset(), page.limit())
        .await?;

    Ok(Json(PageResponse::new(items, page, total_items)))
}
