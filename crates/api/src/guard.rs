//! Tenant and ownership authorization checks.
//!
//! Every protected operation calls one of these after authentication.
//! Existence is always resolved before tenancy or ownership, so a
//! non-existent target reads as `NotFound` even for a caller who would
//! otherwise be forbidden, and cross-tenant denial is uniformly `Forbidden`.

use cashpool_db::MemberRepository;
use cashpool_db::entities::members;
use cashpool_shared::{AppError, ResourceKind};

use crate::error::ApiError;

/// Verifies that a target member exists and belongs to the caller's
/// community. Used for balance and transaction-list reads.
pub async fn ensure_member_in_community(
    members: &MemberRepository,
    target_member_id: i64,
    caller_community_id: i64,
) -> Result<(), ApiError> {
    let community = members.community_of(target_member_id).await?;
    check_member_tenancy(community, caller_community_id).map_err(ApiError::from)
}

/// Verifies that a record's owner belongs to the caller's community.
///
/// Single-record reads are tenant-scoped, not ownership-scoped: any member
/// of the owner's community may read the record. A dangling owner reference
/// resolves to `Forbidden`.
pub async fn ensure_record_readable(
    members: &MemberRepository,
    owner_member_id: i64,
    caller_community_id: i64,
) -> Result<(), ApiError> {
    let community = members.community_of(owner_member_id).await?;
    check_record_tenancy(community, caller_community_id).map_err(ApiError::from)
}

/// Verifies that the caller still exists in the community their token
/// claims. Used before creating records.
pub async fn ensure_caller_in_community(
    members: &MemberRepository,
    caller_member_id: i64,
    caller_community_id: i64,
) -> Result<members::Model, ApiError> {
    members
        .find_in_community(caller_member_id, caller_community_id)
        .await?
        .ok_or_else(|| ApiError::from(AppError::Forbidden))
}

/// Verifies that the caller owns a record. Used for update and delete.
pub fn ensure_owner(record_member_id: i64, caller_member_id: i64) -> Result<(), ApiError> {
    if record_member_id == caller_member_id {
        Ok(())
    } else {
        Err(AppError::Forbidden.into())
    }
}

fn check_member_tenancy(
    target_community: Option<i64>,
    caller_community_id: i64,
) -> Result<(), AppError> {
    match target_community {
        None => Err(AppError::NotFound(ResourceKind::Member)),
        Some(community_id) if community_id == caller_community_id => Ok(()),
        Some(_) => Err(AppError::Forbidden),
    }
}

fn check_record_tenancy(
    owner_community: Option<i64>,
    caller_community_id: i64,
) -> Result<(), AppError> {
    match owner_community {
        Some(community_id) if community_id == caller_community_id => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_member_is_not_found_before_tenancy() {
        assert!(matches!(
            check_member_tenancy(None, 1),
            Err(AppError::NotFound(ResourceKind::Member))
        ));
    }

    #[test]
    fn test_cross_community_member_is_forbidden() {
        assert!(matches!(
            check_member_tenancy(Some(2), 1),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_same_community_member_passes() {
        assert!(check_member_tenancy(Some(1), 1).is_ok());
    }

    #[test]
    fn test_record_with_dangling_owner_is_forbidden() {
        assert!(matches!(
            check_record_tenancy(None, 1),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_record_in_same_community_is_readable() {
        assert!(check_record_tenancy(Some(3), 3).is_ok());
    }

    #[test]
    fn test_ownership_check() {
        assert!(ensure_owner(7, 7).is_ok());
        assert!(ensure_owner(7, 8).is_err());
    }
}
