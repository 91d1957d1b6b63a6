//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter backing `next_id`, shared by every factory in the test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning `count` shares with distinct local ids.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of shares to create for the user
///
/// # Returns
/// - `Ok((user, shares))` - The owner and its shares in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_shares(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::user::Model, Vec<entity::share_note::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;

    let mut shares = Vec::with_capacity(count);
    for _ in 0..count {
        shares.push(crate::factory::share_note::create_share(db, &user.id).await?);
    }

    Ok((user, shares))
}
