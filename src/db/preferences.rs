//! User preference queries. One row per user, upsert on conflict.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SkillLevel, UserPreference};

pub const SQL_GET_PREFERENCES: &str = r#"
SELECT id, user_id, dietary_restrictions, preferred_cuisines, skill_level,
       household_size, created_at, updated_at
FROM user_preferences
WHERE user_id = $1
"#;

/// `updated_at` is stamped by the shared trigger, not set here
pub const SQL_UPSERT_PREFERENCES: &str = r#"
INSERT INTO user_preferences (user_id, dietary_restrictions, preferred_cuisines, skill_level, household_size)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (user_id) DO UPDATE SET
    dietary_restrictions = EXCLUDED.dietary_restrictions,
    preferred_cuisines = EXCLUDED.preferred_cuisines,
    skill_level = EXCLUDED.skill_level,
    household_size = EXCLUDED.household_size
RETURNING id, user_id, dietary_restrictions, preferred_cuisines, skill_level,
          household_size, created_at, updated_at
"#;

pub async fn get_for_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<UserPreference>> {
    sqlx::query_as::<_, UserPreference>(SQL_GET_PREFERENCES)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn upsert(
    pool: &PgPool,
    user_id: Uuid,
    dietary_restrictions: &[String],
    preferred_cuisines: &[String],
    skill_level: SkillLevel,
    household_size: i32,
) -> sqlx::Result<UserPreference> {
    sqlx::query_as::<_, UserPreference>(SQL_UPSERT_PREFERENCES)
        .bind(user_id)
        .bind(dietary_restrictions)
        .bind(preferred_cuisines)
        .bind(skill_level)
        .bind(household_size)
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_targets_unique_user() {
        assert!(SQL_UPSERT_PREFERENCES.contains("ON CONFLICT (user_id)"));
    }

    #[test]
    fn test_upsert_never_writes_updated_at() {
        // The trigger owns updated_at; writing it here could move it backwards
        assert!(!SQL_UPSERT_PREFERENCES.contains("updated_at ="));
    }
}
