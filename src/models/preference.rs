use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_HOUSEHOLD_SIZE, MIN_HOUSEHOLD_SIZE};

/// Cooking skill level, constrains recipe complexity suggestions
///
/// Stored as lowercase text with a CHECK constraint mirroring this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<SkillLevel> {
        match s {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }
}

/// Per-user cooking preferences, one row per user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserPreference {
    pub id: Uuid,
    pub user_id: Uuid,
    pub dietary_restrictions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub skill_level: SkillLevel,
    pub household_size: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Validate a household size is within the allowed range
    pub fn validate_household_size(size: i32) -> bool {
        (MIN_HOUSEHOLD_SIZE..=MAX_HOUSEHOLD_SIZE).contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parse_round_trip() {
        for level in [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
        ] {
            assert_eq!(SkillLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_skill_level_rejects_unknown() {
        assert_eq!(SkillLevel::parse("expert"), None);
        assert_eq!(SkillLevel::parse("Beginner"), None);
        assert_eq!(SkillLevel::parse(""), None);
    }

    #[test]
    fn test_validate_household_size() {
        assert!(UserPreference::validate_household_size(1));
        assert!(UserPreference::validate_household_size(20));
        assert!(!UserPreference::validate_household_size(0));
        assert!(!UserPreference::validate_household_size(21));
    }
}
