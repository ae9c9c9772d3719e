/// Default maximum image upload size in bytes (10MB)
/// A phone photo of a fridge is typically 2-4MB, so this leaves
/// headroom without letting uploads balloon the API bill
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10_485_760;

/// Warning threshold for large uploads (4MB)
/// Log when uploads exceed this size for monitoring
pub const WARN_IMAGE_BYTES: usize = 4_194_304;

/// Max tokens for the ingredient identification call
pub const IDENTIFY_MAX_TOKENS: u32 = 1024;

/// Max tokens for the recipe suggestion call
pub const SUGGEST_MAX_TOKENS: u32 = 2048;

/// Default number of history rows returned
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Upper bound on history rows per request
pub const MAX_HISTORY_LIMIT: i64 = 50;

/// Valid rating range for saved recipes (inclusive)
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Valid household size range for preferences (inclusive)
pub const MIN_HOUSEHOLD_SIZE: i32 = 1;
pub const MAX_HOUSEHOLD_SIZE: i32 = 20;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for uploads that are not a supported image format
pub const ERR_UNSUPPORTED_IMAGE: &str =
    "Unsupported image format - JPEG, PNG, GIF and WebP are accepted";

/// Error message for a rating outside the allowed range
pub const ERR_RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5";

/// Error message for an unrecognised skill level
pub const ERR_INVALID_SKILL_LEVEL: &str =
    "Skill level must be one of: beginner, intermediate, advanced";

/// Error message for a household size outside the allowed range
pub const ERR_INVALID_HOUSEHOLD_SIZE: &str = "Household size must be between 1 and 20";

/// Error message for a malformed user id header
pub const ERR_INVALID_USER_ID: &str = "x-user-id header must be a valid UUID";

/// Error message for a missing recipe name or body
pub const ERR_EMPTY_RECIPE: &str = "Recipe name and body must not be empty";
