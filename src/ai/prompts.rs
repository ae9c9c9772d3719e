//! Prompt builders for the two model calls.
//!
//! The identification prompt asks for a fixed `INGREDIENTS:` /
//! `CATEGORIES:` layout so the response can be parsed without a second
//! model call; see [`crate::ai::parse`].

/// Prompt sent alongside the image to identify visible ingredients
pub const IDENTIFY_PROMPT: &str = "\
Analyze this image and identify all visible food ingredients.

Return your response in this exact format:
INGREDIENTS:
- ingredient 1
- ingredient 2
- ingredient 3
(etc.)

CATEGORIES:
- Proteins: list any proteins
- Vegetables: list any vegetables
- Fruits: list any fruits
- Dairy: list any dairy products
- Grains/Carbs: list any grains or carbs
- Condiments/Sauces: list any condiments or sauces
- Other: list anything else

Be specific about what you see. If you can identify specific varieties \
(e.g., cherry tomatoes vs regular tomatoes), please do so.";

/// Build the recipe suggestion prompt from the identified ingredients
/// and the user's preferences
pub fn suggest_prompt(ingredients: &str, dietary: &[String], cuisine: Option<&str>) -> String {
    let mut preferences = String::new();
    if !dietary.is_empty() {
        preferences.push_str(&format!("\nDietary requirements: {}", dietary.join(", ")));
    }
    // "Any" means no cuisine constraint
    if let Some(cuisine) = cuisine.filter(|c| !c.eq_ignore_ascii_case("any")) {
        preferences.push_str(&format!("\nPreferred cuisine: {}", cuisine));
    }

    format!(
        "Based on these available ingredients:\n\n{ingredients}\n{preferences}\n\n\
Suggest 3 recipes that can be made primarily with these ingredients. For each recipe, provide:\n\n\
1. **Recipe Name**\n\
   - Difficulty: Easy/Medium/Hard\n\
   - Time: estimated cooking time\n\
   - Ingredients needed (mark any NOT in the list)\n\
   - Brief cooking instructions (5-7 steps)\n\
   - Pro tip for the dish\n\n\
Focus on practical, delicious recipes that make good use of the available ingredients. \
Minimize additional ingredients needed."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_prompt_includes_preferences() {
        let prompt = suggest_prompt(
            "- eggs\n- spinach",
            &["Vegetarian".to_string(), "Gluten-Free".to_string()],
            Some("Italian"),
        );

        assert!(prompt.contains("- eggs"));
        assert!(prompt.contains("Dietary requirements: Vegetarian, Gluten-Free"));
        assert!(prompt.contains("Preferred cuisine: Italian"));
    }

    #[test]
    fn test_suggest_prompt_omits_empty_preferences() {
        let prompt = suggest_prompt("- eggs", &[], None);

        assert!(!prompt.contains("Dietary requirements"));
        assert!(!prompt.contains("Preferred cuisine"));
    }

    #[test]
    fn test_suggest_prompt_treats_any_cuisine_as_unset() {
        let prompt = suggest_prompt("- eggs", &[], Some("Any"));
        assert!(!prompt.contains("Preferred cuisine"));
    }
}
