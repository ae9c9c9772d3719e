//! Parsing of the model's structured text responses.
//!
//! The prompts pin the response layout, but the model occasionally
//! strays, so parsing is lenient: missing sections yield empty lists
//! rather than errors, and the raw text is always kept alongside.

/// One recipe suggestion extracted from the model's response
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeEntry {
    pub title: String,
    pub body: String,
}

/// Extract the flat ingredient name list from an identification response
///
/// Reads the `- name` bullets under the `INGREDIENTS:` heading and stops
/// at the `CATEGORIES:` heading (whose bullets are groupings, not names).
pub fn ingredient_names(response: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_ingredients = false;

    for line in response.lines() {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("INGREDIENTS:") {
            in_ingredients = true;
            continue;
        }
        if trimmed.eq_ignore_ascii_case("CATEGORIES:") {
            break;
        }
        if !in_ingredients {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Split a suggestion response into individual recipe entries
///
/// Entries start at numbered headings (`1. **Name**` or `1. Name`);
/// everything up to the next heading is the entry body. Text before the
/// first heading (preamble) is ignored.
pub fn recipe_entries(response: &str) -> Vec<RecipeEntry> {
    let mut entries: Vec<RecipeEntry> = Vec::new();

    for line in response.lines() {
        if let Some(title) = heading_title(line) {
            entries.push(RecipeEntry {
                title,
                body: String::new(),
            });
        } else if let Some(entry) = entries.last_mut() {
            if !entry.body.is_empty() {
                entry.body.push('\n');
            }
            entry.body.push_str(line);
        }
    }

    for entry in &mut entries {
        entry.body = entry.body.trim().to_string();
    }
    entries
}

/// Parse a `N. Title` or `N. **Title**` heading line
fn heading_title(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let (digits, rest) = trimmed.split_at(trimmed.find('.')?);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let title = rest[1..].trim().trim_matches('*').trim();
    if title.is_empty() {
        return None;
    }
    Some(title.to_string())
}
