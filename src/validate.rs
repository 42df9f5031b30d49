//! Draft Validation
//!
//! Pure field checks for the pokemon form, run before any network call.

/// Allowed name length, inclusive
const NAME_MIN: usize = 3;
const NAME_MAX: usize = 19;
/// Types may be left empty but never exceed this length
const TYPE_MAX: usize = 30;

/// Field-level error messages for the current draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftErrors {
    pub name: Option<String>,
    pub pokemon_type: Option<String>,
}

impl DraftErrors {
    /// True when both fields passed
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.pokemon_type.is_none()
    }
}

/// Validate both draft fields, returning a message per failing field
pub fn validate_draft(name: &str, pokemon_type: &str) -> DraftErrors {
    let mut errors = DraftErrors::default();

    if !name_is_valid(name) {
        errors.name = Some(format!(
            "Name must be between {NAME_MIN} and {NAME_MAX} characters and contain only letters, spaces, or hyphens"
        ));
    }
    if !type_is_valid(pokemon_type) {
        errors.pokemon_type = Some(format!(
            "Type must not exceed {TYPE_MAX} characters and contain only letters, spaces, or hyphens"
        ));
    }

    errors
}

fn name_is_valid(name: &str) -> bool {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    (NAME_MIN..=NAME_MAX).contains(&len) && allowed_chars(trimmed)
}

// An empty type is fine; only non-empty values are pattern-checked
fn type_is_valid(pokemon_type: &str) -> bool {
    let trimmed = pokemon_type.trim();
    trimmed.chars().count() <= TYPE_MAX && allowed_chars(trimmed)
}

fn allowed_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let errors = validate_draft("Pikachu", "Electric");
        assert!(errors.is_clean());
        assert_eq!(errors.name, None);
        assert_eq!(errors.pokemon_type, None);
    }

    #[test]
    fn test_name_too_short() {
        assert!(validate_draft("Pi", "Electric").name.is_some());
        // Boundary: exactly 3 passes
        assert!(validate_draft("Pik", "Electric").name.is_none());
    }

    #[test]
    fn test_name_too_long() {
        // 20 characters fails, 19 passes
        assert!(validate_draft("Abcdefghijklmnopqrst", "").name.is_some());
        assert!(validate_draft("Abcdefghijklmnopqrs", "").name.is_none());
    }

    #[test]
    fn test_name_disallowed_characters() {
        assert!(validate_draft("Pika2", "").name.is_some());
        assert!(validate_draft("Pika!", "").name.is_some());
        assert!(validate_draft("Pika_chu", "").name.is_some());
    }

    #[test]
    fn test_name_spaces_and_hyphens_allowed() {
        assert!(validate_draft("Mr Mime", "").name.is_none());
        assert!(validate_draft("Ho-oh", "").name.is_none());
    }

    #[test]
    fn test_name_trimmed_before_checking() {
        // Surrounding whitespace does not count toward the length
        assert!(validate_draft("  Pik  ", "").name.is_none());
        assert!(validate_draft("  Pi  ", "").name.is_some());
    }

    #[test]
    fn test_empty_type_is_valid() {
        assert!(validate_draft("Pikachu", "").pokemon_type.is_none());
        assert!(validate_draft("Pikachu", "   ").pokemon_type.is_none());
    }

    #[test]
    fn test_type_too_long() {
        let over = "a".repeat(31);
        let max = "a".repeat(30);
        assert!(validate_draft("Pikachu", &over).pokemon_type.is_some());
        assert!(validate_draft("Pikachu", &max).pokemon_type.is_none());
    }

    #[test]
    fn test_type_disallowed_characters() {
        assert!(validate_draft("Pikachu", "Electric1").pokemon_type.is_some());
        assert!(validate_draft("Pikachu", "Fire/Flying").pokemon_type.is_some());
    }

    #[test]
    fn test_both_fields_fail_independently() {
        let errors = validate_draft("x", "0");
        assert!(errors.name.is_some());
        assert!(errors.pokemon_type.is_some());
        assert!(!errors.is_clean());
    }
}
