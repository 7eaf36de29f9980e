pub mod catalog;
pub mod handlers;

/// Turns a display name into a template id: lowercase alphanumeric runs
/// joined by single hyphens ("Midnight Gradient" → "midnight-gradient").
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Midnight Gradient"), "midnight-gradient");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Bold -- & Brash!  "), "bold-brash");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
