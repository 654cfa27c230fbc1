//! Email address extraction.

use super::patterns::EMAIL;

/// Extract the first email address from text.
///
/// No validation beyond the pattern match; the first occurrence wins.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Contact me at jane.doe@example.com for details"),
            Some("jane.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_first_email_wins() {
        let text = "first@one.com and also second@two.org";
        assert_eq!(extract_email(text), Some("first@one.com".to_string()));
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_plus_tag_and_subdomain() {
        assert_eq!(
            extract_email("jane+resume@mail.example.co.uk"),
            Some("jane+resume@mail.example.co.uk".to_string())
        );
    }
}
