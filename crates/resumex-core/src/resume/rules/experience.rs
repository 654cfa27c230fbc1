//! Years-of-experience extraction.

use super::patterns::YEARS_PATTERNS;

/// Extract years of experience, sanity-bounded to the exclusive range
/// (0, `max_years`). Out-of-range matches are skipped and the chain
/// continues.
pub fn extract_years(text: &str, max_years: u32) -> Option<u32> {
    for pattern in YEARS_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                if years > 0 && years < max_years {
                    return Some(years);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MAX: u32 = 50;

    #[test]
    fn test_years_of_experience() {
        assert_eq!(extract_years("5 years of teaching experience", MAX), Some(5));
    }

    #[test]
    fn test_years_plus_suffix() {
        assert_eq!(extract_years("10+ years experience in education", MAX), Some(10));
    }

    #[test]
    fn test_experience_then_years() {
        assert_eq!(extract_years("Experience: 12 years", MAX), Some(12));
    }

    #[test]
    fn test_professional_experience() {
        assert_eq!(
            extract_years("professional experience of 8 years abroad", MAX),
            Some(8)
        );
    }

    #[test]
    fn test_bounds_are_exclusive() {
        assert_eq!(extract_years("0 years of experience", MAX), None);
        assert_eq!(extract_years("49 years of experience", MAX), Some(49));
        assert_eq!(extract_years("50 years of experience", MAX), None);
        assert_eq!(extract_years("51 years of experience", MAX), None);
    }

    #[test]
    fn test_out_of_range_falls_through_to_later_match() {
        let text = "51 years of experience on paper, really 20 years of experience";
        assert_eq!(extract_years(text, MAX), Some(20));
    }

    #[test]
    fn test_no_experience_mention() {
        assert_eq!(extract_years("taught English in Busan", MAX), None);
    }
}
