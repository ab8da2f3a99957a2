//! Case-insensitive substring location over chars.
//!
//! Search and highlighting must agree on what "contains" means, so both go
//! through [`find_ignore_case`]. Positions are char positions, not byte
//! offsets, which is what the highlight index map is keyed by.

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Char position of the first occurrence of `needle` in `haystack`,
/// ignoring case. An empty needle matches at position 0.
pub fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(a, b)| chars_eq_ignore_case(*a, *b))
    })
}

/// Whether `needle` occurs in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    find_ignore_case(&haystack, &needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_ignore_case_positions() {
        assert_eq!(find_ignore_case(&chars("Hello World"), &chars("world")), Some(6));
        assert_eq!(find_ignore_case(&chars("بسم الله"), &chars("الله")), Some(4));
        assert_eq!(find_ignore_case(&chars("abc"), &chars("abcd")), None);
        assert_eq!(find_ignore_case(&chars("abc"), &chars("")), Some(0));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("The MERCIFUL", "merciful"));
        assert!(contains_ignore_case("الرحمن الرحيم", "رحيم"));
        assert!(!contains_ignore_case("الرحمن", "رحيم"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(find_ignore_case(&chars("aXbxc"), &chars("x")), Some(1));
    }
}
