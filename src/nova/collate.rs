//! String ordering used for sorting tables
//!
//! Names are compared on an accent-folded, lowercased key first ("Éclair"
//! sorts with "eclair", between "Amazon" and "Zoom"). Case and accents only
//! break ties, and a final byte-wise comparison keeps the order total.

use deunicode::deunicode;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Accent-folded, lowercased primary key
fn fold(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Case- and accent-insensitive comparison with a total tie-break
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| tie_break(a, b))
}

fn tie_break(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Like [`collate`], but embedded digit runs compare by value
/// ("Folder 2" < "Folder 10")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a_key, b_key) = (fold(a), fold(b));
    let mut left = a_key.chars().peekable();
    let mut right = b_key.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let lhs = lhs.trim_start_matches('0');
                let rhs = rhs.trim_start_matches('0');
                let ord = lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                left.next();
                right.next();
            }
        }
    }

    tie_break(a, b)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_case() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zoom", "alarm"), Ordering::Greater);
    }

    #[test]
    fn test_collate_is_total() {
        assert_ne!(collate("Maps", "maps"), Ordering::Equal);
        assert_eq!(collate("Maps", "Maps"), Ordering::Equal);
    }

    #[test]
    fn test_collate_folds_accents() {
        assert_eq!(collate("Éclair", "Zoom"), Ordering::Less);
        assert_eq!(collate("Amazon", "Éclair"), Ordering::Less);
        assert_eq!(collate("éclair", "Eclair"), Ordering::Greater);
        assert_ne!(collate("Eclair", "Éclair"), Ordering::Equal);
    }

    #[test]
    fn test_natural_folds_accents() {
        let mut names = vec!["Zoom", "Éclair 10", "Amazon", "eclair 9"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Amazon", "eclair 9", "Éclair 10", "Zoom"]);
    }

    #[test]
    fn test_natural_numbers() {
        assert_eq!(natural_cmp("Folder 2", "Folder 10"), Ordering::Less);
        assert_eq!(natural_cmp("Folder 10", "Folder 9"), Ordering::Greater);
        assert_eq!(natural_cmp("id=007", "id=7"), Ordering::Less);
        assert_eq!(natural_cmp("a1b2", "a1b10"), Ordering::Less);
    }

    #[test]
    fn test_natural_case_and_prefix() {
        assert_eq!(natural_cmp("camera", "Clock"), Ordering::Less);
        assert_eq!(natural_cmp("Cam", "Camera"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_natural_sorts_list() {
        let mut names = vec!["Item 10", "item 2", "Item 1", "Alpha"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["Alpha", "Item 1", "item 2", "Item 10"]);
    }
}
