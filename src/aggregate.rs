//! Merging of per-site result sequences.

use crate::models::ArticleRecord;

/// Concatenate two result sequences: all of `first`, then all of `second`.
///
/// No filtering, sorting or deduplication.
pub fn combine(mut first: Vec<ArticleRecord>, second: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    first.extend(second);
    first
}

/// Fold any number of per-site sequences together in iteration order.
pub fn combine_all<I>(per_site: I) -> Vec<ArticleRecord>
where
    I: IntoIterator<Item = Vec<ArticleRecord>>,
{
    per_site.into_iter().fold(Vec::new(), combine)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(prefix: &str, n: usize) -> Vec<ArticleRecord> {
        (0..n)
            .map(|i| ArticleRecord::new(format!("/{prefix}{i}"), format!("{prefix} {i}"), ""))
            .collect()
    }

    #[test]
    fn test_combine_keeps_first_then_second() {
        let a = records("a", 3);
        let b = records("b", 2);
        let combined = combine(a.clone(), b.clone());

        assert_eq!(combined.len(), 5);
        assert_eq!(&combined[..3], &a[..]);
        assert_eq!(&combined[3..], &b[..]);
    }

    #[test]
    fn test_combine_is_not_commutative() {
        let a = records("a", 1);
        let b = records("b", 1);
        assert_ne!(combine(a.clone(), b.clone()), combine(b, a));
    }

    #[test]
    fn test_combine_keeps_duplicates() {
        let same = records("x", 1);
        let combined = combine(same.clone(), same);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0], combined[1]);
    }

    #[test]
    fn test_combine_all() {
        let combined = combine_all(vec![records("a", 2), Vec::new(), records("c", 1)]);
        let links: Vec<&str> = combined.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(links, vec!["/a0", "/a1", "/c0"]);

        assert!(combine_all(Vec::<Vec<ArticleRecord>>::new()).is_empty());
    }
}
