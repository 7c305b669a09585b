use super::distance::Distance;
use crate::config::TOP_LEVEL_THRESHOLD;

/// Starting minimum; entries scoring at or above it are never chosen
const MAX_DISTANCE: f64 = 99.0;

/// Find the reference entry closest to `candidate`.
///
/// An exact entry is returned as soon as it is seen, whatever the threshold. Otherwise the
/// lowest-scoring entry wins (earliest on ties) if its score is within `threshold`, which
/// defaults to [`TOP_LEVEL_THRESHOLD`].
pub fn find_closest_domain<'a>(
    candidate: &str,
    domains: &'a [String],
    distance: &dyn Distance,
    threshold: Option<f64>,
) -> Option<&'a str> {
    if candidate.is_empty() || domains.is_empty() {
        return None;
    }
    let threshold = threshold.unwrap_or(TOP_LEVEL_THRESHOLD);

    let mut min_distance = MAX_DISTANCE;
    let mut closest = None;

    for domain in domains {
        if candidate == domain {
            return Some(domain.as_str());
        }
        let d = distance.distance(candidate, domain);
        tracing::trace!(candidate, domain = domain.as_str(), distance = d, "scored");
        if d < min_distance {
            min_distance = d;
            closest = Some(domain.as_str());
        }
    }

    closest.filter(|_| min_distance <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::distance::{Sift3, Sift4};

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_ignores_threshold() {
        let domains = list(&["yahoo.com", "gmail.com"]);
        assert_eq!(
            find_closest_domain("gmail.com", &domains, &Sift4, Some(0.0)),
            Some("gmail.com")
        );
    }

    #[test]
    fn test_closest_within_threshold() {
        let domains = list(&["google.com", "gmail.com", "aol.com"]);
        assert_eq!(
            find_closest_domain("gmial.com", &domains, &Sift4, Some(2.0)),
            Some("gmail.com")
        );
    }

    #[test]
    fn test_rejects_beyond_threshold() {
        let domains = list(&["gmail.com"]);
        assert_eq!(find_closest_domain("gmial.com", &domains, &Sift3, Some(1.0)), None);
        assert_eq!(
            find_closest_domain("gmial.com", &domains, &Sift3, Some(2.0)),
            Some("gmail.com")
        );
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let domains = list(&["cat", "bat", "hat"]);
        let constant = |_: &str, _: &str| 1.0;
        assert_eq!(find_closest_domain("rat", &domains, &constant, None), Some("cat"));
    }

    #[test]
    fn test_default_threshold() {
        let domains = list(&["abcdef"]);
        let three = |_: &str, _: &str| 3.0;
        let two = |_: &str, _: &str| 2.0;
        assert_eq!(find_closest_domain("x", &domains, &three, None), None);
        assert_eq!(find_closest_domain("x", &domains, &two, None), Some("abcdef"));
    }

    #[test]
    fn test_scores_at_sentinel_never_match() {
        let domains = list(&["far"]);
        let huge = |_: &str, _: &str| 120.0;
        assert_eq!(find_closest_domain("near", &domains, &huge, Some(500.0)), None);
    }

    #[test]
    fn test_empty_inputs() {
        let domains = list(&["gmail.com"]);
        assert_eq!(find_closest_domain("", &domains, &Sift4, None), None);
        assert_eq!(find_closest_domain("gmail.com", &[], &Sift4, None), None);
    }
}
