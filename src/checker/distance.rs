use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Lookahead window used by [`Sift3`] when resynchronizing after a mismatch
const SIFT3_MAX_OFFSET: usize = 5;

/// Lookahead window used by [`Sift4`] when resynchronizing after a mismatch
const SIFT4_MAX_OFFSET: usize = 4;

/// Approximate string distance: lower is more similar, 0 means identical.
///
/// Implemented by [`Sift3`], [`Sift4`] and any `Fn(&str, &str) -> f64` closure, so callers
/// can plug their own metric into a [`MailChecker`](crate::MailChecker).
pub trait Distance: Send + Sync {
    fn distance(&self, s1: &str, s2: &str) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn distance(&self, s1: &str, s2: &str) -> f64 {
        self(s1, s2)
    }
}

/// Single shared cursor with per-string offsets, scored as the mean length minus matches
#[derive(Debug, Clone, Copy, Default)]
pub struct Sift3;

/// Dual cursors with transposition snapping, scored as the longer length minus matches
#[derive(Debug, Clone, Copy, Default)]
pub struct Sift4;

impl Distance for Sift3 {
    fn distance(&self, s1: &str, s2: &str) -> f64 {
        sift3(s1, s2)
    }
}

impl Distance for Sift4 {
    fn distance(&self, s1: &str, s2: &str) -> f64 {
        sift4(s1, s2)
    }
}

/// Named distance functions selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKind {
    Sift3,
    #[default]
    Sift4,
}

impl DistanceKind {
    pub fn build(self) -> Box<dyn Distance> {
        match self {
            DistanceKind::Sift3 => Box::new(Sift3),
            DistanceKind::Sift4 => Box::new(Sift4),
        }
    }
}

impl FromStr for DistanceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sift3" => Ok(DistanceKind::Sift3),
            "sift4" => Ok(DistanceKind::Sift4),
            _ => Err(ConfigError::UnknownDistance(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceKind::Sift3 => write!(f, "sift3"),
            DistanceKind::Sift4 => write!(f, "sift4"),
        }
    }
}

/// Distance when at least one side is empty, `None` otherwise
fn empty_distance(a: &[char], b: &[char]) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => Some(b.len() as f64),
        (false, true) => Some(a.len() as f64),
        (false, false) => None,
    }
}

/// Sift3 string distance.
///
/// On a mismatch the offsets are reset and the first resynchronization point inside the
/// lookahead window wins, even if a later one would align better.
pub fn sift3(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if let Some(d) = empty_distance(&a, &b) {
        return d;
    }

    let mut c = 0;
    let mut offset1 = 0;
    let mut offset2 = 0;
    let mut lcs = 0usize;

    while c + offset1 < a.len() && c + offset2 < b.len() {
        if a[c + offset1] == b[c + offset2] {
            lcs += 1;
        } else {
            offset1 = 0;
            offset2 = 0;
            for i in 0..SIFT3_MAX_OFFSET {
                if c + i < a.len() && a[c + i] == b[c] {
                    offset1 = i;
                    break;
                }
                if c + i < b.len() && a[c] == b[c + i] {
                    offset2 = i;
                    break;
                }
            }
        }
        c += 1;
    }

    (a.len() + b.len()) as f64 / 2.0 - lcs as f64
}

/// Sift4 string distance (simplest variant).
///
/// Diverged cursors snap to the furthest one on a mismatch, so adjacent transpositions
/// cost a single edit instead of two.
pub fn sift4(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if let Some(d) = empty_distance(&a, &b) {
        return d;
    }

    let (l1, l2) = (a.len(), b.len());
    let mut c1 = 0;
    let mut c2 = 0;
    let mut lcss = 0usize;
    let mut local_cs = 0usize;

    while c1 < l1 && c2 < l2 {
        if a[c1] == b[c2] {
            local_cs += 1;
        } else {
            lcss += local_cs;
            local_cs = 0;
            if c1 != c2 {
                c1 = c1.max(c2);
                c2 = c1;
            }
            // after snapping, one cursor may sit past its string's end
            for i in 0..SIFT4_MAX_OFFSET {
                if c1 + i < l1 && a.get(c1 + i) == b.get(c2) {
                    c1 += i;
                    local_cs += 1;
                    break;
                }
                if c2 + i < l2 && a.get(c1) == b.get(c2 + i) {
                    c2 += i;
                    local_cs += 1;
                    break;
                }
            }
        }
        c1 += 1;
        c2 += 1;
    }
    lcss += local_cs;

    (l1.max(l2) as f64 - lcss as f64).round()
}
