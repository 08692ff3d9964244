use std::cmp::Ordering;
use thiserror::Error;

/// Error returned by [`VersionComparator::compare_strict`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version string is empty")]
    Empty,
    #[error("segment {index} of \"{version}\" is not numeric: \"{segment}\"")]
    NonNumericSegment {
        version: String,
        index: usize,
        segment: String,
    },
}

/// VersionComparator - pragmatic dotted-numeric version ordering
///
/// This is deliberately not semver. `-` is read as `.` (`"2.4.6-602"` is
/// `"2.4.6.602"`), and a version with more segments than the other one is
/// ordered below it: the catalog usually carries the more specific string,
/// so a shorter installed version counts as not yet having reached it.
pub struct VersionComparator;

impl VersionComparator {
    /// Lenient comparison used throughout matching.
    ///
    /// Rules, walking the segments of `v1`:
    /// - once the index runs past the end of `v2`, `v1` is `Less`
    /// - a segment pair that does not both parse as unsigned integers is
    ///   compared as strings and that result is returned immediately
    /// - a numerically greater segment returns `Greater`, a smaller one `Less`
    /// - equal final segment of `v1` returns `Equal` only when both versions
    ///   have the same segment count, else `Less`
    ///
    /// An empty `v1` is `Less` than anything. Never fails.
    pub fn compare(v1: &str, v2: &str) -> Ordering {
        if v1.is_empty() {
            return Ordering::Less;
        }

        let v1 = v1.replace('-', ".");
        let v2 = v2.replace('-', ".");
        let left: Vec<&str> = v1.split('.').collect();
        let right: Vec<&str> = v2.split('.').collect();

        for (index, left_segment) in left.iter().enumerate() {
            let Some(right_segment) = right.get(index) else {
                return Ordering::Less;
            };

            let (Ok(a), Ok(b)) = (left_segment.parse::<u64>(), right_segment.parse::<u64>()) else {
                return left_segment.cmp(right_segment);
            };

            match a.cmp(&b) {
                Ordering::Equal if index + 1 == left.len() => {
                    return if left.len() == right.len() {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    };
                }
                Ordering::Equal => {}
                ordering => return ordering,
            }
        }

        Ordering::Less
    }

    /// Same ordering as [`compare`](Self::compare), but refuses input the
    /// lenient variant would silently degrade: empty strings and non-numeric
    /// segments.
    pub fn compare_strict(v1: &str, v2: &str) -> Result<Ordering, VersionParseError> {
        Self::validate(v1)?;
        Self::validate(v2)?;
        Ok(Self::compare(v1, v2))
    }

    /// `candidate` is strictly higher than `current`
    pub fn is_higher(candidate: &str, current: &str) -> bool {
        Self::compare(candidate, current) == Ordering::Greater
    }

    /// Versions are equal under the lenient comparison
    pub fn is_same(v1: &str, v2: &str) -> bool {
        Self::compare(v1, v2) == Ordering::Equal
    }

    /// Comparison as the classic `-1 / 0 / +1` integer
    pub fn compare_as_int(v1: &str, v2: &str) -> i32 {
        match Self::compare(v1, v2) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    fn validate(version: &str) -> Result<(), VersionParseError> {
        if version.is_empty() {
            return Err(VersionParseError::Empty);
        }
        let normalized = version.replace('-', ".");
        for (index, segment) in normalized.split('.').enumerate() {
            if segment.parse::<u64>().is_err() {
                return Err(VersionParseError::NonNumericSegment {
                    version: version.to_string(),
                    index,
                    segment: segment.to_string(),
                });
            }
        }
        Ok(())
    }
}
