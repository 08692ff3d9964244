/// VersionAxis - how a catalog axis is derived from an installed version
///
/// The installed version has `-` rewritten to `.` first, then the leading
/// segments are joined back with `.`:
/// `"2.4.6-602"` → `MajorMinorPatch` → `"2.4.6"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAxis {
    Major,
    MajorMinor,
    MajorMinorPatch,
}

impl VersionAxis {
    fn segment_count(self) -> usize {
        match self {
            VersionAxis::Major => 1,
            VersionAxis::MajorMinor => 2,
            VersionAxis::MajorMinorPatch => 3,
        }
    }

    /// Axis string for `version`, or `None` when the version has too few segments
    pub fn derive(self, version: &str) -> Option<String> {
        let normalized = version.trim().replace('-', ".");
        let segments: Vec<&str> = normalized.split('.').collect();
        let count = self.segment_count();

        if segments.len() < count || segments[..count].iter().any(|s| s.is_empty()) {
            return None;
        }

        Some(segments[..count].join("."))
    }
}
