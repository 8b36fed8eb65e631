use crate::config::ConfigError;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Inclusive Unix-second time range selecting which conversations to sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncWindow {
    pub start: i64,
    pub end: i64,
}

impl SyncWindow {
    /// Resolve the query window: an explicit `[start, end]` when both are
    /// supplied, otherwise `[now - hours, now]`.
    pub fn resolve(
        now: i64,
        hours: u64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Self, ConfigError> {
        let window = match (start, end) {
            (Some(start), Some(end)) => SyncWindow { start, end },
            _ => SyncWindow {
                start: now - (hours as i64) * 3600,
                end: now,
            },
        };
        if window.start > window.end {
            return Err(ConfigError::InvalidWindow {
                start: window.start,
                end: window.end,
            });
        }
        Ok(window)
    }

    /// Inclusive containment: conversations starting exactly on either
    /// boundary are in scope.
    pub fn contains(&self, unix_secs: i64) -> bool {
        self.start <= unix_secs && unix_secs <= self.end
    }

    /// Human-readable range for progress output.
    pub fn describe(&self) -> String {
        format!("{} .. {}", format_unix(self.start), format_unix(self.end))
    }
}

fn format_unix(unix_secs: i64) -> String {
    OffsetDateTime::from_unix_timestamp(unix_secs)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| unix_secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_hours_back_from_now() {
        let now = 1_700_000_000;
        let w = SyncWindow::resolve(now, 24, None, None).unwrap();
        assert_eq!(w.start, now - 24 * 3600);
        assert_eq!(w.end, now);
    }

    #[test]
    fn explicit_window_wins_over_hours() {
        let w = SyncWindow::resolve(1_700_000_000, 24, Some(100), Some(200)).unwrap();
        assert_eq!(w, SyncWindow { start: 100, end: 200 });
    }

    #[test]
    fn partial_override_falls_back_to_hours() {
        let now = 1_700_000_000;
        let w = SyncWindow::resolve(now, 2, Some(100), None).unwrap();
        assert_eq!(w.start, now - 2 * 3600);
        assert_eq!(w.end, now);
    }

    #[test]
    fn inverted_window_rejected() {
        let err = SyncWindow::resolve(0, 24, Some(200), Some(100)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWindow { start: 200, end: 100 }
        ));
    }

    #[test]
    fn containment_is_inclusive_on_both_ends() {
        let w = SyncWindow { start: 100, end: 200 };
        assert!(w.contains(100));
        assert!(w.contains(150));
        assert!(w.contains(200));
        assert!(!w.contains(99));
        assert!(!w.contains(201));
    }

    #[test]
    fn describe_renders_rfc3339() {
        let w = SyncWindow {
            start: 1_700_000_000,
            end: 1_700_003_600,
        };
        let text = w.describe();
        assert!(text.starts_with("2023-11-14T22:13:20Z"));
        assert!(text.contains(".."));
    }
}
