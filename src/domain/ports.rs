use crate::utils::error::Result;
use chrono::{DateTime, Local};

/// Source of the current local time, so date-dependent output stays testable.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant, for deterministic renders in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Show-level settings the templates interpolate. Implemented by the TOML
/// profile and by the CLI flag set.
pub trait ProfileProvider {
    fn site_base_url(&self) -> &str;
    fn show_name(&self) -> &str;
    fn podcast_feed_url(&self) -> &str;
    /// Inclusive (min, max) bounds for the clip count.
    fn clip_range(&self) -> (u8, u8);
    fn default_clip_count(&self) -> u8;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
