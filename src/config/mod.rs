pub mod profile;
pub mod sheet;
pub mod storage;

#[cfg(feature = "cli")]
use crate::domain::ports::ProfileProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "showmail")]
#[command(about = "Formats episode and podcast metadata into page URLs and mail bodies")]
pub struct CliConfig {
    /// Episode sheet (TOML) to render on top of the field flags
    #[arg(long)]
    pub sheet: Option<String>,

    /// Show profile (TOML); without it the flag defaults below apply
    #[arg(long)]
    pub profile: Option<String>,

    /// Episode title; a trailing " - Guest" segment names the guests
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub season: Option<String>,

    #[arg(long)]
    pub number: Option<String>,

    #[arg(long)]
    pub uuid: Option<String>,

    /// Signature name for the mail bodies (First Last)
    #[arg(long)]
    pub username: Option<String>,

    /// Broadcast date override (YYYY-MM-DD); otherwise computed from the clock
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Clip as 'TITLE|DESCRIPTION|UUID'; repeat once per slot
    #[arg(long = "clip")]
    pub clips: Vec<String>,

    #[arg(long)]
    pub clip_count: Option<u8>,

    #[arg(long)]
    pub pod_title: Option<String>,

    #[arg(long)]
    pub pod_description: Option<String>,

    #[arg(long)]
    pub preroll: Option<String>,

    /// Comma-separated ad timestamps; the last one is the post-roll location
    #[arg(long)]
    pub ad_locations: Option<String>,

    #[arg(long)]
    pub midroll: Option<String>,

    #[arg(long)]
    pub postroll: Option<String>,

    #[arg(long, default_value = "https://www.website.com")]
    pub site_url: String,

    #[arg(long, default_value = "The Episode")]
    pub show_name: String,

    #[arg(
        long,
        default_value = "https://itunes.apple.com/us/podcast/the-episode-podcast/id1234567890?mt=2"
    )]
    pub feed_url: String,

    /// Emit the output snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Write each rendered target into this directory
    #[arg(long)]
    pub out_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ProfileProvider for CliConfig {
    fn site_base_url(&self) -> &str {
        &self.site_url
    }

    fn show_name(&self) -> &str {
        &self.show_name
    }

    fn podcast_feed_url(&self) -> &str {
        &self.feed_url
    }

    fn clip_range(&self) -> (u8, u8) {
        let policy = profile::ClipPolicy::default();
        (policy.min, policy.max)
    }

    fn default_clip_count(&self) -> u8 {
        profile::ClipPolicy::default().default
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("site_url", &self.site_url)?;
        validate_url("feed_url", &self.feed_url)?;
        validate_non_empty_string("show_name", &self.show_name)?;

        if let Some(count) = self.clip_count {
            let (min, max) = self.clip_range();
            validate_range("clip_count", count, min, max)?;
        }

        Ok(())
    }
}
