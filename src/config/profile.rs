use crate::domain::ports::ProfileProvider;
use crate::utils::error::{Result, ShowmailError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowProfile {
    pub site: SiteConfig,
    pub show: ShowConfig,
    pub podcast: PodcastFeedConfig,
    #[serde(default)]
    pub clips: ClipPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastFeedConfig {
    pub feed_url: String,
}

/// How many clip slots the form offers and where the slider starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPolicy {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

impl Default for ClipPolicy {
    fn default() -> Self {
        Self {
            min: 3,
            max: 5,
            default: 4,
        }
    }
}

impl Default for ShowProfile {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                base_url: "https://www.website.com".to_string(),
            },
            show: ShowConfig {
                name: "The Episode".to_string(),
            },
            podcast: PodcastFeedConfig {
                feed_url: "https://itunes.apple.com/us/podcast/the-episode-podcast/id1234567890?mt=2"
                    .to_string(),
            },
            clips: ClipPolicy::default(),
        }
    }
}

impl ShowProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShowmailError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ShowmailError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables
    /// are left in place.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("site.base_url", &self.site.base_url)?;
        validate_url("podcast.feed_url", &self.podcast.feed_url)?;
        validate_non_empty_string("show.name", &self.show.name)?;

        if self.clips.min == 0 || self.clips.min > self.clips.max {
            return Err(ShowmailError::InvalidConfigValueError {
                field: "clips".to_string(),
                value: format!("{}..{}", self.clips.min, self.clips.max),
                reason: "min must be at least 1 and no greater than max".to_string(),
            });
        }
        validate_range(
            "clips.default",
            self.clips.default,
            self.clips.min,
            self.clips.max,
        )?;

        Ok(())
    }
}

impl ProfileProvider for ShowProfile {
    fn site_base_url(&self) -> &str {
        &self.site.base_url
    }

    fn show_name(&self) -> &str {
        &self.show.name
    }

    fn podcast_feed_url(&self) -> &str {
        &self.podcast.feed_url
    }

    fn clip_range(&self) -> (u8, u8) {
        (self.clips.min, self.clips.max)
    }

    fn default_clip_count(&self) -> u8 {
        self.clips.default
    }
}

impl Validate for ShowProfile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
