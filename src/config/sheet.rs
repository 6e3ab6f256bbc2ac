use crate::core::form::{Field, FormState};
use crate::domain::model::{Episode, Podcast};
use crate::domain::ports::{Clock, ProfileProvider};
use crate::utils::error::{Result, ShowmailError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A whole episode written down as TOML, the batch-mode counterpart of
/// typing fields in one by one. Missing fields parse as empty strings and
/// simply leave their section not ready.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeSheet {
    #[serde(default)]
    pub username: Option<String>,
    /// Overrides the computed broadcast day, for re-rendering past episodes.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub clip_count: Option<u8>,
    #[serde(default)]
    pub episode: Option<Episode>,
    #[serde(default)]
    pub clips: Vec<SheetClip>,
    #[serde(default)]
    pub podcast: Option<Podcast>,
}

/// Clip as written in a sheet; slot numbers follow file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetClip {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uuid: String,
}

impl EpisodeSheet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShowmailError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShowmailError::SheetError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Plays the sheet into a form as field events, the same path
    /// interactive input takes.
    pub fn populate<P: ProfileProvider, C: Clock>(&self, form: &mut FormState<P, C>) {
        if let Some(count) = self.clip_count {
            form.set_clip_count(count);
        }
        if let Some(username) = &self.username {
            form.set(Field::Username, username);
        }
        if self.date.is_some() {
            form.set_date_override(self.date);
        }
        if let Some(episode) = &self.episode {
            form.set(Field::EpisodeTitle, &episode.title);
            form.set(Field::EpisodeSeason, &episode.season);
            form.set(Field::EpisodeNumber, &episode.number);
            form.set(Field::EpisodeUuid, &episode.uuid);
        }
        for (index, clip) in self.clips.iter().enumerate() {
            let slot = (index + 1) as u8;
            form.set(Field::ClipTitle(slot), &clip.title);
            form.set(Field::ClipDescription(slot), &clip.description);
            form.set(Field::ClipUuid(slot), &clip.uuid);
        }
        if let Some(podcast) = &self.podcast {
            form.set(Field::PodcastTitle, &podcast.title);
            form.set(Field::PodcastDescription, &podcast.description);
            form.set(Field::PrerollAdvertisers, &podcast.preroll_advertisers);
            form.set(Field::AdLocations, &podcast.ad_locations);
            form.set(Field::MidrollAdvertisers, &podcast.midroll_advertisers);
            form.set(Field::PostrollAdvertisers, &podcast.postroll_advertisers);
        }
    }
}
