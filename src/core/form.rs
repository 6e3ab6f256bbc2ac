use crate::core::guests::{display_guests, parse_guests};
use crate::core::render::Renderer;
use crate::core::schedule::{broadcast_day, format_day};
use crate::domain::model::{Clip, Episode, Podcast};
use crate::domain::ports::{Clock, ProfileProvider};
use chrono::NaiveDate;
use serde::Serialize;

/// Every input the form knows about. Clip fields carry their slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EpisodeTitle,
    EpisodeSeason,
    EpisodeNumber,
    EpisodeUuid,
    Username,
    ClipCount,
    ClipTitle(u8),
    ClipDescription(u8),
    ClipUuid(u8),
    PodcastTitle,
    PodcastDescription,
    PrerollAdvertisers,
    AdLocations,
    MidrollAdvertisers,
    PostrollAdvertisers,
}

/// Snapshot of every result pane. Each derived string is present only while
/// the fields it draws from are complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outputs {
    pub date: String,
    pub guest: Option<String>,
    pub episode_url: Option<String>,
    pub publish_email: Option<String>,
    pub publish_note: Option<String>,
    pub site_subject: Option<String>,
    pub site_body: Option<String>,
    pub site_script_body: Option<String>,
    pub download_notice_body: Option<String>,
    pub podcast_subject: Option<String>,
    pub podcast_body: Option<String>,
    pub podcast_script_body: Option<String>,
}

/// The form's reactive state, minus the widgets: raw field strings plus the
/// validity tracking that decides which output panes light up. Derived
/// values are recomputed from current fields on every `outputs()` call; no
/// state survives beyond the fields themselves.
pub struct FormState<P: ProfileProvider, C: Clock> {
    renderer: Renderer<P>,
    clock: C,
    episode: Episode,
    podcast: Podcast,
    clips: Vec<Clip>,
    clip_count: u8,
    username: String,
    date_override: Option<NaiveDate>,
}

impl<P: ProfileProvider, C: Clock> FormState<P, C> {
    pub fn new(profile: P, clock: C) -> Self {
        let (_, max) = profile.clip_range();
        let clip_count = profile.default_clip_count();
        Self {
            renderer: Renderer::new(profile),
            clock,
            episode: Episode::default(),
            podcast: Podcast::default(),
            clips: (1..=max).map(Clip::new).collect(),
            clip_count,
            username: String::new(),
            date_override: None,
        }
    }

    /// Applies one field update, the unit of reactivity.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::EpisodeTitle => self.episode.title = value.to_string(),
            Field::EpisodeSeason => self.episode.season = value.to_string(),
            Field::EpisodeNumber => self.episode.number = value.to_string(),
            Field::EpisodeUuid => self.episode.uuid = value.to_string(),
            Field::Username => self.username = value.to_string(),
            Field::ClipCount => {
                if let Ok(count) = value.trim().parse::<u8>() {
                    self.set_clip_count(count);
                } else {
                    tracing::warn!("ignoring unparseable clip count: {:?}", value);
                }
            }
            Field::ClipTitle(slot) => {
                if let Some(clip) = self.clip_mut(slot) {
                    clip.title = value.to_string();
                }
            }
            Field::ClipDescription(slot) => {
                if let Some(clip) = self.clip_mut(slot) {
                    clip.description = value.to_string();
                }
            }
            Field::ClipUuid(slot) => {
                if let Some(clip) = self.clip_mut(slot) {
                    clip.uuid = value.to_string();
                }
            }
            Field::PodcastTitle => self.podcast.title = value.to_string(),
            Field::PodcastDescription => self.podcast.description = value.to_string(),
            Field::PrerollAdvertisers => self.podcast.preroll_advertisers = value.to_string(),
            Field::AdLocations => self.podcast.ad_locations = value.to_string(),
            Field::MidrollAdvertisers => self.podcast.midroll_advertisers = value.to_string(),
            Field::PostrollAdvertisers => self.podcast.postroll_advertisers = value.to_string(),
        }
    }

    /// Clip counts outside the profile's range clamp to its bounds.
    pub fn set_clip_count(&mut self, count: u8) {
        let (min, max) = self.renderer.profile().clip_range();
        self.clip_count = count.clamp(min, max);
    }

    pub fn set_date_override(&mut self, date: Option<NaiveDate>) {
        self.date_override = date;
    }

    fn clip_mut(&mut self, slot: u8) -> Option<&mut Clip> {
        let found = self.clips.iter_mut().find(|clip| clip.number == slot);
        if found.is_none() {
            tracing::warn!("clip slot {} outside the configured range", slot);
        }
        found
    }

    pub fn clip_count(&self) -> u8 {
        self.clip_count
    }

    pub fn active_clips(&self) -> &[Clip] {
        let end = (self.clip_count as usize).min(self.clips.len());
        &self.clips[..end]
    }

    fn filled(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn episode_ready(&self) -> bool {
        Self::filled(&self.episode.title)
            && Self::filled(&self.episode.season)
            && Self::filled(&self.episode.number)
            && Self::filled(&self.episode.uuid)
    }

    pub fn clips_ready(&self) -> bool {
        self.active_clips().iter().all(|clip| {
            Self::filled(&clip.title) && Self::filled(&clip.description) && Self::filled(&clip.uuid)
        })
    }

    pub fn podcast_ready(&self) -> bool {
        Self::filled(&self.podcast.title)
            && Self::filled(&self.podcast.description)
            && Self::filled(&self.podcast.preroll_advertisers)
            && Self::filled(&self.podcast.ad_locations)
            && Self::filled(&self.podcast.midroll_advertisers)
            && Self::filled(&self.podcast.postroll_advertisers)
    }

    pub fn username_ready(&self) -> bool {
        Self::filled(&self.username)
    }

    pub fn broadcast_date(&self) -> NaiveDate {
        self.date_override
            .unwrap_or_else(|| broadcast_day(&self.clock))
    }

    pub fn guest_display(&self) -> Option<String> {
        parse_guests(&self.episode.title).map(|guests| display_guests(&guests))
    }

    pub fn renderer(&self) -> &Renderer<P> {
        &self.renderer
    }

    /// Recomputes every pane from the current field values. Gating mirrors
    /// the readiness rules: the episode URL needs the episode section, the
    /// publish/site mails also need the clips (and a username for signed
    /// bodies), the podcast mails need the podcast section and a username.
    pub fn outputs(&self) -> Outputs {
        let date = format_day(self.broadcast_date());
        let guest = self.guest_display();
        let renderer = &self.renderer;
        let active = self.active_clips();

        let episode_ready = self.episode_ready();
        let clips_ready = self.clips_ready();
        let podcast_ready = self.podcast_ready();
        let username_ready = self.username_ready();

        let episode_url = if episode_ready {
            renderer.episode_url(&self.episode)
        } else {
            None
        };
        let publish_email = if episode_ready && clips_ready {
            renderer.publish_email(&self.episode, active)
        } else {
            None
        };

        let site_unlocked = episode_ready && clips_ready && username_ready;
        let publish_note = if site_unlocked {
            renderer.publish_note(&self.username)
        } else {
            None
        };
        let (site_subject, site_body, site_script_body, download_notice_body) = if site_unlocked {
            (
                Some(renderer.site_subject(&date, guest.as_deref())),
                renderer.site_body(&self.episode, active, &date, &self.username),
                renderer.site_script_body(&self.episode, active, &date, &self.username),
                renderer.download_notice_body(&self.episode, active, &date, &self.username),
            )
        } else {
            (None, None, None, None)
        };

        let (podcast_subject, podcast_body, podcast_script_body) =
            if podcast_ready && username_ready {
                (
                    renderer.podcast_subject(&self.podcast, &date),
                    renderer.podcast_body(&self.podcast, &self.username),
                    renderer.podcast_script_body(&self.podcast, &self.username),
                )
            } else {
                (None, None, None)
            };

        Outputs {
            date,
            guest,
            episode_url,
            publish_email,
            publish_note,
            site_subject,
            site_body,
            site_script_body,
            download_notice_body,
            podcast_subject,
            podcast_body,
            podcast_script_body,
        }
    }
}
