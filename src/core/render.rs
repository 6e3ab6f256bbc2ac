use crate::core::escape::script_quote;
use crate::core::guests::parse_guests;
use crate::core::slug::{slugify, strip_leading_zeros};
use crate::domain::model::{Clip, Episode, Podcast};
use crate::domain::ports::ProfileProvider;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Turns raw field values into page URLs and mail bodies. Every method is a
/// pure formatting function of its inputs plus the show profile: an
/// incomplete upstream field yields `None`, never an error.
pub struct Renderer<P: ProfileProvider> {
    profile: P,
}

impl<P: ProfileProvider> Renderer<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    fn site_base(&self) -> &str {
        self.profile.site_base_url().trim_end_matches('/')
    }

    fn show_slug(&self) -> String {
        slugify(self.profile.show_name())
    }

    pub fn episode_url(&self, episode: &Episode) -> Option<String> {
        if blank(&episode.title)
            || blank(&episode.season)
            || blank(&episode.number)
            || blank(&episode.uuid)
        {
            return None;
        }
        Some(format!(
            "{}/full-episodes/{}/{}-{}-season-{}-ep-{}",
            self.site_base(),
            episode.uuid,
            self.show_slug(),
            slugify(&episode.title),
            strip_leading_zeros(&episode.season),
            strip_leading_zeros(&episode.number),
        ))
    }

    pub fn clip_url(&self, clip: &Clip) -> Option<String> {
        if blank(&clip.title) || blank(&clip.uuid) {
            return None;
        }
        Some(format!(
            "{}/episode-clips/{}/{}-{}",
            self.site_base(),
            clip.uuid,
            self.show_slug(),
            slugify(&clip.title),
        ))
    }

    pub fn full_episode_line(&self, episode: &Episode) -> Option<String> {
        Some(format!("Full Episode: {}", self.episode_url(episode)?))
    }

    pub fn full_episode_script_line(&self, episode: &Episode) -> Option<String> {
        let url = self.episode_url(episode)?;
        Some(format!(
            "<b>Full Episode:</b> <a href='\\''{0}'\\''>{0}</a>",
            url
        ))
    }

    /// One line of the publish email. An `" - Extended"` title wins;
    /// otherwise a clip naming one of the episode guests is the non-extended
    /// cut, and the rest go out under their slot number.
    pub fn clip_publish_line(&self, clip: &Clip, guest_list: Option<&[String]>) -> Option<String> {
        let url = self.clip_url(clip)?;
        if clip.is_extended() {
            return Some(format!("Extended: {}", url));
        }
        let names_guest = guest_list
            .map(|guests| guests.iter().any(|guest| clip.title.contains(guest.as_str())))
            .unwrap_or(false);
        if names_guest {
            Some(format!("Non-extended: {}", url))
        } else {
            Some(format!("Clip {}: {}", clip.number, url))
        }
    }

    pub fn publish_email(&self, episode: &Episode, clips: &[Clip]) -> Option<String> {
        let full_line = self.full_episode_line(episode)?;
        let guests = parse_guests(&episode.title);
        let lines = clips
            .iter()
            .map(|clip| self.clip_publish_line(clip, guests.as_deref()))
            .collect::<Option<Vec<_>>>()?;
        Some(format!("{}\n\n{}", full_line, lines.join("\n")))
    }

    pub fn publish_note(&self, username: &str) -> Option<String> {
        if blank(username) {
            return None;
        }
        Some(format!(
            "Hey all,<p>The {} page has updated and is now reflecting tonight's content!<p>Best,<br>{}",
            self.profile.show_name(),
            username
        ))
    }

    pub fn clip_site_block(&self, clip: &Clip) -> Option<String> {
        if blank(&clip.description) {
            return None;
        }
        Some(format!(
            "{}\n{}\n{}\n",
            clip.title,
            clip.description,
            self.clip_url(clip)?
        ))
    }

    pub fn clip_site_script_block(&self, clip: &Clip) -> Option<String> {
        if blank(&clip.description) {
            return None;
        }
        let url = self.clip_url(clip)?;
        Some(format!(
            "<b>{0}</b><br><i>{1}</i><br><a href='\\''{2}'\\''>{2}</a>",
            script_quote(&clip.title),
            script_quote(&clip.description),
            script_quote(&url),
        ))
    }

    pub fn site_subject(&self, date: &str, guest_display: Option<&str>) -> String {
        let subject = match guest_display {
            Some(guests) => format!(
                "[NEW CLIPS] {} - {} - {}",
                self.profile.show_name(),
                date,
                guests
            ),
            None => format!("[NEW CLIPS] {} - {}", self.profile.show_name(), date),
        };
        subject.trim_end().to_string()
    }

    pub fn site_body(
        &self,
        episode: &Episode,
        clips: &[Clip],
        date: &str,
        username: &str,
    ) -> Option<String> {
        if blank(username) {
            return None;
        }
        let full_line = self.full_episode_line(episode)?;
        let blocks = clips
            .iter()
            .map(|clip| self.clip_site_block(clip))
            .collect::<Option<Vec<_>>>()?;
        Some(format!(
            "Good morning,\n\nBelow are clips for the {} episode of {}!\n\n{}\n\n{}\n\nBest,\n{}",
            date,
            self.profile.show_name(),
            blocks.join("\n"),
            full_line,
            username
        ))
    }

    pub fn site_script_body(
        &self,
        episode: &Episode,
        clips: &[Clip],
        date: &str,
        username: &str,
    ) -> Option<String> {
        if blank(username) {
            return None;
        }
        let full_line = self.full_episode_script_line(episode)?;
        let blocks = clips
            .iter()
            .map(|clip| self.clip_site_script_block(clip))
            .collect::<Option<Vec<_>>>()?;
        Some(format!(
            "Good morning,<p>Below are clips for the {} episode of {}!<p>{}<p>{}<p>Best,<br>{}",
            date,
            self.profile.show_name(),
            blocks.join("<p>"),
            full_line,
            username
        ))
    }

    /// Site-script variant for the download mailbox: the full-episode anchor
    /// gains a Download Here label.
    pub fn download_notice_body(
        &self,
        episode: &Episode,
        clips: &[Clip],
        date: &str,
        username: &str,
    ) -> Option<String> {
        let body = self.site_script_body(episode, clips, date, username)?;
        Some(body.replace(
            "<b>Full Episode:</b>",
            "<b>Download Here:</b> <p><b>Full Episode:</b>",
        ))
    }

    pub fn podcast_subject(&self, podcast: &Podcast, date: &str) -> Option<String> {
        if blank(&podcast.title) {
            return None;
        }
        Some(
            format!(
                "{} Podcast - {}: {}",
                self.profile.show_name(),
                date,
                podcast.title
            )
            .trim_end()
            .to_string(),
        )
    }

    fn podcast_complete(podcast: &Podcast) -> bool {
        !blank(&podcast.title)
            && !blank(&podcast.description)
            && !blank(&podcast.preroll_advertisers)
            && !blank(&podcast.midroll_advertisers)
            && !blank(&podcast.postroll_advertisers)
    }

    /// Splits the raw timestamp list into the mid-roll locations (joined
    /// back with `", "`) and the final post-roll location.
    fn split_ad_locations(raw: &str) -> Option<(String, String)> {
        let locations: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
            .collect();
        let (post, mids) = locations.split_last()?;
        Some((mids.join(", "), post.to_string()))
    }

    pub fn podcast_body(&self, podcast: &Podcast, username: &str) -> Option<String> {
        if blank(username) || !Self::podcast_complete(podcast) {
            return None;
        }
        let (midroll_locations, postroll_location) =
            Self::split_ad_locations(&podcast.ad_locations)?;
        Some(format!(
            "Hey all,\n\nTonight's podcast episode information below:\n\n{}\n{}\n\nAd Pre-Roll: 00:05 - {}\nAd Mid-Roll: {} - {}\nAd Post-Roll: {} - {}\nURL: {}\n\nBest,\n{}",
            podcast.title,
            podcast.description,
            podcast.preroll_advertisers,
            midroll_locations,
            podcast.midroll_advertisers,
            postroll_location,
            podcast.postroll_advertisers,
            self.profile.podcast_feed_url(),
            username
        ))
    }

    pub fn podcast_script_body(&self, podcast: &Podcast, username: &str) -> Option<String> {
        if blank(username) || !Self::podcast_complete(podcast) {
            return None;
        }
        let (midroll_locations, postroll_location) =
            Self::split_ad_locations(&podcast.ad_locations)?;
        Some(format!(
            "Hey all,<p>Tonight'\\''s podcast episode information below:<p><b>{0}</b><br><i>{1}</i><p><i>Ad Pre-Roll:</i> 00:05 - {2}<br><i>Ad Mid-Roll:</i> {3} - {4}<br><i>Ad Post-Roll:</i> {5} - {6}<br><i>URL:</i> <a href='\\''{7}'\\''>{7}</a><p>Best,<br>{8}",
            script_quote(&podcast.title),
            script_quote(&podcast.description),
            podcast.preroll_advertisers,
            midroll_locations,
            podcast.midroll_advertisers,
            postroll_location,
            podcast.postroll_advertisers,
            self.profile.podcast_feed_url(),
            username
        ))
    }

    /// The complete osascript invocation that would open a prefilled Outlook
    /// message. Built as a string only; running it is the caller's business.
    /// `content` is expected to already be a script-escaped body.
    pub fn outlook_script(&self, subject: &str, content: &str, recipient: &str) -> String {
        format!(
            "/usr/bin/osascript \
-e 'tell application \"Microsoft Outlook.app\"' \
-e 'set newMessage to make new outgoing message with properties {{subject: \"{}\", content: \"{}\"}}' \
-e 'make new recipient at newMessage with properties {{email address:{{name:\"{}\"}}}}' \
-e 'open newMessage' -e 'end tell'",
            subject, content, recipient
        )
    }
}
