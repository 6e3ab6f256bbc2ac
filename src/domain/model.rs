use serde::{Deserialize, Serialize};

/// Raw episode fields as typed into the form. Values are kept as the user's
/// strings; derived values (slug, URL, mail bodies) are computed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub number: u8,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uuid: String,
}

impl Clip {
    pub fn new(number: u8) -> Self {
        Clip {
            number,
            ..Default::default()
        }
    }

    /// A clip participates in output only while its slot is within the
    /// configured clip count.
    pub fn active(&self, clip_count: u8) -> bool {
        self.number <= clip_count
    }

    pub fn is_extended(&self) -> bool {
        self.title.ends_with(" - Extended")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preroll_advertisers: String,
    /// Comma-separated timestamp list; the last entry is the post-roll
    /// location, the rest are mid-roll.
    #[serde(default)]
    pub ad_locations: String,
    #[serde(default)]
    pub midroll_advertisers: String,
    #[serde(default)]
    pub postroll_advertisers: String,
}
