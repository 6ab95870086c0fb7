use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RosterId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterKind {
    Contestants,
    Guests,
    Organizers,
}

impl RosterKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Contestants => "Competing rappers",
            Self::Guests => "Special guests",
            Self::Organizers => "Event made by",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Youtube,
    Kick,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
            Self::Kick => "Kick",
        }
    }
}

/// Outbound profile links of a roster entry. Absent links are `None`, never
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kick: Option<String>,
}

impl SocialLinks {
    pub fn new(instagram: &str, youtube: &str, kick: &str) -> Self {
        Self {
            instagram: non_empty(instagram),
            youtube: non_empty(youtube),
            kick: non_empty(kick),
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Instagram => self.instagram.as_deref(),
            Platform::Youtube => self.youtube.as_deref(),
            Platform::Kick => self.kick.as_deref(),
        }
    }

    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        [Platform::Instagram, Platform::Youtube, Platform::Kick]
            .into_iter()
            .filter_map(|platform| self.get(platform).map(|url| (platform, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterItem {
    pub id: RosterId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub image_url: String,
    pub links: SocialLinks,
    /// Highlighted on the page (gold frame).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}
