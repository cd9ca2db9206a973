//! Canonical service categories and the built-in alias vocabulary.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Canonical service category.
///
/// Each tag carries a matching token: a stem that vendor `service_type`
/// strings are compared against by containment, so `Photograph` matches both
/// `photographer` and `wedding_photography`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTag {
    Photograph,
    Videograph,
    Dj,
    Makeup,
    Mehndi,
    Catering,
    Decor,
    Planner,
    Venue,
    Band,
    Florist,
    Anchor,
    Choreograph,
    Invitation,
    Transport,
}

impl ServiceTag {
    pub const ALL: [ServiceTag; 15] = [
        ServiceTag::Photograph,
        ServiceTag::Videograph,
        ServiceTag::Dj,
        ServiceTag::Makeup,
        ServiceTag::Mehndi,
        ServiceTag::Catering,
        ServiceTag::Decor,
        ServiceTag::Planner,
        ServiceTag::Venue,
        ServiceTag::Band,
        ServiceTag::Florist,
        ServiceTag::Anchor,
        ServiceTag::Choreograph,
        ServiceTag::Invitation,
        ServiceTag::Transport,
    ];

    /// Stable identifier, identical to the serde representation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ServiceTag::Catering => "catering",
            other => other.token(),
        }
    }

    /// Stem used for substring/prefix matching against vendor tags.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            ServiceTag::Photograph => "photograph",
            ServiceTag::Videograph => "videograph",
            ServiceTag::Dj => "dj",
            ServiceTag::Makeup => "makeup",
            ServiceTag::Mehndi => "mehndi",
            ServiceTag::Catering => "cater",
            ServiceTag::Decor => "decor",
            ServiceTag::Planner => "planner",
            ServiceTag::Venue => "venue",
            ServiceTag::Band => "band",
            ServiceTag::Florist => "florist",
            ServiceTag::Anchor => "anchor",
            ServiceTag::Choreograph => "choreograph",
            ServiceTag::Invitation => "invitation",
            ServiceTag::Transport => "transport",
        }
    }
}

impl std::fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ServiceTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ServiceTag::ALL
            .into_iter()
            .find(|tag| tag.name() == needle || tag.token() == needle)
            .ok_or_else(|| CoreError::InvalidServiceTag(s.to_string()))
    }
}

/// Colloquial search terms mapped to canonical tags.
///
/// Entries are already in normalized form: lowercase, no punctuation, single
/// spaces.
pub const DEFAULT_ALIASES: &[(&str, ServiceTag)] = &[
    // Photography
    ("photographer", ServiceTag::Photograph),
    ("photographers", ServiceTag::Photograph),
    ("photography", ServiceTag::Photograph),
    ("photo", ServiceTag::Photograph),
    ("photos", ServiceTag::Photograph),
    ("cameraman", ServiceTag::Photograph),
    ("camera man", ServiceTag::Photograph),
    ("candid photographer", ServiceTag::Photograph),
    ("pre wedding shoot", ServiceTag::Photograph),
    // Video
    ("videographer", ServiceTag::Videograph),
    ("videography", ServiceTag::Videograph),
    ("video", ServiceTag::Videograph),
    ("cinematographer", ServiceTag::Videograph),
    ("cinematography", ServiceTag::Videograph),
    ("wedding films", ServiceTag::Videograph),
    // Music
    ("dj", ServiceTag::Dj),
    ("djs", ServiceTag::Dj),
    ("deejay", ServiceTag::Dj),
    ("disc jockey", ServiceTag::Dj),
    ("band", ServiceTag::Band),
    ("live band", ServiceTag::Band),
    ("band baja", ServiceTag::Band),
    ("baja", ServiceTag::Band),
    ("dhol", ServiceTag::Band),
    ("orchestra", ServiceTag::Band),
    // Beauty
    ("makeup", ServiceTag::Makeup),
    ("make up", ServiceTag::Makeup),
    ("makeup artist", ServiceTag::Makeup),
    ("make up artist", ServiceTag::Makeup),
    ("mua", ServiceTag::Makeup),
    ("bridal makeup", ServiceTag::Makeup),
    ("beautician", ServiceTag::Makeup),
    ("mehndi", ServiceTag::Mehndi),
    ("mehendi", ServiceTag::Mehndi),
    ("henna", ServiceTag::Mehndi),
    ("mehndi artist", ServiceTag::Mehndi),
    // Food
    ("caterer", ServiceTag::Catering),
    ("caterers", ServiceTag::Catering),
    ("catering", ServiceTag::Catering),
    ("halwai", ServiceTag::Catering),
    ("food", ServiceTag::Catering),
    // Setup
    ("decorator", ServiceTag::Decor),
    ("decorators", ServiceTag::Decor),
    ("decoration", ServiceTag::Decor),
    ("decor", ServiceTag::Decor),
    ("tent house", ServiceTag::Decor),
    ("florist", ServiceTag::Florist),
    ("flowers", ServiceTag::Florist),
    ("flower shop", ServiceTag::Florist),
    ("venue", ServiceTag::Venue),
    ("venues", ServiceTag::Venue),
    ("banquet", ServiceTag::Venue),
    ("banquet hall", ServiceTag::Venue),
    ("marriage garden", ServiceTag::Venue),
    ("marriage hall", ServiceTag::Venue),
    ("resort", ServiceTag::Venue),
    // Coordination
    ("planner", ServiceTag::Planner),
    ("wedding planner", ServiceTag::Planner),
    ("event planner", ServiceTag::Planner),
    ("event management", ServiceTag::Planner),
    ("event manager", ServiceTag::Planner),
    ("organizer", ServiceTag::Planner),
    ("organiser", ServiceTag::Planner),
    ("anchor", ServiceTag::Anchor),
    ("emcee", ServiceTag::Anchor),
    ("host", ServiceTag::Anchor),
    ("choreographer", ServiceTag::Choreograph),
    ("sangeet choreographer", ServiceTag::Choreograph),
    ("dance", ServiceTag::Choreograph),
    ("invitation", ServiceTag::Invitation),
    ("invitations", ServiceTag::Invitation),
    ("wedding cards", ServiceTag::Invitation),
    ("card printing", ServiceTag::Invitation),
    ("transport", ServiceTag::Transport),
    ("car rental", ServiceTag::Transport),
    ("wedding car", ServiceTag::Transport),
    ("vintage car", ServiceTag::Transport),
];
