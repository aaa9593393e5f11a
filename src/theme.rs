use serde::{Deserialize, Serialize};

/// Color scheme of the page. Both themes share the same layout and behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Amber,
    Aurora,
}

impl Theme {
    pub fn accent_text(self) -> &'static str {
        match self {
            Self::Amber => "text-yellow-400",
            Self::Aurora => "text-violet-400",
        }
    }

    pub fn accent_hover(self) -> &'static str {
        match self {
            Self::Amber => "hover:text-yellow-300",
            Self::Aurora => "hover:text-violet-300",
        }
    }

    pub fn group_hover_accent(self) -> &'static str {
        match self {
            Self::Amber => "group-hover:text-yellow-400",
            Self::Aurora => "group-hover:text-violet-400",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            Self::Amber => "bg-yellow-400 hover:bg-yellow-300 text-black",
            Self::Aurora => "bg-violet-500 hover:bg-violet-400 text-white",
        }
    }

    pub fn chip(self) -> &'static str {
        match self {
            Self::Amber => "bg-yellow-400/10 text-yellow-300 border-yellow-400/20",
            Self::Aurora => "bg-violet-400/10 text-violet-300 border-violet-400/20",
        }
    }

    pub fn focus_ring(self) -> &'static str {
        match self {
            Self::Amber => "focus:ring-yellow-400",
            Self::Aurora => "focus:ring-violet-400",
        }
    }

    pub fn brand_dot(self) -> &'static str {
        match self {
            Self::Amber => "bg-yellow-400",
            Self::Aurora => "bg-gradient-to-br from-violet-500 to-cyan-400",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Amber => "text-white",
            Self::Aurora => {
                "bg-gradient-to-r from-violet-300 via-fuchsia-300 to-cyan-300 bg-clip-text text-transparent"
            }
        }
    }

    /// Whether the hero carries the animated backdrop blobs.
    pub fn has_backdrop(self) -> bool {
        matches!(self, Self::Aurora)
    }
}
