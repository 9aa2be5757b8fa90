//! Session role and presentation theme.

use serde::{Deserialize, Serialize};

/// Which of the two dashboards the session is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Farm management: workers, crops, machines, fertilizers, tasks.
    #[default]
    #[serde(rename = "farmowner")]
    FarmOwner,
    /// Agricultural marketplace: browse, listings, orders.
    Marketplace,
}

impl Role {
    /// All roles in chooser order.
    pub const ALL: [Self; 2] = [Self::FarmOwner, Self::Marketplace];

    /// Wire value (`farmowner` / `marketplace`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FarmOwner => "farmowner",
            Self::Marketplace => "marketplace",
        }
    }

    /// Heading shown next to the logo.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FarmOwner => "Farm Management",
            Self::Marketplace => "Marketplace",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmowner" => Ok(Self::FarmOwner),
            "marketplace" => Ok(Self::Marketplace),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Light or dark presentation, persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only the exact string `"dark"` selects the
    /// dark theme; anything else, including nothing, is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
