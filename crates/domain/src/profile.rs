// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile variants for the three account types.
//!
//! Account type is a closed sum: artist, venue, or general. Each variant
//! carries its own field set and rendering is dispatched by pattern match,
//! never by optional-field probing on a shared record.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A published music track on an artist profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicTrack {
    /// Unique track identifier.
    pub id: String,
    /// The track title.
    pub title: String,
    /// Track length in seconds.
    pub duration_secs: u32,
    /// Playback URL.
    pub url: String,
}

/// Profile data for an artist account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
    /// The artist's name.
    pub name: String,
    /// Optional stage name shown instead of the real name.
    pub stage_name: Option<String>,
    /// Genres the artist performs.
    pub genres: Vec<String>,
    /// Free-form biography.
    pub bio: String,
    /// Published tracks.
    pub tracks: Vec<MusicTrack>,
}

/// Profile data for a venue account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueProfile {
    /// The venue name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City the venue is in.
    pub city: String,
    /// Audience capacity.
    pub capacity: u32,
    /// Free-form description.
    pub bio: String,
}

/// Profile data for a general user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralProfile {
    /// The user's name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// Free-form biography.
    pub bio: String,
}

/// A user profile, one variant per account type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "account_type", rename_all = "snake_case")]
pub enum Profile {
    /// An artist account.
    Artist(ArtistProfile),
    /// A venue account.
    Venue(VenueProfile),
    /// A general user account.
    General(GeneralProfile),
}

impl Profile {
    /// Returns the account type as its wire string.
    #[must_use]
    pub const fn account_type(&self) -> &'static str {
        match self {
            Self::Artist(_) => "artist",
            Self::Venue(_) => "venue",
            Self::General(_) => "general",
        }
    }

    /// Returns the name to display for this profile.
    ///
    /// Artists with a stage name display the stage name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Artist(p) => p.stage_name.as_deref().unwrap_or(&p.name),
            Self::Venue(p) => &p.name,
            Self::General(p) => &p.name,
        }
    }

    /// Returns a one-line headline for this profile.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Self::Artist(p) => p.genres.join(" / "),
            Self::Venue(p) => format!("{} · capacity {}", p.city, p.capacity),
            Self::General(p) => p.email.clone(),
        }
    }
}

/// The account type tag, parsed from its wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// An artist account.
    Artist,
    /// A venue account.
    Venue,
    /// A general user account.
    General,
}

impl FromStr for AccountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(Self::Artist),
            "venue" => Ok(Self::Venue),
            "general" => Ok(Self::General),
            _ => Err(DomainError::InvalidAccountType(s.to_string())),
        }
    }
}
