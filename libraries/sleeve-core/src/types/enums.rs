//! Closed vocabularies stored by the hosted database
//!
//! The spellings here are exactly what the service stores and filters on;
//! select widgets present them verbatim.

use crate::error::SleeveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Release format of an album
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlbumType {
    #[default]
    Lp, // Full-length
    Ep,
    Single,
    Compilation,
}

impl AlbumType {
    /// Widget options, in menu order
    pub const VARIANTS: &'static [&'static str] = &["LP", "EP", "SINGLE", "COMPILATION"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lp => "LP",
            Self::Ep => "EP",
            Self::Single => "SINGLE",
            Self::Compilation => "COMPILATION",
        }
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlbumType {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LP" => Ok(Self::Lp),
            "EP" => Ok(Self::Ep),
            "SINGLE" => Ok(Self::Single),
            "COMPILATION" => Ok(Self::Compilation),
            other => Err(SleeveError::unknown_variant("album_type", other)),
        }
    }
}

/// Whether a row is shown on the public site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Widget options, in menu order
    pub const VARIANTS: &'static [&'static str] = &["PUBLIC", "PRIVATE"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            other => Err(SleeveError::unknown_variant("visibility", other)),
        }
    }
}

/// Lifecycle of an album release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbumStatus {
    #[default]
    #[serde(rename = "In Development")]
    InDevelopment,
    Announced,
    Released,
    Archived,
}

impl AlbumStatus {
    /// Widget options, in menu order
    pub const VARIANTS: &'static [&'static str] =
        &["In Development", "Announced", "Released", "Archived"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InDevelopment => "In Development",
            Self::Announced => "Announced",
            Self::Released => "Released",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for AlbumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlbumStatus {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Development" => Ok(Self::InDevelopment),
            "Announced" => Ok(Self::Announced),
            "Released" => Ok(Self::Released),
            "Archived" => Ok(Self::Archived),
            other => Err(SleeveError::unknown_variant("album_status", other)),
        }
    }
}

/// Completion state of a track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackStatus {
    #[default]
    Wip, // Work in progress
    Final,
    Shelved,
}

impl TrackStatus {
    /// Widget options, in menu order
    pub const VARIANTS: &'static [&'static str] = &["WIP", "FINAL", "SHELVED"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wip => "WIP",
            Self::Final => "FINAL",
            Self::Shelved => "SHELVED",
        }
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackStatus {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIP" => Ok(Self::Wip),
            "FINAL" => Ok(Self::Final),
            "SHELVED" => Ok(Self::Shelved),
            other => Err(SleeveError::unknown_variant("track_status", other)),
        }
    }
}

/// Production stage of a track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    #[default]
    Conception,
    Demo,
    Tracking,
    Mixing,
    Mastering,
    Released,
}

impl Stage {
    /// Widget options, in menu order
    pub const VARIANTS: &'static [&'static str] = &[
        "CONCEPTION",
        "DEMO",
        "TRACKING",
        "MIXING",
        "MASTERING",
        "RELEASED",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conception => "CONCEPTION",
            Self::Demo => "DEMO",
            Self::Tracking => "TRACKING",
            Self::Mixing => "MIXING",
            Self::Mastering => "MASTERING",
            Self::Released => "RELEASED",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = SleeveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONCEPTION" => Ok(Self::Conception),
            "DEMO" => Ok(Self::Demo),
            "TRACKING" => Ok(Self::Tracking),
            "MIXING" => Ok(Self::Mixing),
            "MASTERING" => Ok(Self::Mastering),
            "RELEASED" => Ok(Self::Released),
            other => Err(SleeveError::unknown_variant("stage", other)),
        }
    }
}
