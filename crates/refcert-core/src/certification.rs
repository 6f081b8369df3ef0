//! # Certifications
//!
//! A [`Certification`] is an immutable `(level, version)` pair: one
//! awardable referee qualification under one rulebook.
//!
//! ## Ordering
//!
//! `Ord` sorts chronologically: by version rank first, then by level
//! rank. Every certification from an older rulebook sorts before any
//! certification from a newer one, regardless of level. This is the order
//! for historical listings. [`CertificationSet`] enumerates in the
//! opposite sense (highest level first) and the two must not be confused.
//!
//! [`CertificationSet`]: crate::certification_set::CertificationSet

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Level, Ranked, Version};
use crate::error::ValidationError;

/// One referee qualification: a level under a specific rulebook version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Certification {
    level: Level,
    version: Version,
}

impl Certification {
    /// Create a certification.
    pub const fn new(level: Level, version: Version) -> Self {
        Self { level, version }
    }

    /// The certification level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The rulebook version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Every certification in the `Level × Version` domain, level-major
    /// in ascending rank.
    pub fn all() -> impl Iterator<Item = Certification> {
        Level::all().iter().flat_map(|&level| {
            Version::all()
                .iter()
                .map(move |&version| Certification::new(level, version))
        })
    }
}

impl Ord for Certification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .rank()
            .cmp(&other.version.rank())
            .then_with(|| self.level.rank().cmp(&other.level.rank()))
    }
}

impl PartialOrd for Certification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Certification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.level, self.version)
    }
}

impl FromStr for Certification {
    type Err = ValidationError;

    /// Parse `<level>/<version>`, e.g. `head/twentyfour`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (level, version) = s
            .split_once('/')
            .ok_or_else(|| ValidationError::InvalidCertification(s.to_string()))?;
        Ok(Self::new(level.parse()?, version.parse()?))
    }
}
