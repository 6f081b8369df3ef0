//! # Ranked Domains — Certification Levels and Rulebook Versions
//!
//! Defines the two closed, ordered enumerations that every certification
//! is built from: [`Level`] (referee skill, ascending) and [`Version`]
//! (rulebook releases, ascending chronologically).
//!
//! Both implement [`Ranked`], which maps a member to its 0-based ordinal
//! and back. The certification bitset computes flat indices from these
//! ranks, so `rank` and `from_rank` must be mutual inverses for every
//! member. The two domains have different sizes (`Level::COUNT == 5`,
//! `Version::COUNT == 4`); nothing may assume they are equal.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A closed enumeration with a stable, dense ordinal.
///
/// Implementors guarantee that `rank()` is a bijection from the declared
/// members onto `0..COUNT`, that `from_rank` inverts it, and that `Ord`
/// agrees with the rank order.
pub trait Ranked: Copy + Eq + Ord + std::fmt::Debug + 'static {
    /// Number of declared members.
    const COUNT: usize;

    /// All members in ascending rank order.
    fn all() -> &'static [Self];

    /// The 0-based ordinal of this member, always in `0..COUNT`.
    fn rank(self) -> usize;

    /// The member with the given ordinal, or `None` if `rank >= COUNT`.
    fn from_rank(rank: usize) -> Option<Self> {
        Self::all().get(rank).copied()
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Referee certification level, ordered by ascending skill.
///
/// | Rank | Level |
/// |------|-------|
/// | 0 | Scorekeeper |
/// | 1 | Assistant |
/// | 2 | Flag |
/// | 3 | Head |
/// | 4 | Field |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Scorekeeper referee.
    Scorekeeper = 0,
    /// Assistant referee.
    Assistant = 1,
    /// Flag runner.
    Flag = 2,
    /// Head referee.
    Head = 3,
    /// Field test certification.
    Field = 4,
}

impl Level {
    /// The number of certification levels.
    pub const COUNT: usize = 5;

    /// Returns the snake_case token for this level, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scorekeeper => "scorekeeper",
            Self::Assistant => "assistant",
            Self::Flag => "flag",
            Self::Head => "head",
            Self::Field => "field",
        }
    }
}

impl Ranked for Level {
    const COUNT: usize = Level::COUNT;

    fn all() -> &'static [Self] {
        &[
            Self::Scorekeeper,
            Self::Assistant,
            Self::Flag,
            Self::Head,
            Self::Field,
        ]
    }

    fn rank(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scorekeeper" => Ok(Self::Scorekeeper),
            "assistant" => Ok(Self::Assistant),
            "flag" => Ok(Self::Flag),
            "head" => Ok(Self::Head),
            "field" => Ok(Self::Field),
            other => Err(ValidationError::UnknownLevel(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// Rulebook version, ordered chronologically (oldest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Version {
    /// 2018–2020 rulebook.
    #[serde(rename = "eighteen")]
    Eighteen = 0,
    /// 2020–2022 rulebook.
    #[serde(rename = "twenty")]
    Twenty = 1,
    /// 2022–2024 rulebook.
    #[serde(rename = "twentytwo")]
    TwentyTwo = 2,
    /// 2024 rulebook.
    #[serde(rename = "twentyfour")]
    TwentyFour = 3,
}

impl Version {
    /// The number of rulebook versions.
    pub const COUNT: usize = 4;

    /// Returns the token for this version, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eighteen => "eighteen",
            Self::Twenty => "twenty",
            Self::TwentyTwo => "twentytwo",
            Self::TwentyFour => "twentyfour",
        }
    }

    /// The year the rulebook was published.
    pub fn year(&self) -> u16 {
        match self {
            Self::Eighteen => 2018,
            Self::Twenty => 2020,
            Self::TwentyTwo => 2022,
            Self::TwentyFour => 2024,
        }
    }

    /// The most recent rulebook.
    pub fn latest() -> Self {
        Self::TwentyFour
    }
}

impl Ranked for Version {
    const COUNT: usize = Version::COUNT;

    fn all() -> &'static [Self] {
        &[Self::Eighteen, Self::Twenty, Self::TwentyTwo, Self::TwentyFour]
    }

    fn rank(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eighteen" => Ok(Self::Eighteen),
            "twenty" => Ok(Self::Twenty),
            "twentytwo" => Ok(Self::TwentyTwo),
            "twentyfour" => Ok(Self::TwentyFour),
            other => Err(ValidationError::UnknownVersion(other.to_string())),
        }
    }
}
