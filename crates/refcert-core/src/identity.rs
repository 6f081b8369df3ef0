//! # Typed Identifiers
//!
//! One newtype per entity kind, each wrapping a 128-bit value. You cannot
//! pass a [`UserId`] where a [`TestId`] is expected.
//!
//! ## Text Format
//!
//! `{prefix}{body}` where the prefix is fixed per kind (`user_`, `test_`,
//! `attempt_`, ...) and the body is the 26-character Crockford base32
//! encoding of the 128-bit value, as used by ULIDs:
//!
//! ```text
//! user_0000000000000G000000000000
//! attempt_01HF7YAT00000000000000001A
//! ```
//!
//! Output is canonical (lowercase prefix, uppercase body). Input is
//! case-insensitive. Parsing is strict: the exact length, the prefix and
//! every body character are validated, and nothing is ever partially
//! parsed. Identifiers arrive from URLs and API payloads, so truncated
//! or misrouted text must be rejected rather than repaired.
//!
//! Because the body is fixed-width and the alphabet is in ASCII order,
//! lexicographic order on the canonical text equals numeric order on
//! the 128-bit value, which is also the derived `Ord`.
//!
//! ## Legacy Bridges
//!
//! - [`UserId`] and [`TestId`] implement [`LegacyIdentifier`]: a 64-bit
//!   key from the integer-keyed system occupies the high 8 bytes.
//! - [`TestAttemptId`] is time-ordered: 48 bits of Unix milliseconds
//!   followed by 80 bits of entropy (or an embedded legacy key).

use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ulid::Ulid;
use uuid::Uuid;

use crate::error::{IdentifierError, ValidationError};
use crate::temporal::Timestamp;

/// Length of the encoded 128-bit body.
pub const ENCODED_LEN: usize = 26;

/// Width of the time field in a time-ordered identifier.
const TIMESTAMP_BITS: u32 = 48;

/// Largest Unix millisecond value the time field can hold.
const MAX_TIMESTAMP_MS: i64 = (1 << TIMESTAMP_BITS) - 1;

// ---------------------------------------------------------------------------
// IdentifierKind
// ---------------------------------------------------------------------------

/// The entity kinds that carry typed identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// A referee or administrator account.
    User,
    /// A certification test definition.
    Test,
    /// A single attempt at a test.
    TestAttempt,
    /// A tournament.
    Tournament,
    /// A team.
    Team,
    /// A national governing body.
    Ngb,
}

impl IdentifierKind {
    /// All identifier kinds.
    pub fn all() -> &'static [IdentifierKind] {
        &[
            Self::User,
            Self::Test,
            Self::TestAttempt,
            Self::Tournament,
            Self::Team,
            Self::Ngb,
        ]
    }

    /// The textual prefix for this kind. Distinct across kinds, and no
    /// prefix is a prefix of another.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::User => "user_",
            Self::Test => "test_",
            Self::TestAttempt => "attempt_",
            Self::Tournament => "tournament_",
            Self::Team => "team_",
            Self::Ngb => "ngb_",
        }
    }

    /// Exact length of the canonical text for this kind.
    pub const fn text_len(&self) -> usize {
        self.prefix().len() + ENCODED_LEN
    }

    /// Returns the snake_case name of this kind, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Test => "test",
            Self::TestAttempt => "test_attempt",
            Self::Tournament => "tournament",
            Self::Team => "team",
            Self::Ngb => "ngb",
        }
    }

    /// Determine the kind from the prefix of `text`, case-insensitively.
    ///
    /// Only the prefix is inspected; the rest of the text is not validated.
    pub fn detect(text: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| {
            text.get(..kind.prefix().len())
                .is_some_and(|head| head.eq_ignore_ascii_case(kind.prefix()))
        })
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownIdentifierKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Body codec
// ---------------------------------------------------------------------------

fn encode_body(value: u128) -> String {
    Ulid(value).to_string()
}

/// Decode a 26-character body. The first character may carry at most
/// three bits, otherwise the value would not fit in 128 bits.
fn decode_body(body: &str) -> Option<u128> {
    if body.len() != ENCODED_LEN {
        return None;
    }
    match body.as_bytes().first() {
        Some(b'0'..=b'7') => {}
        _ => return None,
    }
    Ulid::from_string(&body.to_ascii_uppercase())
        .ok()
        .map(u128::from)
}

fn parse_prefixed(text: &str, kind: IdentifierKind) -> Option<u128> {
    if text.len() != kind.text_len() || !text.is_ascii() {
        return None;
    }
    let (prefix, body) = text.split_at(kind.prefix().len());
    if !prefix.eq_ignore_ascii_case(kind.prefix()) {
        return None;
    }
    decode_body(body)
}

// ---------------------------------------------------------------------------
// Identifier trait
// ---------------------------------------------------------------------------

/// The contract shared by every typed identifier.
///
/// Round-trip law: `Self::try_parse(&x.to_text()) == Some(x)` for every `x`.
pub trait Identifier: Sized + Copy + Eq + Ord + Hash + std::fmt::Debug {
    /// The entity kind this identifier type refers to.
    const KIND: IdentifierKind;

    /// The textual prefix, `Self::KIND.prefix()`.
    const PREFIX: &'static str = Self::KIND.prefix();

    /// Exact length of the canonical text.
    const TEXT_LEN: usize = Self::KIND.text_len();

    /// Wrap an existing 128-bit value.
    fn from_uuid(id: Uuid) -> Self;

    /// Access the underlying 128-bit value.
    fn as_uuid(&self) -> &Uuid;

    /// Mint a fresh identifier.
    fn new_random() -> Self;

    /// The underlying value as an integer. Identifier `Ord` agrees with
    /// the order of this value.
    fn as_u128(&self) -> u128 {
        self.as_uuid().as_u128()
    }

    /// Canonical text: lowercase prefix followed by the uppercase body.
    fn to_text(&self) -> String {
        let mut text = String::with_capacity(Self::TEXT_LEN);
        text.push_str(Self::PREFIX);
        text.push_str(&encode_body(self.as_u128()));
        text
    }

    /// Parse canonical or case-variant text. Returns `None` unless the
    /// length, prefix, and body are all valid for this kind.
    fn try_parse(text: &str) -> Option<Self> {
        parse_prefixed(text, Self::KIND).map(|value| Self::from_uuid(Uuid::from_u128(value)))
    }

    /// Like [`try_parse`](Identifier::try_parse), but reports the
    /// offending text on failure.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Malformed`] if the text is not a valid
    /// identifier of this kind.
    fn parse(text: &str) -> Result<Self, IdentifierError> {
        Self::try_parse(text).ok_or_else(|| {
            tracing::debug!(kind = %Self::KIND, value = text, "rejected malformed identifier");
            IdentifierError::Malformed {
                kind: Self::KIND,
                value: text.to_string(),
            }
        })
    }
}

/// Identifier kinds migrated from the integer-keyed system.
///
/// The legacy key is stored big-endian in the high 8 bytes of the value
/// and the low 8 bytes are zero.
pub trait LegacyIdentifier: Identifier {
    /// Embed a legacy key. Deterministic: equal keys give equal identifiers.
    fn from_legacy(id: i64) -> Self {
        let high = u128::from(id as u64) << 64;
        Self::from_uuid(Uuid::from_u128(high))
    }

    /// Project the high 8 bytes back to a legacy key.
    ///
    /// Defined for every identifier of the kind, including random ones,
    /// for which the result is meaningless. Use [`is_legacy`] to tell the
    /// two apart.
    ///
    /// [`is_legacy`]: LegacyIdentifier::is_legacy
    fn to_legacy(&self) -> i64 {
        (self.as_u128() >> 64) as u64 as i64
    }

    /// True iff the low 8 bytes are all zero, i.e. the identifier has the
    /// shape produced by [`from_legacy`](LegacyIdentifier::from_legacy).
    fn is_legacy(&self) -> bool {
        self.as_u128() as u64 == 0
    }
}

// ---------------------------------------------------------------------------
// Concrete kinds
// ---------------------------------------------------------------------------

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:expr, random: $random:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Uuid);

        impl Identifier for $name {
            const KIND: IdentifierKind = $kind;

            fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            fn new_random() -> Self {
                Self($random)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_text())
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Identifier>::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_text())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                <Self as Identifier>::parse(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_identifier! {
    /// Identifier of a user account (referee, coach, administrator).
    UserId => IdentifierKind::User, random: Uuid::new_v4()
}

define_identifier! {
    /// Identifier of a certification test definition.
    TestId => IdentifierKind::Test, random: Uuid::new_v4()
}

define_identifier! {
    /// Identifier of a single attempt at a test.
    ///
    /// Time-ordered: the top 48 bits are the creation time in Unix
    /// milliseconds, so sorting attempts by identifier sorts them by
    /// creation time.
    TestAttemptId => IdentifierKind::TestAttempt, random: Uuid::from_u128(Ulid::new().0)
}

define_identifier! {
    /// Identifier of a tournament.
    TournamentId => IdentifierKind::Tournament, random: Uuid::new_v4()
}

define_identifier! {
    /// Identifier of a team.
    TeamId => IdentifierKind::Team, random: Uuid::new_v4()
}

define_identifier! {
    /// Identifier of a national governing body.
    NgbId => IdentifierKind::Ngb, random: Uuid::new_v4()
}

impl LegacyIdentifier for UserId {}

impl LegacyIdentifier for TestId {}

impl TestAttemptId {
    /// Build the identifier of an attempt imported from the legacy system.
    ///
    /// The top 48 bits hold `created_at` in Unix milliseconds and the low
    /// 64 bits hold `id`; the 16 bits in between are zero. Calling this
    /// twice with the same inputs yields the same identifier, and distinct
    /// legacy ids created in the same millisecond never collide.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::TimestampOutOfRange`] if `created_at` is
    /// before the Unix epoch or beyond the 48-bit millisecond range.
    pub fn from_legacy_with_time(created_at: &Timestamp, id: i64) -> Result<Self, IdentifierError> {
        let millis = created_at.epoch_millis();
        if !(0..=MAX_TIMESTAMP_MS).contains(&millis) {
            return Err(IdentifierError::TimestampOutOfRange { millis });
        }
        let ulid = Ulid::from_parts(millis as u64, u128::from(id as u64));
        Ok(Self(Uuid::from_u128(ulid.0)))
    }

    /// The creation time encoded in the top 48 bits.
    pub fn timestamp(&self) -> Timestamp {
        let millis = Ulid(self.as_u128()).timestamp_ms() as i64;
        // A 48-bit millisecond value is always inside chrono's range.
        Timestamp::from_datetime(chrono::DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    /// The low 64 bits, which hold the legacy key for attempts built by
    /// [`from_legacy_with_time`](TestAttemptId::from_legacy_with_time).
    pub fn to_legacy(&self) -> i64 {
        self.as_u128() as u64 as i64
    }
}

// ---------------------------------------------------------------------------
// AnyIdentifier
// ---------------------------------------------------------------------------

/// An identifier whose kind is only known at runtime, resolved by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyIdentifier {
    /// A [`UserId`].
    User(UserId),
    /// A [`TestId`].
    Test(TestId),
    /// A [`TestAttemptId`].
    TestAttempt(TestAttemptId),
    /// A [`TournamentId`].
    Tournament(TournamentId),
    /// A [`TeamId`].
    Team(TeamId),
    /// A [`NgbId`].
    Ngb(NgbId),
}

impl AnyIdentifier {
    /// Parse text of any kind, dispatching on its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::UnknownPrefix`] if no kind matches, or
    /// [`IdentifierError::Malformed`] if the kind matches but the rest of
    /// the text is invalid.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let kind = IdentifierKind::detect(text).ok_or_else(|| IdentifierError::UnknownPrefix {
            value: text.to_string(),
        })?;
        match kind {
            IdentifierKind::User => UserId::parse(text).map(Self::User),
            IdentifierKind::Test => TestId::parse(text).map(Self::Test),
            IdentifierKind::TestAttempt => TestAttemptId::parse(text).map(Self::TestAttempt),
            IdentifierKind::Tournament => TournamentId::parse(text).map(Self::Tournament),
            IdentifierKind::Team => TeamId::parse(text).map(Self::Team),
            IdentifierKind::Ngb => NgbId::parse(text).map(Self::Ngb),
        }
    }

    /// The kind of the wrapped identifier.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::User(_) => IdentifierKind::User,
            Self::Test(_) => IdentifierKind::Test,
            Self::TestAttempt(_) => IdentifierKind::TestAttempt,
            Self::Tournament(_) => IdentifierKind::Tournament,
            Self::Team(_) => IdentifierKind::Team,
            Self::Ngb(_) => IdentifierKind::Ngb,
        }
    }

    /// Access the underlying 128-bit value.
    pub fn as_uuid(&self) -> &Uuid {
        match self {
            Self::User(id) => id.as_uuid(),
            Self::Test(id) => id.as_uuid(),
            Self::TestAttempt(id) => id.as_uuid(),
            Self::Tournament(id) => id.as_uuid(),
            Self::Team(id) => id.as_uuid(),
            Self::Ngb(id) => id.as_uuid(),
        }
    }

    /// Canonical text of the wrapped identifier.
    pub fn to_text(&self) -> String {
        match self {
            Self::User(id) => id.to_text(),
            Self::Test(id) => id.to_text(),
            Self::TestAttempt(id) => id.to_text(),
            Self::Tournament(id) => id.to_text(),
            Self::Team(id) => id.to_text(),
            Self::Ngb(id) => id.to_text(),
        }
    }
}

impl std::fmt::Display for AnyIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for AnyIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AnyIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for AnyIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- IdentifierKind --

    #[test]
    fn prefixes_are_distinct_and_unambiguous() {
        for a in IdentifierKind::all() {
            for b in IdentifierKind::all() {
                if a != b {
                    assert!(
                        !a.prefix().starts_with(b.prefix()),
                        "{a} prefix overlaps {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn kind_as_str_roundtrip() {
        for kind in IdentifierKind::all() {
            assert_eq!(kind.as_str().parse::<IdentifierKind>().unwrap(), *kind);
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert!("users".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(IdentifierKind::detect("USER_abc"), Some(IdentifierKind::User));
        assert_eq!(IdentifierKind::detect("Attempt_"), Some(IdentifierKind::TestAttempt));
        assert_eq!(IdentifierKind::detect("tour"), None);
        assert_eq!(IdentifierKind::detect(""), None);
        assert_eq!(IdentifierKind::detect("usé_"), None);
    }

    // -- Text format --

    #[test]
    fn known_vectors() {
        assert_eq!(UserId::from_legacy(1).to_text(), "user_0000000000000G000000000000");
        assert_eq!(UserId::from_legacy(-1).to_text(), "user_7ZZZZZZZZZZZZG000000000000");
        assert_eq!(
            NgbId::from_uuid(Uuid::from_u128(u128::MAX)).to_text(),
            "ngb_7ZZZZZZZZZZZZZZZZZZZZZZZZZ"
        );
        assert_eq!(
            TeamId::from_uuid(Uuid::nil()).to_text(),
            "team_00000000000000000000000000"
        );
    }

    #[test]
    fn text_length_is_fixed() {
        assert_eq!(UserId::new_random().to_text().len(), UserId::TEXT_LEN);
        assert_eq!(TestAttemptId::new_random().to_text().len(), 34);
        assert_eq!(TournamentId::TEXT_LEN, "tournament_".len() + 26);
    }

    #[test]
    fn parse_accepts_any_case() {
        let id = TestId::from_legacy(987_654_321);
        let text = id.to_text();
        assert_eq!(TestId::try_parse(&text.to_uppercase()), Some(id));
        assert_eq!(TestId::try_parse(&text.to_lowercase()), Some(id));
    }

    #[test]
    fn parse_rejects_overflowing_body() {
        // 26 base32 digits carry 130 bits; a leading 8 would need bit 130.
        assert_eq!(UserId::try_parse("user_80000000000000000000000000"), None);
        assert_eq!(UserId::try_parse("user_Z0000000000000000000000000"), None);
    }

    #[test]
    fn parse_rejects_non_ascii_without_panicking() {
        // Same byte length as a valid user identifier.
        let text = format!("usé{}", "0".repeat(27));
        assert_eq!(text.len(), UserId::TEXT_LEN);
        assert_eq!(UserId::try_parse(&text), None);
    }

    #[test]
    fn parse_error_carries_offending_text() {
        let err = TeamId::parse("team_nope").unwrap_err();
        assert_eq!(
            err,
            IdentifierError::Malformed {
                kind: IdentifierKind::Team,
                value: "team_nope".to_string()
            }
        );
    }

    #[test]
    fn kinds_are_not_interchangeable_as_text() {
        let user = UserId::new_random();
        assert_eq!(TestId::try_parse(&user.to_text()), None);
        let swapped = user.to_text().replacen("user_", "team_", 1);
        assert!(TeamId::try_parse(&swapped).is_some());
    }

    // -- Legacy bridge --

    #[test]
    fn legacy_bridge_edges() {
        for n in [0, 1, -1, 42, i64::MIN, i64::MAX] {
            let user = UserId::from_legacy(n);
            assert_eq!(user.to_legacy(), n);
            assert!(user.is_legacy());
            assert_eq!(TestId::from_legacy(n).to_legacy(), n);
        }
    }

    #[test]
    fn legacy_key_occupies_high_bytes() {
        let id = UserId::from_legacy(0x0102_0304_0506_0708);
        assert_eq!(
            id.as_uuid().as_bytes(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn random_ids_project_without_being_legacy() {
        let id = UserId::from_uuid(Uuid::from_u128((7u128 << 64) | 1));
        assert_eq!(id.to_legacy(), 7);
        assert!(!id.is_legacy());
    }

    // -- Time-ordered bridge --

    #[test]
    fn attempt_layout() {
        let created = Timestamp::from_epoch_millis(1_700_000_000_000).unwrap();
        let id = TestAttemptId::from_legacy_with_time(&created, 42).unwrap();
        assert_eq!(id.as_u128(), (1_700_000_000_000u128 << 80) | 42);
        assert_eq!(id.to_text(), "attempt_01HF7YAT00000000000000001A");
        assert_eq!(id.timestamp(), created);
        assert_eq!(id.to_legacy(), 42);
    }

    #[test]
    fn attempt_is_idempotent() {
        let created = Timestamp::parse("2021-06-01T10:00:00.500Z").unwrap();
        let a = TestAttemptId::from_legacy_with_time(&created, -7).unwrap();
        let b = TestAttemptId::from_legacy_with_time(&created, -7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_legacy(), -7);
    }

    #[test]
    fn attempt_same_millisecond_distinct_ids() {
        let created = Timestamp::now();
        let a = TestAttemptId::from_legacy_with_time(&created, 1).unwrap();
        let b = TestAttemptId::from_legacy_with_time(&created, 2).unwrap();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn attempt_rejects_out_of_range_time() {
        let before_epoch = Timestamp::from_epoch_millis(-1).unwrap();
        assert_eq!(
            TestAttemptId::from_legacy_with_time(&before_epoch, 1),
            Err(IdentifierError::TimestampOutOfRange { millis: -1 })
        );
        let too_late = Timestamp::from_epoch_millis(MAX_TIMESTAMP_MS + 1).unwrap();
        assert!(TestAttemptId::from_legacy_with_time(&too_late, 1).is_err());
        let last = Timestamp::from_epoch_millis(MAX_TIMESTAMP_MS).unwrap();
        assert!(TestAttemptId::from_legacy_with_time(&last, 1).is_ok());
    }

    #[test]
    fn random_attempt_carries_current_time() {
        let before = Timestamp::now();
        let id = TestAttemptId::new_random();
        let after = Timestamp::now();
        assert!(before <= id.timestamp() && id.timestamp() <= after);
    }

    // -- AnyIdentifier --

    #[test]
    fn any_identifier_dispatches_on_prefix() {
        let ngb = NgbId::new_random();
        let any = AnyIdentifier::parse(&ngb.to_text()).unwrap();
        assert_eq!(any, AnyIdentifier::Ngb(ngb));
        assert_eq!(any.kind(), IdentifierKind::Ngb);
        assert_eq!(any.as_uuid(), ngb.as_uuid());
        assert_eq!(any.to_string(), ngb.to_text());
    }

    #[test]
    fn any_identifier_errors() {
        assert!(matches!(
            AnyIdentifier::parse("widget_00000000000000000000000000"),
            Err(IdentifierError::UnknownPrefix { .. })
        ));
        assert!(matches!(
            AnyIdentifier::parse("test_0"),
            Err(IdentifierError::Malformed { kind: IdentifierKind::Test, .. })
        ));
    }

    // -- serde --

    #[test]
    fn serde_uses_text_form() {
        let id = TournamentId::new_random();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_text()));
        let parsed: TournamentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<TournamentId>("\"team_00000000000000000000000000\"").is_err());
        assert!(serde_json::from_str::<TournamentId>("42").is_err());
    }
}
