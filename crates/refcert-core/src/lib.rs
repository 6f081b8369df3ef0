#![deny(missing_docs)]

//! # refcert-core — Identifier and Certification Core
//!
//! The correctness-critical types behind referee certification: typed
//! identifiers for every entity kind and the certification value types.
//! It has no internal crate dependencies, only `serde`, `thiserror`,
//! `chrono`, `uuid`, `ulid`, and `tracing`.
//!
//! ## Design Principles
//!
//! 1. **One identifier type per entity kind.** [`UserId`], [`TestId`],
//!    [`TestAttemptId`], [`TournamentId`], [`TeamId`], [`NgbId`] are distinct
//!    types over a 128-bit value with a prefixed, fixed-length text form.
//!    Mixing them up is a compile error, not a runtime prefix mismatch.
//!
//! 2. **Strict parsing.** Identifier text crosses trust boundaries. Length,
//!    prefix and alphabet are all validated; nothing is partially parsed.
//!
//! 3. **Closed domains.** [`Level`] and [`Version`] are closed enums, so a
//!    certification outside the domain cannot be constructed and there is
//!    no runtime "invalid level" error.
//!
//! 4. **[`CertificationSet`] is a bitset.** One bit per `(level, version)`
//!    pair, enumerated highest level and newest version first.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Value types are `Send + Sync` with no interior mutability.

pub mod certification;
pub mod certification_set;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use certification::Certification;
pub use certification_set::CertificationSet;
pub use domain::{Level, Ranked, Version};
pub use error::{IdentifierError, RefcertError, ValidationError};
pub use identity::{
    AnyIdentifier, Identifier, IdentifierKind, LegacyIdentifier, NgbId, TeamId, TestAttemptId,
    TestId, TournamentId, UserId,
};
pub use temporal::Timestamp;
