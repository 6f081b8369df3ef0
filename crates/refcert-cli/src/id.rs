//! # Identifier Subcommand
//!
//! Mint, inspect, and bridge typed identifiers. Inspection detects the
//! kind from the prefix, so operators can paste any identifier from a URL
//! or log line.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use refcert_core::{
    AnyIdentifier, Identifier, IdentifierKind, LegacyIdentifier, NgbId, RefcertError, TeamId,
    TestAttemptId, TestId, Timestamp, TournamentId, UserId,
};

use crate::config::CliConfig;
use crate::output::emit;

/// Most identifiers one `refcert id new` invocation will mint.
pub const MAX_MINT_COUNT: u32 = 10_000;

/// Arguments for the `refcert id` subcommand.
#[derive(Args, Debug)]
pub struct IdArgs {
    #[command(subcommand)]
    pub command: IdCommand,
}

/// Identifier subcommands.
#[derive(Subcommand, Debug)]
pub enum IdCommand {
    /// Mint fresh random identifiers.
    New {
        /// Entity kind.
        #[arg(value_enum)]
        kind: KindArg,
        /// How many identifiers to mint (1 to 10000).
        #[arg(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=MAX_MINT_COUNT as i64)
        )]
        count: u32,
    },

    /// Decode an identifier of any kind.
    Inspect {
        /// Identifier text, e.g. `user_0000000000000G000000000000`.
        #[arg(value_name = "ID")]
        text: String,
    },

    /// Build the identifier for a key from the integer-keyed system.
    FromLegacy {
        /// Entity kind (only kinds migrated from the integer-keyed system).
        #[arg(value_enum)]
        kind: LegacyKindArg,
        /// The legacy numeric key.
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },

    /// Build a time-ordered test attempt identifier for a legacy attempt.
    Attempt {
        /// Attempt creation time, RFC 3339 in UTC (`Z` suffix).
        #[arg(long)]
        created_at: String,
        /// The legacy numeric attempt key.
        #[arg(long, allow_hyphen_values = true)]
        legacy: i64,
    },
}

/// Entity kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// User account.
    User,
    /// Test definition.
    Test,
    /// Test attempt (time-ordered).
    TestAttempt,
    /// Tournament.
    Tournament,
    /// Team.
    Team,
    /// National governing body.
    Ngb,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::User => IdentifierKind::User,
            KindArg::Test => IdentifierKind::Test,
            KindArg::TestAttempt => IdentifierKind::TestAttempt,
            KindArg::Tournament => IdentifierKind::Tournament,
            KindArg::Team => IdentifierKind::Team,
            KindArg::Ngb => IdentifierKind::Ngb,
        }
    }
}

/// Entity kinds with a legacy numeric bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LegacyKindArg {
    /// User account.
    User,
    /// Test definition.
    Test,
}

/// Everything the core can tell about one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdReport {
    /// Entity kind.
    pub kind: IdentifierKind,
    /// Canonical text.
    pub id: String,
    /// The 128-bit value in UUID notation.
    pub uuid: String,
    /// Legacy numeric projection, for kinds that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<i64>,
    /// Whether the identifier has the shape of a bridged legacy key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_legacy: Option<bool>,
    /// Creation time, for time-ordered kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl IdReport {
    fn render_text(&self) -> String {
        let mut lines = vec![
            format!("kind:       {}", self.kind),
            format!("id:         {}", self.id),
            format!("uuid:       {}", self.uuid),
        ];
        if let Some(legacy) = self.legacy {
            lines.push(format!("legacy:     {legacy}"));
        }
        if let Some(is_legacy) = self.is_legacy {
            lines.push(format!("is_legacy:  {is_legacy}"));
        }
        if let Some(created_at) = &self.created_at {
            lines.push(format!("created_at: {created_at}"));
        }
        lines.join("\n")
    }
}

/// Describe an identifier.
pub fn describe(id: &AnyIdentifier) -> IdReport {
    let (legacy, is_legacy, created_at) = match id {
        AnyIdentifier::User(user) => (Some(user.to_legacy()), Some(user.is_legacy()), None),
        AnyIdentifier::Test(test) => (Some(test.to_legacy()), Some(test.is_legacy()), None),
        AnyIdentifier::TestAttempt(attempt) => (
            Some(attempt.to_legacy()),
            None,
            Some(attempt.timestamp().to_canonical_string()),
        ),
        AnyIdentifier::Tournament(_) | AnyIdentifier::Team(_) | AnyIdentifier::Ngb(_) => {
            (None, None, None)
        }
    };
    IdReport {
        kind: id.kind(),
        id: id.to_text(),
        uuid: id.as_uuid().to_string(),
        legacy,
        is_legacy,
        created_at,
    }
}

/// Mint `count` random identifiers of `kind`, at most [`MAX_MINT_COUNT`].
pub fn mint(kind: IdentifierKind, count: u32) -> Vec<AnyIdentifier> {
    (0..count.min(MAX_MINT_COUNT))
        .map(|_| match kind {
            IdentifierKind::User => AnyIdentifier::User(UserId::new_random()),
            IdentifierKind::Test => AnyIdentifier::Test(TestId::new_random()),
            IdentifierKind::TestAttempt => AnyIdentifier::TestAttempt(TestAttemptId::new_random()),
            IdentifierKind::Tournament => AnyIdentifier::Tournament(TournamentId::new_random()),
            IdentifierKind::Team => AnyIdentifier::Team(TeamId::new_random()),
            IdentifierKind::Ngb => AnyIdentifier::Ngb(NgbId::new_random()),
        })
        .collect()
}

/// Bridge a legacy numeric key.
pub fn from_legacy(kind: LegacyKindArg, id: i64) -> AnyIdentifier {
    match kind {
        LegacyKindArg::User => AnyIdentifier::User(UserId::from_legacy(id)),
        LegacyKindArg::Test => AnyIdentifier::Test(TestId::from_legacy(id)),
    }
}

/// Build a time-ordered attempt identifier.
pub fn attempt(created_at: &str, legacy: i64) -> Result<AnyIdentifier, RefcertError> {
    let created_at = Timestamp::parse(created_at)?;
    let id = TestAttemptId::from_legacy_with_time(&created_at, legacy)?;
    Ok(AnyIdentifier::TestAttempt(id))
}

/// Execute the id subcommand.
///
/// Returns exit code: 0 on success, 2 if the core rejected the input.
pub fn run_id(args: &IdArgs, config: &CliConfig) -> Result<u8> {
    let result = match &args.command {
        IdCommand::New { kind, count } => {
            let reports: Vec<_> = mint((*kind).into(), *count).iter().map(describe).collect();
            tracing::info!(kind = ?kind, count = reports.len(), "minted identifiers");
            emit(config.output, &reports, |reports| {
                reports
                    .iter()
                    .map(|r| r.id.clone())
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
            return Ok(0);
        }
        IdCommand::Inspect { text } => AnyIdentifier::parse(text).map_err(RefcertError::from),
        IdCommand::FromLegacy { kind, id } => Ok(from_legacy(*kind, *id)),
        IdCommand::Attempt { created_at, legacy } => attempt(created_at, *legacy),
    };

    match result {
        Ok(id) => {
            emit(config.output, &describe(&id), IdReport::render_text)?;
            Ok(0)
        }
        Err(e) => {
            tracing::warn!(error = %e, "input rejected");
            eprintln!("FAIL: {e}");
            Ok(crate::EXIT_REJECTED)
        }
    }
}
