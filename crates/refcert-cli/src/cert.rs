//! # Certification Subcommand
//!
//! Build certification sets from `level/version` arguments and show how
//! they enumerate, sort, and combine.

use std::collections::BTreeSet;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use refcert_core::{Certification, CertificationSet, ValidationError};

use crate::config::CliConfig;
use crate::output::emit;

/// Arguments for the `refcert cert` subcommand.
#[derive(Args, Debug)]
pub struct CertArgs {
    #[command(subcommand)]
    pub command: CertCommand,
}

/// Certification subcommands.
#[derive(Subcommand, Debug)]
pub enum CertCommand {
    /// Collect certifications into a set and list them highest first.
    List {
        /// Certifications as `level/version`, e.g. `head/twentyfour`.
        #[arg(required = true, value_name = "CERT")]
        certs: Vec<String>,
    },

    /// Print certifications in chronological order (oldest rulebook first).
    Sort {
        /// Certifications as `level/version`.
        #[arg(required = true, value_name = "CERT")]
        certs: Vec<String>,
    },

    /// Compare two certification sets.
    Compare {
        /// Left set, comma-separated.
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        left: Vec<String>,
        /// Right set, comma-separated.
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        right: Vec<String>,
    },
}

/// Parse every argument, failing on the first malformed one.
pub fn parse_certs<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Certification>, ValidationError> {
    raw.iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::parse::<Certification>)
        .collect()
}

/// Set contents in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    /// Members, highest level of the newest rulebook first.
    pub certifications: Vec<Certification>,
    /// Distinct members.
    pub count: usize,
    /// The first member in enumeration order.
    pub highest: Option<Certification>,
}

impl ListReport {
    /// Build the report for `certs`, dropping duplicates.
    pub fn build(certs: &[Certification]) -> Self {
        let set: CertificationSet = certs.iter().copied().collect();
        Self {
            certifications: set.iter().collect(),
            count: set.count(),
            highest: set.first(),
        }
    }

    fn render_text(&self) -> String {
        let mut lines: Vec<String> = self.certifications.iter().map(|c| c.to_string()).collect();
        lines.push(match self.highest {
            Some(highest) => format!("highest: {highest}"),
            None => "highest: none".to_string(),
        });
        lines.join("\n")
    }
}

/// Certifications in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Distinct members, oldest rulebook first.
    pub certifications: Vec<Certification>,
}

impl SortReport {
    /// Sort `certs` by rulebook, then level, dropping duplicates.
    pub fn build(certs: &[Certification]) -> Self {
        let sorted: BTreeSet<_> = certs.iter().copied().collect();
        Self {
            certifications: sorted.into_iter().collect(),
        }
    }

    fn render_text(&self) -> String {
        self.certifications
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Set algebra between two certification sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    /// Members of either set.
    pub union: CertificationSet,
    /// Members of both sets.
    pub intersection: CertificationSet,
    /// Members of the left set only.
    pub left_only: CertificationSet,
    /// Members of the right set only.
    pub right_only: CertificationSet,
    /// Every left member is also a right member.
    pub subset: bool,
    /// Every right member is also a left member.
    pub superset: bool,
    /// Both sets have the same members.
    pub equal: bool,
    /// The sets share at least one member.
    pub overlaps: bool,
}

impl CompareReport {
    /// Compare `left` against `right`.
    pub fn build(left: &CertificationSet, right: &CertificationSet) -> Self {
        Self {
            union: left.union(right),
            intersection: left.intersect(right),
            left_only: left.except(right),
            right_only: right.except(left),
            subset: left.is_subset(right),
            superset: left.is_superset(right),
            equal: left.set_equals(right),
            overlaps: left.overlaps(right),
        }
    }

    fn render_text(&self) -> String {
        fn join(set: &CertificationSet) -> String {
            if set.is_empty() {
                return "-".to_string();
            }
            set.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
        [
            format!("union:        {}", join(&self.union)),
            format!("intersection: {}", join(&self.intersection)),
            format!("left only:    {}", join(&self.left_only)),
            format!("right only:   {}", join(&self.right_only)),
            format!("subset:       {}", self.subset),
            format!("superset:     {}", self.superset),
            format!("equal:        {}", self.equal),
            format!("overlaps:     {}", self.overlaps),
        ]
        .join("\n")
    }
}

/// Execute the cert subcommand.
///
/// Returns exit code: 0 on success, 2 if a certification was malformed.
pub fn run_cert(args: &CertArgs, config: &CliConfig) -> Result<u8> {
    let outcome = match &args.command {
        CertCommand::List { certs } => parse_certs(certs).map(|certs| {
            let report = ListReport::build(&certs);
            tracing::debug!(count = report.count, "listing certification set");
            emit(config.output, &report, ListReport::render_text)
        }),
        CertCommand::Sort { certs } => parse_certs(certs)
            .map(|certs| emit(config.output, &SortReport::build(&certs), SortReport::render_text)),
        CertCommand::Compare { left, right } => parse_certs(left).and_then(|left| {
            let right = parse_certs(right)?;
            let left: CertificationSet = left.into_iter().collect();
            let right: CertificationSet = right.into_iter().collect();
            Ok(emit(
                config.output,
                &CompareReport::build(&left, &right),
                CompareReport::render_text,
            ))
        }),
    };

    match outcome {
        Ok(emitted) => {
            emitted?;
            Ok(0)
        }
        Err(e) => {
            tracing::warn!(error = %e, "input rejected");
            eprintln!("FAIL: {e}");
            Ok(crate::EXIT_REJECTED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refcert_core::{Level, Version};

    fn cert(level: Level, version: Version) -> Certification {
        Certification::new(level, version)
    }

    #[test]
    fn parse_certs_skips_blanks_and_rejects_garbage() {
        let certs = parse_certs(&["head/twentyfour", " ", "flag/eighteen "]).unwrap();
        assert_eq!(
            certs,
            vec![
                cert(Level::Head, Version::TwentyFour),
                cert(Level::Flag, Version::Eighteen),
            ]
        );
        assert!(parse_certs(&["head"]).is_err());
        assert!(parse_certs(&["head/2024"]).is_err());
        assert!(parse_certs(&["chief/twentyfour"]).is_err());
    }

    #[test]
    fn list_dedups_and_orders_highest_first() {
        let report = ListReport::build(&[
            cert(Level::Scorekeeper, Version::Twenty),
            cert(Level::Head, Version::TwentyFour),
            cert(Level::Scorekeeper, Version::Twenty),
            cert(Level::Assistant, Version::TwentyTwo),
        ]);
        assert_eq!(report.count, 3);
        assert_eq!(report.highest, Some(cert(Level::Head, Version::TwentyFour)));
        assert_eq!(
            report.certifications,
            vec![
                cert(Level::Head, Version::TwentyFour),
                cert(Level::Assistant, Version::TwentyTwo),
                cert(Level::Scorekeeper, Version::Twenty),
            ]
        );
        assert!(report.render_text().ends_with("highest: head/twentyfour"));
    }

    #[test]
    fn list_of_nothing() {
        let report = ListReport::build(&[]);
        assert_eq!(report.count, 0);
        assert_eq!(report.highest, None);
        assert_eq!(report.render_text(), "highest: none");
    }

    #[test]
    fn sort_is_chronological() {
        let report = SortReport::build(&[
            cert(Level::Scorekeeper, Version::TwentyFour),
            cert(Level::Field, Version::Eighteen),
            cert(Level::Head, Version::Eighteen),
        ]);
        assert_eq!(
            report.render_text(),
            "head/eighteen\nfield/eighteen\nscorekeeper/twentyfour"
        );
    }

    #[test]
    fn compare_reports_algebra() {
        let left = CertificationSet::from([
            cert(Level::Head, Version::TwentyFour),
            cert(Level::Flag, Version::TwentyFour),
        ]);
        let right = CertificationSet::from([cert(Level::Flag, Version::TwentyFour)]);
        let report = CompareReport::build(&left, &right);
        assert_eq!(report.union, left);
        assert_eq!(report.intersection, right);
        assert_eq!(
            report.left_only,
            CertificationSet::from([cert(Level::Head, Version::TwentyFour)])
        );
        assert!(report.right_only.is_empty());
        assert!(!report.subset);
        assert!(report.superset);
        assert!(!report.equal);
        assert!(report.overlaps);
        assert!(report.render_text().contains("right only:   -"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["intersection"],
            serde_json::json!([{"level": "flag", "version": "twentyfour"}])
        );
    }
}
