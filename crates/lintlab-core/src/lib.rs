//! lintlab-core — scenario-driven fixture planting and verification for
//! static-analysis demos.
//!
//! A scenario plants one synthetic, detectable issue in a sample
//! JavaScript repository (an orphan file, a duplicated export, a stale
//! devDependency, ...), and the verifier checks that the external
//! analyzer actually reports it. Three operations per scenario:
//!
//! - `fixture::create` — write fixture files or patch the manifest,
//!   wiring new files into the bootstrap entry point when reachability
//!   matters; idempotent.
//! - `fixture::cleanup` — remove exactly what create planted.
//! - `Verifier::verify` — run the analyzer, extract its JSON report,
//!   and count matches scoped to the scenario.

pub mod bootstrap;
pub mod changeset;
pub mod config;
pub mod error;
pub mod fixture;
pub mod manifest;
pub mod preview;
pub mod report;
pub mod scenario;
pub mod verify;

pub use changeset::ChangeSet;
pub use config::LabConfig;
pub use error::{LabError, Result};
pub use preview::Preview;
pub use report::ReportedMatch;
pub use scenario::{MatchScope, Payload, Scenario};
pub use verify::{Verifier, VerifyOutcome};
