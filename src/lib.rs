//! update-checker - checks installed software against a release catalog
//!
//! This library reads a software inventory (the installed programs and the
//! operating system version of a host), matches it against the vergrabber
//! release catalog, and classifies every item as outdated, up to date or
//! unknown. It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`release_matching`): Pure matching logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use update_checker::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let inventory_source = JsonInventoryReader::new(PathBuf::from("inventory.json"));
//! let catalog_source = FileCatalogSource::new(PathBuf::from("vergrabber.json"));
//! let progress_reporter = StderrProgressReporter::new();
//! let diagnostics = TracingDiagnosticsReporter::new();
//!
//! // Create use case
//! let use_case = CheckUpdatesUseCase::new(
//!     inventory_source,
//!     catalog_source,
//!     progress_reporter,
//!     diagnostics,
//! );
//!
//! // Execute
//! let response = use_case.execute(UpdateCheckRequest::default()).await?;
//!
//! // Format output
//! let report = UpdateReportBuilder::build(&response);
//! let output = MarkdownFormatter::new(false).format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod release_matching;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, TracingDiagnosticsReporter,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileCatalogSource, FileSystemWriter, JsonInventoryReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::{CachingCatalogSource, VergrabberClient};
    pub use crate::application::dto::{OutputFormat, UpdateCheckRequest, UpdateCheckResponse};
    pub use crate::application::read_models::{UpdateReport, UpdateReportBuilder};
    pub use crate::application::use_cases::CheckUpdatesUseCase;
    pub use crate::ports::outbound::{
        CatalogDocument, CatalogSource, DiagnosticsReporter, InventorySource, NoopDiagnostics,
        OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::release_matching::domain::{
        CatalogTree, Classification, InstalledComponent, Inventory, MatchResult, OsVersion,
        ReleaseRecord,
    };
    pub use crate::release_matching::services::{
        CatalogIndex, ClassificationAggregator, MatchingEngine, OsPatchLevelVerifier,
        VersionComparator,
    };
    pub use crate::shared::Result;
}
