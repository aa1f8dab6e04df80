//! # KitchenKit
//!
//! A Rust-based kitchen cabinet layout planner with support for:
//! - Single wall, galley, L, U and island kitchen shapes
//! - Unit placement with snapping, alignment, grouping and locking
//! - Collision, clearance and work triangle validation
//! - Bill of materials, worktop segments, fillers and measurements
//!
//! ## Architecture
//!
//! KitchenKit is organized as a workspace with multiple crates:
//!
//! 1. **kitchenkit-core** - Domain types, module library, rules and units
//! 2. **kitchenkit-designer** - Layout engine, validation, reports, history, files
//! 3. **kitchenkit-settings** - Configuration files and validation
//! 4. **kitchenkit** - Command line binary that integrates all crates

pub use kitchenkit_core as core;
pub use kitchenkit_designer as designer;
pub use kitchenkit_settings as settings;

pub use kitchenkit_core::{
    Appliance, ApplianceKind, ClearanceRules, Error, LayoutMode, LayoutRules, MeasurementSystem,
    Project, Unit, WallId,
};

pub use kitchenkit_designer::{
    Bom, ChecklistItem, LayoutEngine, MeasurementReport, PlannerState, ProjectFile, Selection,
};

pub use kitchenkit_settings::{Config, DisplaySettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so reports on stdout stay machine readable
/// - RUST_LOG environment variable support
/// - JSON lines when `KITCHENKIT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::WARN.to_string()));

    let json = std::env::var("KITCHENKIT_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
