use std::path::Path;

use anyhow::{Context, Result};
use filecat_catalog::{Catalog, ImportSummary, import_path, sample_records};
use filecat_runtime::default_catalog_path;
use log::{debug, info, warn};

use crate::commands::SessionArgs;

/// Build the catalog for one session: default catalog file, samples, then
/// explicit imports, in that order.
pub fn load_session(args: &SessionArgs) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    if !args.no_catalog {
        let default = default_catalog_path();
        if default.exists() {
            import_logged(&mut catalog, &default)?;
        } else {
            debug!("no catalog file at {}", default.display());
        }
    }

    if args.samples {
        catalog.extend(sample_records());
    }

    for path in &args.imports {
        import_logged(&mut catalog, path)?;
    }

    Ok(catalog)
}

/// Import a file, logging each rejected line.
pub fn import_logged(catalog: &mut Catalog, path: &Path) -> Result<ImportSummary> {
    let summary = import_path(catalog, path)
        .with_context(|| format!("failed to import {}", path.display()))?;

    for (line, err) in &summary.errors {
        warn!("{}:{}: {}", path.display(), line, err);
    }
    info!(
        "imported {} records from {} ({} skipped, {} rejected)",
        summary.imported,
        path.display(),
        summary.skipped,
        summary.errors.len()
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
