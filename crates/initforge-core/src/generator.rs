//! The generation pipeline
//!
//! `generate` is the whole core as one pure function: validate the config,
//! resolve the dependency selection against the manifest table, render the
//! three artifacts and assemble them into a zip. Any failure aborts the
//! pipeline; there is no partial-success mode.

use crate::archive;
use crate::catalog::DatabaseCatalog;
use crate::error::GenerateError;
use crate::manifest;
use crate::project::{DatabaseSettings, ProjectConfig};
use crate::render;

/// The generator's output: archive bytes plus a suggested download name
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// `<artifactId>.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Generate a project archive from a configuration.
pub fn generate(config: &ProjectConfig) -> Result<GeneratedProject, GenerateError> {
    config.validate()?;

    let database = match config.selected_database.as_deref() {
        Some(name) => Some(
            DatabaseCatalog::builtin()
                .find(name)
                .ok_or_else(|| GenerateError::UnknownDatabase(name.to_string()))?,
        ),
        None => None,
    };

    // Effective connection settings: the user's edited copy when present,
    // otherwise the catalog defaults for the selected database.
    let connection: Option<DatabaseSettings> = database.map(|db| {
        config
            .database_config
            .clone()
            .unwrap_or_else(|| db.defaults.to_settings())
    });
    if let Some(conn) = &connection {
        if conn.url.trim().is_empty() {
            return Err(GenerateError::invalid(
                "databaseConfig.url",
                "must not be empty when a database is selected",
            ));
        }
    }

    // The driver dependency is derived from the current selection, never
    // stored in the free-form set, so deselecting the database drops it.
    let driver = database.map(|db| db.driver_dependency());
    let fragments = manifest::resolve(&config.dependencies, driver.as_deref());

    let artifacts = render::render_project(config, &fragments, connection.as_ref())?;
    let bytes = archive::assemble(&artifacts)?;

    tracing::debug!(
        artifact_id = %config.artifact_id,
        entries = artifacts.len(),
        size = bytes.len(),
        "generated project archive"
    );

    Ok(GeneratedProject {
        file_name: format!("{}.zip", config.artifact_id),
        bytes,
    })
}
