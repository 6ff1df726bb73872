//! Built-in database catalog
//!
//! A fixed list of supported databases with their default connection
//! fields. The catalog is embedded as a YAML asset and parsed once; the
//! wizard collector reads it to build its database step, and the generator
//! uses it to derive the driver dependency and fall back to default
//! connection values.

use crate::project::DatabaseSettings;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default connection schema for one catalog database.
///
/// `username`, `password` and `driver` are `None` when the database has no
/// such field at all; an empty string is a present-but-blank default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDefaults {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

impl ConnectionDefaults {
    /// Materialize the defaults as editable connection settings
    pub fn to_settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            url: self.url.clone(),
            username: self.username.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            driver: self.driver.clone().unwrap_or_default(),
        }
    }
}

/// One supported database option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseOption {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub defaults: ConnectionDefaults,
}

impl DatabaseOption {
    /// Name of the manifest-table entry this database pulls in
    pub fn driver_dependency(&self) -> String {
        format!("{} Driver", self.name)
    }
}

/// The full catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCatalog {
    pub databases: Vec<DatabaseOption>,
}

static BUILTIN: LazyLock<DatabaseCatalog> = LazyLock::new(|| {
    serde_yaml::from_str(include_str!("catalog.yaml")).expect("embedded catalog.yaml is valid")
});

impl DatabaseCatalog {
    /// The built-in catalog shipped with the generator
    pub fn builtin() -> &'static DatabaseCatalog {
        &BUILTIN
    }

    /// Look up a database by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&DatabaseOption> {
        self.databases
            .iter()
            .find(|db| db.name.eq_ignore_ascii_case(name))
    }
}
