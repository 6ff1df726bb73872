//! Project configuration model and field validation

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};

/// How the generated project is packaged by the build tool.
///
/// Collected from the wizard and validated, but it does not change the
/// rendered artifacts today (the build descriptor relies on the Maven
/// default packaging).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageType {
    #[default]
    #[serde(rename = "JAR")]
    Jar,
    #[serde(rename = "WAR")]
    War,
}

/// Connection values written into the properties artifact.
///
/// When a database is selected these start out as a copy of the catalog
/// defaults; the wizard lets the user edit them before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub driver: String,
}

/// The single input value to the generator.
///
/// All fields are defaulted during deserialization so that an absent
/// required field surfaces as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    /// Dot-separated Java package, e.g. `com.example`
    pub group_id: String,

    /// Build artifact identifier, e.g. `demo`; also names the archive
    pub artifact_id: String,

    /// Free-text display name, XML-escaped into the build descriptor
    pub project_name: String,

    /// Free-text description, XML-escaped into the build descriptor
    pub description: String,

    /// Runtime label such as `"Java 21"`; the numeric token feeds the
    /// `java.version` build property
    pub runtime_version: String,

    /// Spring Boot parent version, e.g. `"3.1.5"`
    pub framework_version: String,

    pub package_type: PackageType,

    /// Human-readable dependency names; order and duplicates are irrelevant
    pub dependencies: Vec<String>,

    /// Name of a catalog database, when one was picked in the wizard
    pub selected_database: Option<String>,

    /// Connection values for the selected database; falls back to the
    /// catalog defaults when absent
    pub database_config: Option<DatabaseSettings>,
}

impl ProjectConfig {
    /// Validate identifier and version fields before any rendering happens.
    ///
    /// Database-related checks live in the generator pipeline, which has the
    /// catalog entry at hand.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.group_id.is_empty() {
            return Err(GenerateError::invalid("groupId", "must not be empty"));
        }
        if !is_valid_group_id(&self.group_id) {
            return Err(GenerateError::invalid(
                "groupId",
                "must be a dot-separated Java package name",
            ));
        }
        if self.artifact_id.is_empty() {
            return Err(GenerateError::invalid("artifactId", "must not be empty"));
        }
        if !is_valid_artifact_id(&self.artifact_id) {
            return Err(GenerateError::invalid(
                "artifactId",
                "must start with a letter or digit and contain only letters, digits, '.', '_' or '-'",
            ));
        }
        if self.framework_version.is_empty() {
            return Err(GenerateError::invalid(
                "frameworkVersion",
                "must not be empty",
            ));
        }
        if semver::Version::parse(&self.framework_version).is_err() {
            return Err(GenerateError::invalid(
                "frameworkVersion",
                format!("'{}' is not a valid version", self.framework_version),
            ));
        }
        if self.runtime_version_number().is_none() {
            return Err(GenerateError::invalid(
                "runtimeVersion",
                format!("'{}' contains no version number", self.runtime_version),
            ));
        }
        Ok(())
    }

    /// `groupId` with dots replaced by slashes, for the source tree path
    pub fn package_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// Extract the numeric token from the runtime label, stripping any
    /// language-name prefix: `"Java 21"` yields `"21"`, `"Java 1.8"`
    /// yields `"1.8"`. Returns `None` when the label holds no digits.
    pub fn runtime_version_number(&self) -> Option<String> {
        let rest = self
            .runtime_version
            .trim_start_matches(|c: char| !c.is_ascii_digit());
        let token: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let token = token.trim_end_matches('.').to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

/// A valid group id is one or more dot-separated Java identifiers
fn is_valid_group_id(group_id: &str) -> bool {
    group_id.split('.').all(|segment| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

fn is_valid_artifact_id(artifact_id: &str) -> bool {
    let mut chars = artifact_id.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
