//! Artifact rendering
//!
//! Pure string rendering of the three generated files. Renderers take the
//! validated config plus pre-resolved inputs and return text; nothing here
//! touches the filesystem or network.

pub mod descriptor;
pub mod entrypoint;
pub mod properties;

use crate::error::GenerateError;
use crate::manifest::DependencyFragment;
use crate::project::{DatabaseSettings, ProjectConfig};

/// Fixed location of the properties artifact inside the archive
pub const PROPERTIES_PATH: &str = "src/main/resources/application.properties";

/// Fixed location of the build descriptor inside the archive
pub const DESCRIPTOR_PATH: &str = "pom.xml";

/// One generated file: relative archive path plus UTF-8 contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub contents: String,
}

/// Render all three artifacts for a validated config.
///
/// `fragments` must already be resolved in canonical order and `database`
/// holds the effective connection settings when a database is selected.
pub fn render_project(
    config: &ProjectConfig,
    fragments: &[&DependencyFragment],
    database: Option<&DatabaseSettings>,
) -> Result<Vec<Artifact>, GenerateError> {
    let java_version = config.runtime_version_number().ok_or_else(|| {
        GenerateError::invalid("runtimeVersion", "contains no version number")
    })?;

    Ok(vec![
        Artifact {
            path: DESCRIPTOR_PATH.to_string(),
            contents: descriptor::render(config, &java_version, fragments),
        },
        Artifact {
            path: entrypoint::path(config),
            contents: entrypoint::render(config),
        },
        Artifact {
            path: PROPERTIES_PATH.to_string(),
            contents: properties::render(config, database),
        },
    ])
}

/// Escape a value for embedding in XML element content or attributes
pub(crate) fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape_covers_markup_characters() {
        assert_eq!(
            xml_escape(r#"<Demo & "Friends">"#),
            "&lt;Demo &amp; &quot;Friends&quot;&gt;"
        );
        assert_eq!(xml_escape("plain text"), "plain text");
    }

    #[test]
    fn test_render_project_produces_three_artifacts() {
        let config = ProjectConfig {
            group_id: "com.example".to_string(),
            artifact_id: "demo".to_string(),
            runtime_version: "Java 21".to_string(),
            framework_version: "3.1.5".to_string(),
            ..Default::default()
        };
        let artifacts = render_project(&config, &[], None).unwrap();
        let paths: Vec<_> = artifacts.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "pom.xml",
                "src/main/java/com/example/Application.java",
                "src/main/resources/application.properties",
            ]
        );
    }
}
