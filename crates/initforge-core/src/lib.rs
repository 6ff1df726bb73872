//! initforge core - Spring Boot project generation
//!
//! This library renders a Spring Boot starter project (Maven build
//! descriptor, application entry point, `application.properties`) from a
//! single [`ProjectConfig`] value and packages the result into a zip
//! archive. It is the shared core behind the HTTP service and the CLI.
//!
//! # Architecture
//!
//! The crate is a pure pipeline with no I/O:
//!
//! - **catalog** - the built-in database options a wizard can offer
//! - **manifest** - the ordered dependency table and selection resolution
//! - **render** - string renderers for the three artifacts
//! - **archive** - in-memory zip assembly
//! - **generator** - the pipeline tying the stages together
//!
//! # Example
//!
//! ```
//! use initforge_core::{generate, ProjectConfig};
//!
//! let config = ProjectConfig {
//!     group_id: "com.example".to_string(),
//!     artifact_id: "demo".to_string(),
//!     runtime_version: "Java 21".to_string(),
//!     framework_version: "3.1.5".to_string(),
//!     dependencies: vec!["Spring Web".to_string()],
//!     ..Default::default()
//! };
//!
//! let generated = generate(&config).unwrap();
//! assert_eq!(generated.file_name, "demo.zip");
//! ```

pub mod archive;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod project;
pub mod render;

// Re-export main types for convenience
pub use catalog::{ConnectionDefaults, DatabaseCatalog, DatabaseOption};
pub use error::GenerateError;
pub use generator::{generate, GeneratedProject};
pub use manifest::{DependencyFragment, DEPENDENCY_TABLE};
pub use project::{DatabaseSettings, PackageType, ProjectConfig};
pub use render::Artifact;
