//! Dependency manifest table and resolution
//!
//! Maps human-readable dependency names to Maven manifest fragments. The
//! table is explicitly ordered; resolution always iterates the table and
//! filters by membership in the selection, so the emitted order is canonical
//! regardless of how the caller's list is ordered. Set-like iteration over
//! the user's selection would make output order unspecified.

/// One Maven `<dependency>` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyFragment {
    /// Human-readable name used by the wizard, e.g. `"Spring Web"`
    pub name: &'static str,
    pub group_id: &'static str,
    pub artifact_id: &'static str,
    pub scope: Option<&'static str>,
    pub optional: bool,
}

/// Supported dependencies in canonical emission order: the baseline Spring
/// Boot starters first, then one driver entry per catalog database.
pub const DEPENDENCY_TABLE: &[DependencyFragment] = &[
    DependencyFragment {
        name: "Spring Web",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-web",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "Spring Data JPA",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-data-jpa",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "Spring Security",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-security",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "Lombok",
        group_id: "org.projectlombok",
        artifact_id: "lombok",
        scope: None,
        optional: true,
    },
    DependencyFragment {
        name: "Spring Boot DevTools",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-devtools",
        scope: Some("runtime"),
        optional: true,
    },
    DependencyFragment {
        name: "Spring Boot Actuator",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-actuator",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "Validation",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-validation",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "Spring Boot Test",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-test",
        scope: Some("test"),
        optional: false,
    },
    DependencyFragment {
        name: "PostgreSQL Driver",
        group_id: "org.postgresql",
        artifact_id: "postgresql",
        scope: Some("runtime"),
        optional: false,
    },
    DependencyFragment {
        name: "MySQL Driver",
        group_id: "com.mysql",
        artifact_id: "mysql-connector-j",
        scope: Some("runtime"),
        optional: false,
    },
    DependencyFragment {
        name: "MongoDB Driver",
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-data-mongodb",
        scope: None,
        optional: false,
    },
    DependencyFragment {
        name: "H2 Driver",
        group_id: "com.h2database",
        artifact_id: "h2",
        scope: Some("runtime"),
        optional: false,
    },
];

/// Resolve a selection to manifest fragments in canonical table order.
///
/// `derived_driver` is the `"<Database> Driver"` entry computed from the
/// currently selected database. Keeping it derived rather than merged into
/// the stored selection means deselecting the database drops the driver
/// again. Names absent from the table resolve to nothing.
pub fn resolve(selected: &[String], derived_driver: Option<&str>) -> Vec<&'static DependencyFragment> {
    DEPENDENCY_TABLE
        .iter()
        .filter(|fragment| {
            selected.iter().any(|name| name == fragment.name)
                || derived_driver == Some(fragment.name)
        })
        .collect()
}
