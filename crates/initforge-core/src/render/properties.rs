//! Flat key-value properties renderer

use crate::project::{DatabaseSettings, ProjectConfig};

/// Render `application.properties`.
///
/// Always emits the application name. With a database selected, appends the
/// connection URL and then username, password and driver class in that fixed
/// order, each only when its value is non-empty after trimming. An H2 setup
/// with the default blank password therefore gets no password line.
pub fn render(config: &ProjectConfig, database: Option<&DatabaseSettings>) -> String {
    let mut properties = format!("spring.application.name={}\n", config.artifact_id);

    if let Some(db) = database {
        properties.push_str("\n# Database Configuration\n");
        properties.push_str(&format!("spring.datasource.url={}\n", db.url));

        let optional_keys = [
            ("spring.datasource.username", &db.username),
            ("spring.datasource.password", &db.password),
            ("spring.datasource.driver-class-name", &db.driver),
        ];
        for (key, value) in optional_keys {
            if !value.trim().is_empty() {
                properties.push_str(&format!("{}={}\n", key, value));
            }
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig {
            artifact_id: "demo".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_database_emits_only_application_name() {
        assert_eq!(render(&config(), None), "spring.application.name=demo\n");
    }

    #[test]
    fn test_full_relational_settings() {
        let db = DatabaseSettings {
            url: "jdbc:postgresql://localhost:5432/dbname".to_string(),
            username: "postgres".to_string(),
            password: "password".to_string(),
            driver: "org.postgresql.Driver".to_string(),
        };
        let text = render(&config(), Some(&db));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "spring.application.name=demo",
                "",
                "# Database Configuration",
                "spring.datasource.url=jdbc:postgresql://localhost:5432/dbname",
                "spring.datasource.username=postgres",
                "spring.datasource.password=password",
                "spring.datasource.driver-class-name=org.postgresql.Driver",
            ]
        );
    }

    #[test]
    fn test_url_only_database_emits_single_datasource_line() {
        let db = DatabaseSettings {
            url: "mongodb://localhost:27017/dbname".to_string(),
            ..Default::default()
        };
        let text = render(&config(), Some(&db));
        let datasource_lines = text
            .lines()
            .filter(|l| l.starts_with("spring.datasource."))
            .count();
        assert_eq!(datasource_lines, 1);
        assert!(text.contains("spring.datasource.url=mongodb://localhost:27017/dbname"));
    }

    #[test]
    fn test_blank_password_is_suppressed() {
        let db = DatabaseSettings {
            url: "jdbc:h2:mem:testdb".to_string(),
            username: "sa".to_string(),
            password: "  ".to_string(),
            driver: "org.h2.Driver".to_string(),
        };
        let text = render(&config(), Some(&db));
        assert!(text.contains("spring.datasource.username=sa"));
        assert!(!text.contains("spring.datasource.password"));
        assert!(text.contains("spring.datasource.driver-class-name=org.h2.Driver"));
    }
}
