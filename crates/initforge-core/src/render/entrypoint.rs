//! Application entry-point source renderer

use crate::project::ProjectConfig;

/// Archive path of the entry-point source, derived from the group id
pub fn path(config: &ProjectConfig) -> String {
    format!("src/main/java/{}/Application.java", config.package_path())
}

/// Render the minimal Spring Boot application class. Only the package
/// declaration varies; every other config field leaves this file unchanged.
pub fn render(config: &ProjectConfig) -> String {
    format!(
        r#"package {};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class Application {{
    public static void main(String[] args) {{
        SpringApplication.run(Application.class, args);
    }}
}}
"#,
        config.group_id
    )
}
