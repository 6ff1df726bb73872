//! Maven build descriptor renderer

use super::xml_escape;
use crate::manifest::DependencyFragment;
use crate::project::ProjectConfig;

/// Render `pom.xml` from the config, the extracted Java version and the
/// resolved dependency fragments (already in canonical order).
///
/// Free-text fields are XML-escaped; identifier and version fields have
/// already been validated against safe character sets.
pub fn render(
    config: &ProjectConfig,
    java_version: &str,
    fragments: &[&DependencyFragment],
) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>{group_id}</groupId>
    <artifactId>{artifact_id}</artifactId>
    <version>0.0.1-SNAPSHOT</version>
    <name>{name}</name>
    <description>{description}</description>

    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>{framework_version}</version>
        <relativePath/>
    </parent>

    <properties>
        <java.version>{java_version}</java.version>
    </properties>

    <dependencies>
{dependencies}    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>
</project>
"#,
        group_id = config.group_id,
        artifact_id = config.artifact_id,
        name = xml_escape(&config.project_name),
        description = xml_escape(&config.description),
        framework_version = config.framework_version,
        java_version = java_version,
        dependencies = render_dependencies(fragments),
    )
}

fn render_dependencies(fragments: &[&DependencyFragment]) -> String {
    let mut block = String::new();
    for fragment in fragments {
        block.push_str("        <dependency>\n");
        block.push_str(&format!(
            "            <groupId>{}</groupId>\n",
            fragment.group_id
        ));
        block.push_str(&format!(
            "            <artifactId>{}</artifactId>\n",
            fragment.artifact_id
        ));
        if let Some(scope) = fragment.scope {
            block.push_str(&format!("            <scope>{}</scope>\n", scope));
        }
        if fragment.optional {
            block.push_str("            <optional>true</optional>\n");
        }
        block.push_str("        </dependency>\n");
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::DEPENDENCY_TABLE;

    fn config() -> ProjectConfig {
        ProjectConfig {
            group_id: "com.example".to_string(),
            artifact_id: "demo".to_string(),
            project_name: "Demo".to_string(),
            description: "A demo project".to_string(),
            runtime_version: "Java 21".to_string(),
            framework_version: "3.1.5".to_string(),
            ..Default::default()
        }
    }

    fn fragment(name: &str) -> &'static DependencyFragment {
        DEPENDENCY_TABLE.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn test_inserts_identifiers_and_versions() {
        let pom = render(&config(), "21", &[]);
        assert!(pom.contains("<groupId>com.example</groupId>"));
        assert!(pom.contains("<artifactId>demo</artifactId>"));
        assert!(pom.contains("<name>Demo</name>"));
        assert!(pom.contains("<description>A demo project</description>"));
        assert!(pom.contains("<version>3.1.5</version>"));
        assert!(pom.contains("<java.version>21</java.version>"));
    }

    #[test]
    fn test_escapes_free_text_fields() {
        let mut cfg = config();
        cfg.project_name = "Demo <&> Co".to_string();
        cfg.description = "uses \"quotes\"".to_string();
        let pom = render(&cfg, "21", &[]);
        assert!(pom.contains("<name>Demo &lt;&amp;&gt; Co</name>"));
        assert!(pom.contains("<description>uses &quot;quotes&quot;</description>"));
        assert!(!pom.contains("Demo <&> Co"));
    }

    #[test]
    fn test_dependency_block_includes_scope_and_optional() {
        let fragments = vec![fragment("Spring Web"), fragment("Spring Boot DevTools")];
        let pom = render(&config(), "21", &fragments);
        assert!(pom.contains("<artifactId>spring-boot-starter-web</artifactId>"));
        assert!(pom.contains("<artifactId>spring-boot-devtools</artifactId>"));
        assert!(pom.contains("<scope>runtime</scope>"));
        assert!(pom.contains("<optional>true</optional>"));

        let web = pom.find("spring-boot-starter-web").unwrap();
        let devtools = pom.find("spring-boot-devtools").unwrap();
        assert!(web < devtools);
    }

    #[test]
    fn test_no_fragments_yields_empty_dependencies_block() {
        let pom = render(&config(), "21", &[]);
        assert!(pom.contains("<dependencies>\n    </dependencies>"));
    }
}
