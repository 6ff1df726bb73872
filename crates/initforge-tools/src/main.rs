//! initforge CLI - generate starter projects without the HTTP service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use initforge_core::{
    generate, DatabaseCatalog, DatabaseSettings, PackageType, ProjectConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "initforge")]
#[command(about = "Generate Spring Boot starter project archives")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a project archive and write it to disk
    Generate(GenerateArgs),
    /// List the built-in database catalog
    Databases,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PackageTypeArg {
    Jar,
    War,
}

impl From<PackageTypeArg> for PackageType {
    fn from(arg: PackageTypeArg) -> Self {
        match arg {
            PackageTypeArg::Jar => PackageType::Jar,
            PackageTypeArg::War => PackageType::War,
        }
    }
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Read the full project configuration from a JSON file (same shape as
    /// the HTTP request body); all other config flags are ignored
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "com.example")]
    group_id: String,

    #[arg(long, default_value = "demo")]
    artifact_id: String,

    /// Display name written into the build descriptor
    #[arg(long = "name", default_value = "")]
    project_name: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "Java 21")]
    runtime_version: String,

    #[arg(long, default_value = "3.1.5")]
    framework_version: String,

    #[arg(long, value_enum, default_value = "jar")]
    package_type: PackageTypeArg,

    /// Dependency name (repeatable); defaults to the Spring Web baseline
    #[arg(short, long = "dependency")]
    dependencies: Vec<String>,

    /// Catalog database to wire into the generated properties
    #[arg(long)]
    database: Option<String>,

    /// Override the selected database's connection URL
    #[arg(long)]
    database_url: Option<String>,

    /// Override the selected database's username
    #[arg(long)]
    database_username: Option<String>,

    /// Override the selected database's password
    #[arg(long)]
    database_password: Option<String>,

    /// Override the selected database's driver class
    #[arg(long)]
    database_driver: Option<String>,

    /// Directory the archive is written into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

impl GenerateArgs {
    /// Assemble a `ProjectConfig` from flags, mirroring the wizard's
    /// defaults (the Spring Web baseline is always selected).
    fn to_config(&self) -> ProjectConfig {
        let dependencies = if self.dependencies.is_empty() {
            vec!["Spring Web".to_string()]
        } else {
            self.dependencies.clone()
        };

        let database_config = self.database.as_deref().and_then(|name| {
            let overridden = self.database_url.is_some()
                || self.database_username.is_some()
                || self.database_password.is_some()
                || self.database_driver.is_some();
            if !overridden {
                // No overrides: let the generator fall back to the defaults.
                return None;
            }
            let defaults = DatabaseCatalog::builtin()
                .find(name)
                .map(|db| db.defaults.to_settings())
                .unwrap_or_default();
            Some(DatabaseSettings {
                url: self.database_url.clone().unwrap_or(defaults.url),
                username: self.database_username.clone().unwrap_or(defaults.username),
                password: self.database_password.clone().unwrap_or(defaults.password),
                driver: self.database_driver.clone().unwrap_or(defaults.driver),
            })
        });

        ProjectConfig {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            project_name: self.project_name.clone(),
            description: self.description.clone(),
            runtime_version: self.runtime_version.clone(),
            framework_version: self.framework_version.clone(),
            package_type: self.package_type.into(),
            dependencies,
            selected_database: self.database.clone(),
            database_config,
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => args.to_config(),
    };

    let generated = generate(&config).context("Failed to generate project")?;

    let target = args.output.join(&generated.file_name);
    std::fs::write(&target, &generated.bytes)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Generated".green().bold(),
        target.display(),
        generated.bytes.len()
    );
    Ok(())
}

fn run_databases() {
    for db in &DatabaseCatalog::builtin().databases {
        println!("{} - {}", db.name.cyan().bold(), db.description);
        println!("  url: {}", db.defaults.url);
        if let Some(username) = &db.defaults.username {
            println!("  username: {}", username);
        }
        if let Some(driver) = &db.defaults.driver {
            println!("  driver: {}", driver);
        }
        println!();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Generate(generate_args) => run_generate(&generate_args),
        Command::Databases => {
            run_databases();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> GenerateArgs {
        GenerateArgs {
            config: None,
            group_id: "com.example".to_string(),
            artifact_id: "demo".to_string(),
            project_name: String::new(),
            description: String::new(),
            runtime_version: "Java 21".to_string(),
            framework_version: "3.1.5".to_string(),
            package_type: PackageTypeArg::Jar,
            dependencies: Vec::new(),
            database: None,
            database_url: None,
            database_username: None,
            database_password: None,
            database_driver: None,
            output: PathBuf::from("."),
        }
    }

    #[test]
    fn test_baseline_dependency_applied_when_none_given() {
        let config = default_args().to_config();
        assert_eq!(config.dependencies, vec!["Spring Web".to_string()]);
    }

    #[test]
    fn test_database_overrides_merge_with_catalog_defaults() {
        let args = GenerateArgs {
            database: Some("PostgreSQL".to_string()),
            database_url: Some("jdbc:postgresql://db:5432/app".to_string()),
            ..default_args()
        };
        let config = args.to_config();
        let settings = config.database_config.unwrap();
        assert_eq!(settings.url, "jdbc:postgresql://db:5432/app");
        assert_eq!(settings.username, "postgres");
        assert_eq!(settings.driver, "org.postgresql.Driver");
    }

    #[test]
    fn test_no_overrides_defers_to_generator_defaults() {
        let args = GenerateArgs {
            database: Some("H2".to_string()),
            ..default_args()
        };
        let config = args.to_config();
        assert_eq!(config.selected_database.as_deref(), Some("H2"));
        assert!(config.database_config.is_none());
    }

    #[test]
    fn test_flag_config_generates_successfully() {
        let config = default_args().to_config();
        assert!(generate(&config).is_ok());
    }

    #[test]
    fn test_config_file_round_trips_to_archive_on_disk() {
        let dir = std::env::temp_dir().join(format!("initforge-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("project.json");
        std::fs::write(
            &config_path,
            r#"{
                "groupId": "com.example.cli",
                "artifactId": "cli-demo",
                "projectName": "CLI Demo",
                "runtimeVersion": "Java 21",
                "frameworkVersion": "3.1.5",
                "dependencies": ["Spring Web", "Lombok"]
            }"#,
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(config_path),
            output: dir.clone(),
            ..default_args()
        };
        run_generate(&args).unwrap();

        let bytes = std::fs::read(dir.join("cli-demo.zip")).unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        assert!(archive.by_name("pom.xml").is_ok());
        assert!(archive
            .by_name("src/main/java/com/example/cli/Application.java")
            .is_ok());

        std::fs::remove_dir_all(&dir).ok();
    }
}
