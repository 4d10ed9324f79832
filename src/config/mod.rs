pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_identifier, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HTML_PATH: &str = "locations.html";
pub const DEFAULT_JSON_PATH: &str = "locations.json";
pub const DEFAULT_CSV_PATH: &str = "locations.csv";

/// One configuration layer. Unset fields leave the layer below untouched.
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathOverrides {
    #[cfg_attr(feature = "cli", arg(long, global = true, help = "HTML page holding the array literal"))]
    pub html: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, global = true, help = "Location JSON file"))]
    pub json: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, global = true, help = "CSV output file"))]
    pub csv: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, global = true, help = "JavaScript variable to extract (default: any)")
    )]
    pub variable: Option<String>,
}

/// Resolved settings shared by every stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtlSettings {
    pub html_path: String,
    pub json_path: String,
    pub csv_path: String,
    pub variable: Option<String>,
}

impl Default for EtlSettings {
    fn default() -> Self {
        Self {
            html_path: DEFAULT_HTML_PATH.to_string(),
            json_path: DEFAULT_JSON_PATH.to_string(),
            csv_path: DEFAULT_CSV_PATH.to_string(),
            variable: None,
        }
    }
}

impl EtlSettings {
    pub fn apply(mut self, overrides: &PathOverrides) -> Self {
        if let Some(html) = &overrides.html {
            self.html_path = html.clone();
        }
        if let Some(json) = &overrides.json {
            self.json_path = json.clone();
        }
        if let Some(csv) = &overrides.csv {
            self.csv_path = csv.clone();
        }
        if let Some(variable) = &overrides.variable {
            self.variable = Some(variable.clone());
        }
        self
    }
}

impl ConfigProvider for EtlSettings {
    fn html_path(&self) -> &str {
        &self.html_path
    }

    fn json_path(&self) -> &str {
        &self.json_path
    }

    fn csv_path(&self) -> &str {
        &self.csv_path
    }

    fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }
}

impl Validate for EtlSettings {
    fn validate(&self) -> Result<()> {
        validate_path("paths.html", &self.html_path)?;
        validate_path("paths.json", &self.json_path)?;
        validate_path("paths.csv", &self.csv_path)?;
        validate_distinct_paths("paths.json", &self.html_path, &self.json_path)?;
        validate_distinct_paths("paths.csv", &self.json_path, &self.csv_path)?;
        validate_distinct_paths("paths.csv", &self.html_path, &self.csv_path)?;

        if let Some(variable) = &self.variable {
            validate_identifier("extract.variable", variable)?;
        }
        Ok(())
    }
}

/// Options shared by every binary.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CliArgs {
    #[command(flatten)]
    pub paths: PathOverrides,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// 預設值 < TOML 檔 < 命令列參數
    pub fn settings(&self) -> Result<EtlSettings> {
        let mut settings = EtlSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            let toml = toml_config::TomlConfig::from_file(path)?;
            settings = settings.apply(&toml.overrides());
        }

        let settings = settings.apply(&self.paths);
        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    #[test]
    fn test_defaults() {
        let settings = EtlSettings::default();

        assert_eq!(settings.html_path(), "locations.html");
        assert_eq!(settings.json_path(), "locations.json");
        assert_eq!(settings.csv_path(), "locations.csv");
        assert_eq!(settings.variable(), None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_layers_apply_in_order() {
        let toml = TomlConfig::from_toml_str(
            "[paths]\njson = \"from_toml.json\"\ncsv = \"from_toml.csv\"\n[extract]\nvariable = \"my_Coords\"\n",
        )
        .unwrap();
        let cli = PathOverrides {
            csv: Some("from_cli.csv".to_string()),
            ..Default::default()
        };

        let settings = EtlSettings::default()
            .apply(&toml.overrides())
            .apply(&cli);

        assert_eq!(settings.html_path, "locations.html");
        assert_eq!(settings.json_path, "from_toml.json");
        assert_eq!(settings.csv_path, "from_cli.csv");
        assert_eq!(settings.variable.as_deref(), Some("my_Coords"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty_path = EtlSettings {
            csv_path: String::new(),
            ..Default::default()
        };
        assert!(empty_path.validate().is_err());

        let bad_variable = EtlSettings {
            variable: Some("my coords".to_string()),
            ..Default::default()
        };
        assert!(bad_variable.validate().is_err());

        let same_paths = EtlSettings {
            csv_path: DEFAULT_JSON_PATH.to_string(),
            ..Default::default()
        };
        assert!(same_paths.validate().is_err());
    }

    #[test]
    fn test_csv_cannot_overwrite_html() {
        let settings = EtlSettings::default().apply(&PathOverrides {
            csv: Some(DEFAULT_HTML_PATH.to_string()),
            ..Default::default()
        });

        assert!(matches!(
            settings.validate(),
            Err(crate::utils::error::EtlError::InvalidConfigValueError { .. })
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_args_without_config_file() {
        let args = CliArgs {
            paths: PathOverrides {
                html: Some("page.html".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let settings = args.settings().unwrap();
        assert_eq!(settings.html_path, "page.html");
        assert_eq!(settings.json_path, DEFAULT_JSON_PATH);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_args_missing_config_file() {
        let args = CliArgs {
            config: Some("/nonexistent/locations-etl.toml".to_string()),
            ..Default::default()
        };
        assert!(args.settings().is_err());
    }
}
