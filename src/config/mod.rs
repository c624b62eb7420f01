use crate::errors::{AppError, AppResult};
use crate::models::template::AgendaTemplate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding current.yaml and archive.yaml.
    pub workspace: String,
    /// Optional YAML file overriding the built-in meeting template.
    #[serde(default)]
    pub template: Option<String>,
    /// Fallback for `new` when --at is not given, e.g. "7:00 PM".
    #[serde(default)]
    pub default_start_time: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: Self::config_dir().to_string_lossy().to_string(),
            template: None,
            default_start_time: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ragenda")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".ragenda")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ragenda.conf")
    }

    pub fn workspace_dir(&self) -> PathBuf {
        PathBuf::from(&self.workspace)
    }

    pub fn set_workspace(&mut self, dir: String) {
        self.workspace = dir;
    }

    /// Resolve the meeting template: the configured YAML file if set,
    /// otherwise the built-in default.
    pub fn load_template(&self) -> AppResult<AgendaTemplate> {
        match &self.template {
            Some(path) => AgendaTemplate::from_path(&PathBuf::from(path)),
            None => Ok(AgendaTemplate::default()),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        eprintln!("⚠️ Failed to parse configuration file: {}", e);
                        Config::default()
                    }
                },
                Err(e) => {
                    eprintln!("⚠️ Failed to read configuration file: {}", e);
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and workspace directory.
    /// In test mode the config file is not written.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        let workspace = match custom_dir {
            Some(dir) => PathBuf::from(dir),
            None => Self::config_dir(),
        };
        fs::create_dir_all(&workspace)?;

        let config = Config {
            workspace: workspace.to_string_lossy().to_string(),
            template: None,
            default_start_time: None,
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(Self::config_file())?;
        f.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Verify the config file parses and its paths exist.
    pub fn check(&self) -> AppResult<()> {
        if !self.workspace_dir().exists() {
            return Err(AppError::Config(format!(
                "workspace directory {} does not exist",
                self.workspace
            )));
        }
        if let Some(t) = &self.template {
            let p = PathBuf::from(t);
            if !p.exists() {
                return Err(AppError::Config(format!("template file {} not found", t)));
            }
            AgendaTemplate::from_path(&p)?;
        }
        Ok(())
    }
}
