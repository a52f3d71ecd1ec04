//! # Sync Configuration
//!
//! [`SyncConfig`] is the single immutable configuration value of a run. It is
//! built once at start-up from the built-in defaults, an optional YAML file and
//! the process environment, then passed by reference to every step.
//!
//! ## YAML format
//!
//! Every key is optional; whatever is omitted keeps its default.
//!
//! ```yaml
//! header: "# Listas Generadas según el orden establecido"
//! priority:
//!   - 2024.12 TCG
//!   - 2005.4 GOAT
//! sources:
//!   - name: koishi
//!     url: https://github.com/fallenstardust/YGOMobile-cn-ko-en
//!     file: mobile/assets/data/conf/lflist.conf
//!   - name: ignis
//!     url: https://github.com/ProjectIgnis/LFLists
//!     dir: .
//!     extension: .conf
//! destination:
//!   url: https://github.com/termitaklk/koishi-Iflist-clients
//!   branch: main
//! ```
//!
//! The first source is the authoritative one. A source with `file` is read as
//! a single list file; any other source is a directory of list files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::aggregate::DEFAULT_EXTENSION;
use crate::defaults;
use crate::error::{Error, Result};
use crate::merge::PriorityTable;
use crate::serialize::DEFAULT_HEADER;

/// One repository to pull list files from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSpec {
    /// Short name, also used as the clone directory name.
    pub name: String,
    /// Clone URL.
    pub url: String,
    /// Single list file inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Directory of list files inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Suffix selecting list files in `dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// How a source's files are laid out in its clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLayout {
    File(PathBuf),
    Directory { dir: PathBuf, extension: String },
}

impl SourceSpec {
    pub fn file(name: &str, url: &str, file: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            file: Some(file.to_string()),
            dir: None,
            extension: None,
        }
    }

    pub fn directory(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            file: None,
            dir: None,
            extension: None,
        }
    }

    pub fn layout(&self) -> SourceLayout {
        match &self.file {
            Some(file) => SourceLayout::File(PathBuf::from(file)),
            None => SourceLayout::Directory {
                dir: PathBuf::from(self.dir.as_deref().unwrap_or(".")),
                extension: self
                    .extension
                    .clone()
                    .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            },
        }
    }
}

/// Where the merged file is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DestinationSpec {
    pub url: String,
    pub branch: String,
    pub remote: String,
    /// File name of the merged list inside the destination repository.
    pub file: String,
    #[serde(rename = "commit-message")]
    pub commit_message: String,
    #[serde(rename = "committer-name")]
    pub committer_name: String,
    #[serde(rename = "committer-email")]
    pub committer_email: String,
}

impl Default for DestinationSpec {
    fn default() -> Self {
        Self {
            url: defaults::DESTINATION_URL.to_string(),
            branch: defaults::DESTINATION_BRANCH.to_string(),
            remote: defaults::DESTINATION_REMOTE.to_string(),
            file: defaults::OUTPUT_FILE.to_string(),
            commit_message: defaults::COMMIT_MESSAGE.to_string(),
            committer_name: defaults::COMMITTER_NAME.to_string(),
            committer_email: defaults::COMMITTER_EMAIL.to_string(),
        }
    }
}

/// On-disk overrides; anything absent keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    header: Option<String>,
    priority: Option<PriorityTable>,
    sources: Option<Vec<SourceSpec>>,
    destination: Option<DestinationSpec>,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub header: String,
    pub priority: PriorityTable,
    /// Sources in priority order; the first is authoritative.
    pub sources: Vec<SourceSpec>,
    pub destination: DestinationSpec,
    /// Directory for clones and the staged output file.
    pub workdir: PathBuf,
    /// Push credential, injected into http(s) destination URLs.
    pub token: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let mut sources = vec![SourceSpec::file(
            "authoritative",
            defaults::AUTHORITATIVE_URL,
            defaults::AUTHORITATIVE_FILE,
        )];
        sources.extend(
            defaults::FALLBACK_SOURCES
                .iter()
                .map(|(name, url)| SourceSpec::directory(name, url)),
        );

        Self {
            header: DEFAULT_HEADER.to_string(),
            priority: PriorityTable::new(defaults::PRIORITY_TABLE),
            sources,
            destination: DestinationSpec::default(),
            workdir: defaults::default_workdir(),
            token: None,
        }
    }
}

impl SyncConfig {
    /// Build the run configuration.
    ///
    /// Reads the YAML file when given, then the token from the environment.
    /// This is the only place the process environment is consulted.
    pub fn load(config_path: Option<&Path>, workdir: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => from_file(path)?,
            None => SyncConfig::default(),
        };
        if let Some(workdir) = workdir {
            config.workdir = workdir;
        }
        config.token = std::env::var(defaults::TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty());
        Ok(config)
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Path the merged file is staged at before publishing.
    pub fn staged_output(&self) -> PathBuf {
        self.workdir.join(&self.destination.file)
    }

    /// Clone directory for a source.
    pub fn source_dir(&self, source: &SourceSpec) -> PathBuf {
        self.workdir.join("sources").join(&source.name)
    }

    /// Clone directory for the destination repository.
    pub fn destination_dir(&self) -> PathBuf {
        self.workdir.join("destination")
    }

    /// Destination URL with the token injected as userinfo.
    ///
    /// Only http(s) URLs need a token; local paths and other transports are
    /// returned unchanged.
    pub fn destination_remote(&self) -> Result<String> {
        let url = &self.destination.url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Ok(url.clone());
        }

        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::MissingCredential {
                variable: defaults::TOKEN_ENV.to_string(),
            })?;

        let mut parsed = Url::parse(url)?;
        parsed
            .set_username(token)
            .map_err(|()| Error::ConfigParse {
                message: format!("destination URL cannot carry credentials: {}", url),
                hint: None,
            })?;
        Ok(parsed.to_string())
    }

    fn validate(&self) -> Result<()> {
        if self.priority.is_empty() {
            return Err(Error::ConfigParse {
                message: "priority table is empty".to_string(),
                hint: Some("List at least one section name under 'priority:'".to_string()),
            });
        }
        if self.sources.is_empty() {
            return Err(Error::ConfigParse {
                message: "no sources configured".to_string(),
                hint: Some("Add at least one entry under 'sources:'".to_string()),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for source in &self.sources {
            if source.file.is_some() && (source.dir.is_some() || source.extension.is_some()) {
                return Err(Error::ConfigParse {
                    message: format!("source '{}' sets both 'file' and 'dir'", source.name),
                    hint: Some("A source is either one file or a directory of files".to_string()),
                });
            }
            if source.name.is_empty() || source.name.contains(['/', '\\']) || source.name == ".." {
                return Err(Error::ConfigParse {
                    message: format!("invalid source name '{}'", source.name),
                    hint: Some("Source names are used as directory names".to_string()),
                });
            }
            if !seen.insert(source.name.as_str()) {
                return Err(Error::ConfigParse {
                    message: format!("duplicate source name '{}'", source.name),
                    hint: None,
                });
            }
        }
        Ok(())
    }
}

/// Parse YAML overrides on top of the defaults.
pub fn parse(yaml: &str) -> Result<SyncConfig> {
    let file: ConfigFile = if yaml.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let mut config = SyncConfig::default();
    if let Some(header) = file.header {
        config.header = header;
    }
    if let Some(priority) = file.priority {
        config.priority = priority;
    }
    if let Some(sources) = file.sources {
        config.sources = sources;
    }
    if let Some(destination) = file.destination {
        config.destination = destination;
    }

    config.validate()?;
    Ok(config)
}

/// Read and parse a YAML configuration file.
pub fn from_file(path: &Path) -> Result<SyncConfig> {
    if !path.exists() {
        return Err(Error::ConfigParse {
            message: format!("Configuration file not found: {}", path.display()),
            hint: None,
        });
    }
    parse(&fs::read_to_string(path)?)
}
