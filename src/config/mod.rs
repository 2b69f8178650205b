use ::config::{Config as Settings, File, FileFormat, Map, Source, Value};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_SECTION, HOST_KEY, MEMBERS_KEY, PASSWORD_KEY};
use crate::error::{CheckError, Result};
use crate::majordomo::parse_address;

/// Keys of one INI section, lower-cased
type SectionValues = HashMap<String, String>;

/// Expected membership and connection settings for one list
#[derive(Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub name: String,
    pub members: BTreeSet<String>,
    pub host: String,
    pub password: String,
}

impl fmt::Debug for ListConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConfig")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("host", &self.host)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// All monitored lists, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub lists: Vec<ListConfig>,
}

impl Config {
    pub fn from_ini_str(text: &str) -> Result<Self> {
        let settings = Settings::builder()
            .add_source(File::from_str(text, FileFormat::Ini))
            .build()?;
        Self::from_settings(&settings)
    }

    /// Resolve every non-`[DEFAULT]` section into a list, falling back to `[DEFAULT]` values
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut defaults = SectionValues::new();
        let mut sections = Vec::new();

        for (name, value) in settings.collect()? {
            let table = value.into_table().map_err(|_| {
                CheckError::Config(format!("Setting '{}' appears outside of any section", name))
            })?;
            let values = section_values(table)?;
            if name.eq_ignore_ascii_case(DEFAULT_SECTION) {
                defaults = values;
            } else {
                sections.push((name, values));
            }
        }

        let lists = sections
            .into_iter()
            .map(|(name, values)| resolve_list(name, &values, &defaults))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { lists })
    }
}

/// Load the INI configuration file at `path`
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(CheckError::Config(format!(
            "File {} not found",
            path.display()
        )));
    }

    let settings = Settings::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()?;
    let config = Config::from_settings(&settings)?;
    debug!(path = %path.display(), lists = config.lists.len(), "loaded configuration");
    Ok(config)
}

fn section_values(table: Map<String, Value>) -> Result<SectionValues> {
    table
        .into_iter()
        .map(|(key, value)| -> Result<(String, String)> {
            Ok((key.to_lowercase(), value.into_string()?))
        })
        .collect()
}

fn resolve_list(
    name: String,
    values: &SectionValues,
    defaults: &SectionValues,
) -> Result<ListConfig> {
    let required = |key: &str| {
        values
            .get(key)
            .or_else(|| defaults.get(key))
            .cloned()
            .ok_or_else(|| {
                CheckError::Config(format!("List {} has no '{}' setting", name, key))
            })
    };

    let members = parse_members(&required(MEMBERS_KEY)?);
    let host = required(HOST_KEY)?;
    let password = required(PASSWORD_KEY)?;
    Ok(ListConfig {
        name,
        members,
        host,
        password,
    })
}

/// Split a comma-separated `members` value into normalized addresses
pub fn parse_members(value: &str) -> BTreeSet<String> {
    value.split(',').filter_map(parse_address).collect()
}
