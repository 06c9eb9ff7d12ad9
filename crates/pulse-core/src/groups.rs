use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, CoreError};

/// Name of the built-in unfiltered view. Never usable as a group name.
pub const ALL_DATA: &str = "All Data";

/// Returns `true` if `name` collides with the built-in `"All Data"` view.
///
/// The comparison ignores surrounding whitespace and case so that near-miss
/// names like `"all data "` cannot shadow the unfiltered view in a picker.
#[must_use]
pub fn is_reserved_group_name(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(ALL_DATA)
}

/// A named keyword rule that carves a virtual view out of the dataset.
///
/// Matches the backend wire shape: `exclude_keywords` and `exact_match` are
/// optional there and default to empty / `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub exact_match: bool,
}

impl Group {
    /// Check the rules a group must satisfy before it is saved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGroup`] if the name is blank or reserved, or
    /// if no inclusion keyword is non-blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidGroup(
                "group name must be non-empty".to_string(),
            ));
        }
        if is_reserved_group_name(&self.name) {
            return Err(CoreError::InvalidGroup(format!(
                "'{}' is reserved for the unfiltered view",
                self.name.trim()
            )));
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(CoreError::InvalidGroup(format!(
                "group '{}' needs at least one keyword",
                self.name
            )));
        }
        Ok(())
    }
}

/// Raw input from the "new group" form: comma-separated keyword lists.
#[derive(Debug, Clone, Default)]
pub struct GroupDraft {
    pub name: String,
    pub keywords: String,
    pub exclude_keywords: String,
    pub exact_match: bool,
}

impl GroupDraft {
    /// Split the keyword inputs and build a validated [`Group`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGroup`] if the resulting group fails
    /// [`Group::validate`].
    pub fn into_group(self) -> Result<Group, CoreError> {
        let group = Group {
            name: self.name.trim().to_string(),
            keywords: split_keywords(&self.keywords),
            exclude_keywords: split_keywords(&self.exclude_keywords),
            exact_match: self.exact_match,
        };
        group.validate()?;
        Ok(group)
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GroupsFile {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Load and validate keyword groups from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_groups(path: &Path) -> Result<GroupsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::GroupsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let groups_file: GroupsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::GroupsFileParse)?;

    validate_groups(&groups_file)?;

    Ok(groups_file)
}

fn validate_groups(groups_file: &GroupsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for group in &groups_file.groups {
        group
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if !seen_names.insert(group.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate group name: '{}'",
                group.name
            )));
        }
    }

    Ok(())
}
