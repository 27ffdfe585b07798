// Build is the record kept by the build store.
//
// Notes
// - `id` is the store key. It never changes once a build is stored.
// - An empty `name` means the label is unset, and is left out of the JSON shape.
// - Keep this file framework-free apart from serde.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Build {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Fields to change on an existing build. `None` means "not specified".
///
/// An empty string is treated the same as `None`, so a patch cannot clear
/// `name` back to unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl BuildPatch {
    pub fn id(&self) -> Option<&str> {
        specified(&self.id)
    }

    pub fn name(&self) -> Option<&str> {
        specified(&self.name)
    }

    /// True when the patch carries no id or carries the same id as `target`.
    pub fn targets(&self, target: &str) -> bool {
        self.id().is_none_or(|id| id == target)
    }
}

impl From<Build> for BuildPatch {
    fn from(build: Build) -> Self {
        let non_empty = |v: String| (!v.is_empty()).then_some(v);
        Self {
            id: non_empty(build.id),
            name: non_empty(build.name),
        }
    }
}

fn specified(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
