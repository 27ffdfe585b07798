use crate::modules::builds::core::build::{Build, BuildPatch};

/// Folds a patch into an existing build. The id is never touched.
pub fn apply_patch(existing: Build, patch: &BuildPatch) -> Build {
    match patch.name() {
        Some(name) => Build {
            name: name.to_string(),
            ..existing
        },
        None => existing,
    }
}
