// Shared test fixture for Build records.

use crate::modules::builds::core::build::Build;

pub struct BuildBuilder {
    inner: Build,
}

impl Default for BuildBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BuildBuilder {
    pub fn new() -> Self {
        Self {
            inner: Build {
                id: "build-fixed-0001".to_string(),
                name: "nightly".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn build(self) -> Build {
        self.inner
    }
}

#[cfg(test)]
mod build_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = BuildBuilder::default().build();
        assert_eq!(built.id, "build-fixed-0001");
        assert_eq!(built.name, "nightly");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = BuildBuilder::new().id("b-123").name("release").build();
        assert_eq!(custom, Build::new("b-123", "release"));
    }
}
