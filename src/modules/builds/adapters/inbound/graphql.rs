use async_graphql::{
    Context, Error, ErrorExtensions, InputObject, Object, Result as GqlResult, SimpleObject,
};

use crate::modules::builds::core::build::{Build, BuildPatch};
use crate::shared::infrastructure::build_store::BuildStoreError;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Build")]
pub struct GqlBuild {
    pub id: String,
    pub name: Option<String>,
}

impl From<Build> for GqlBuild {
    fn from(b: Build) -> Self {
        Self {
            id: b.id,
            name: (!b.name.is_empty()).then_some(b.name),
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "BuildInput")]
pub struct GqlBuildInput {
    pub id: String,
    pub name: Option<String>,
}

impl From<GqlBuildInput> for Build {
    fn from(input: GqlBuildInput) -> Self {
        Build::new(input.id, input.name.unwrap_or_default())
    }
}

impl ErrorExtensions for BuildStoreError {
    fn extend(&self) -> Error {
        let code = match self {
            BuildStoreError::AlreadyExists => "ALREADY_EXISTS",
            BuildStoreError::NotFound => "NOT_FOUND",
            BuildStoreError::InconsistentIds => "INCONSISTENT_IDS",
        };
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn build(&self, context: &Context<'_>, id: String) -> GqlResult<GqlBuild> {
        let state = context.data_unchecked::<AppState>();
        let build = state.store.read(&id).await.map_err(|e| e.extend())?;
        Ok(build.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_build(
        &self,
        context: &Context<'_>,
        id: String,
        name: Option<String>,
    ) -> GqlResult<GqlBuild> {
        if id.is_empty() {
            return Err(Error::new("id must not be empty")
                .extend_with(|_, e| e.set("code", "INVALID_INPUT")));
        }
        let state = context.data_unchecked::<AppState>();
        let build = Build::new(id, name.unwrap_or_default());
        state
            .store
            .create(build.clone())
            .await
            .map_err(|e| e.extend())?;
        Ok(build.into())
    }

    async fn replace_build(
        &self,
        context: &Context<'_>,
        id: String,
        build: GqlBuildInput,
    ) -> GqlResult<GqlBuild> {
        let state = context.data_unchecked::<AppState>();
        let build = Build::from(build);
        state
            .store
            .replace(&id, build.clone())
            .await
            .map_err(|e| e.extend())?;
        Ok(build.into())
    }

    async fn patch_build(
        &self,
        context: &Context<'_>,
        id: String,
        name: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .store
            .partial_update(&id, BuildPatch { id: None, name })
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    async fn delete_build(&self, context: &Context<'_>, id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.store.delete(&id).await.map_err(|e| e.extend())?;
        Ok(true)
    }
}
