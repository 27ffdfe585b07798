use crate::modules::builds::core::build::Build;
use crate::shared::infrastructure::build_store::{BuildStore, BuildStoreError};
use crate::shared::infrastructure::build_store::in_memory::InMemoryBuildStore;
use crate::tests::fixtures::builds::BuildBuilder;

#[tokio::test]
async fn walks_a_build_through_its_lifecycle() {
    let store = InMemoryBuildStore::new();
    let build = BuildBuilder::new().id("x").name("old").build();

    store.create(build.clone()).await.unwrap();
    assert_eq!(store.read("x").await, Ok(build));

    store
        .partial_update("x", Build::new("x", "new").into())
        .await
        .unwrap();
    assert_eq!(store.read("x").await, Ok(Build::new("x", "new")));

    store
        .partial_update("x", Build::new("", "").into())
        .await
        .unwrap();
    assert_eq!(store.read("x").await, Ok(Build::new("x", "new")));

    store.replace("x", Build::new("x", "")).await.unwrap();
    assert_eq!(store.read("x").await, Ok(Build::new("x", "")));

    store.delete("x").await.unwrap();
    assert_eq!(store.read("x").await, Err(BuildStoreError::NotFound));
    assert_eq!(store.delete("x").await, Err(BuildStoreError::NotFound));
    assert_eq!(
        store
            .partial_update("x", Build::new("x", "again").into())
            .await,
        Err(BuildStoreError::NotFound)
    );

    store.create(Build::new("x", "reborn")).await.unwrap();
    assert_eq!(store.read("x").await, Ok(Build::new("x", "reborn")));
}
