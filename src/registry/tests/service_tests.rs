//! Unit tests for the registration service.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use super::args;
use crate::registry::{
    adapters::memory::InMemoryEntryStore,
    domain::{Category, EntrySource, RegistryDomainError},
    ports::EntryStoreError,
    services::{RegisterAlgorithmRequest, RegistryService, RegistryServiceError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;

type TestService = RegistryService<InMemoryEntryStore, DefaultClock>;

#[fixture]
fn service() -> TestService {
    RegistryService::new(Arc::new(InMemoryEntryStore::new()), Arc::new(DefaultClock))
}

fn custom_tuner(name: &str) -> RegisterAlgorithmRequest {
    RegisterAlgorithmRequest::new(Category::Tuner, name, "ext.custom.CustomTuner")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_and_lookup(service: TestService) {
    let registered = service
        .register(custom_tuner("MyTuner"))
        .await
        .expect("registration should succeed");

    let found = service
        .lookup(Category::Tuner, "MyTuner")
        .await
        .expect("lookup should succeed");

    assert_eq!(found, Some(registered));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_source_is_user_tag(service: TestService) {
    let registered = service
        .register(custom_tuner("MyTuner"))
        .await
        .expect("registration should succeed");

    assert_eq!(registered.source(), &EntrySource::Custom("user".to_owned()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_source_tag_is_preserved(service: TestService) {
    let registered = service
        .register(custom_tuner("MyTuner").with_source("vendor-pack"))
        .await
        .expect("registration should succeed");

    assert_eq!(
        registered.source(),
        &EntrySource::Custom("vendor-pack".to_owned())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_registration_is_rejected(service: TestService) {
    service
        .register(custom_tuner("MyTuner"))
        .await
        .expect("first registration should succeed");

    let duplicate = service.register(custom_tuner("MyTuner")).await;

    assert!(matches!(
        duplicate,
        Err(RegistryServiceError::Store(
            EntryStoreError::DuplicateKey { .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overwriting_replaces_the_whole_entry(service: TestService) {
    service
        .register(custom_tuner("MyTuner").with_default_args(args(json!({"seed": 1}))))
        .await
        .expect("first registration should succeed");

    let replacement = service
        .register(
            RegisterAlgorithmRequest::new(Category::Tuner, "MyTuner", "other.impl.Tuner")
                .overwriting(),
        )
        .await
        .expect("overwrite should succeed");

    assert!(replacement.default_args().is_empty());
    let found = service
        .lookup(Category::Tuner, "MyTuner")
        .await
        .expect("lookup should succeed")
        .expect("entry should exist");
    assert_eq!(found.implementation().as_str(), "other.impl.Tuner");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregister_then_lookup_is_absent(service: TestService) {
    service
        .register(custom_tuner("MyTuner"))
        .await
        .expect("registration should succeed");

    service
        .unregister(Category::Tuner, "MyTuner")
        .await
        .expect("unregister should succeed");

    let found = service
        .lookup(Category::Tuner, "MyTuner")
        .await
        .expect("lookup should succeed");
    assert_eq!(found, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregister_of_absent_entry_fails(service: TestService) {
    let result = service.unregister(Category::Tuner, "Ghost").await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::Store(EntryStoreError::NotFound { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_pairs_names_with_sources_in_order(service: TestService) {
    service
        .register(custom_tuner("Alpha"))
        .await
        .expect("register Alpha");
    service
        .register(custom_tuner("Beta").with_source("vendor"))
        .await
        .expect("register Beta");

    let listed = service
        .list(Category::Tuner)
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name().as_str(), "Alpha");
    assert_eq!(listed[0].source(), &EntrySource::Custom("user".to_owned()));
    assert_eq!(listed[1].name().as_str(), "Beta");
    assert_eq!(listed[1].source(), &EntrySource::Custom("vendor".to_owned()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn args_disabled_request_with_defaults_is_a_domain_error(service: TestService) {
    let result = service
        .register(
            custom_tuner("MyTuner")
                .with_default_args(args(json!({"seed": 1})))
                .args_disabled(),
        )
        .await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::Domain(
            RegistryDomainError::DefaultArgsWithArgsDisabled(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_name_is_a_domain_error(service: TestService) {
    let result = service.register(custom_tuner("not a name!")).await;

    assert!(matches!(
        result,
        Err(RegistryServiceError::Domain(
            RegistryDomainError::InvalidAlgorithmName(_)
        ))
    ));
}
