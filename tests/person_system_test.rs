use hateoas_siren::lifecycle::PersonSystem;
use hateoas_siren::person::{self, PageRequest, Person, PersonError, PersonInput};
use hateoas_siren::siren::{SirenConfiguration, SirenLinkDiscoverer, SirenMapper};
use hateoas_siren::store::{ResourceStore, StoreError};
use serde_json::{json, Value};

fn system() -> PersonSystem {
    PersonSystem::with_mapper(SirenMapper::new(SirenConfiguration::default()))
        .expect("Failed to start system")
}

fn parse(document: &str) -> Value {
    serde_json::from_str(document).expect("valid json")
}

/// Full CRUD cycle through the store actor.
#[tokio::test]
async fn test_store_crud_cycle() {
    let (store, client) = ResourceStore::<Person>::new(8);
    let handle = tokio::spawn(store.run());

    let created = client
        .create(PersonInput::new("Alice", 30))
        .await
        .expect("Failed to create person");
    assert_eq!(created.id, 1);

    let fetched = client
        .get(created.id)
        .await
        .expect("Failed to get person")
        .expect("Person not found");
    assert_eq!(fetched, created);

    let updated = client
        .update(created.id, PersonInput::new("Alice", 31))
        .await
        .expect("Failed to update person");
    assert_eq!(updated.age, 31);

    client.delete(created.id).await.expect("Failed to delete person");
    assert!(client.get(created.id).await.expect("Failed to get person").is_none());
    assert!(matches!(client.delete(created.id).await, Err(StoreError::NotFound(_))));

    drop(client);
    handle.await.expect("Store task panicked");
}

#[tokio::test]
async fn test_failed_update_leaves_person_untouched() {
    let (store, service) = person::new();
    let handle = tokio::spawn(store.run());

    let person = service
        .insert(PersonInput::new("Bob", 50))
        .await
        .expect("Failed to insert");
    let result = service.update(person.id, PersonInput::new("  ", 51)).await;

    assert!(matches!(result, Err(PersonError::ValidationError(_))));
    let unchanged = service
        .find_one(person.id)
        .await
        .expect("Failed to find")
        .expect("Person not found");
    assert_eq!(unchanged, person);

    drop(service);
    handle.await.expect("Store task panicked");
}

#[tokio::test]
async fn test_service_treats_missing_person_as_none() {
    let system = system();

    assert!(system.service.find_one(42).await.expect("Failed to find").is_none());
    assert!(system
        .service
        .update(42, PersonInput::new("Nobody", 1))
        .await
        .expect("Failed to update")
        .is_none());
    assert!(!system.service.delete(42).await.expect("Failed to delete"));

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_rendered_collection_lists_seeded_persons() {
    let system = system();
    system.seed().await.expect("Failed to seed");

    let document = parse(&system.render_all().await.expect("Failed to render"));

    assert_eq!(document["class"], json!(["collection"]));
    assert_eq!(document["properties"], json!({ "size": 3 }));
    let names: Vec<&str> = document["entities"]
        .as_array()
        .expect("entities")
        .iter()
        .map(|entity| entity["properties"]["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["Ingo", "Marcel", "Sophia"]);

    // The collection self link affords insert, the lookup template becomes an action.
    let actions: Vec<&str> = document["actions"]
        .as_array()
        .expect("actions")
        .iter()
        .map(|action| action["name"].as_str().expect("name"))
        .collect();
    assert_eq!(actions, ["insert", "findOne"]);

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_rendered_person_offers_update_and_delete() {
    let system = system();
    system.seed().await.expect("Failed to seed");

    let document = parse(
        &system
            .render_one(2)
            .await
            .expect("Failed to render")
            .expect("Person not found"),
    );

    assert_eq!(document["class"], json!(["person"]));
    assert_eq!(document["properties"], json!({ "id": 2, "name": "Marcel", "age": 33 }));
    assert_eq!(document["links"], json!([{ "rel": ["self"], "href": "/persons/2" }]));
    assert_eq!(document["actions"][0]["method"], "PUT");
    assert_eq!(document["actions"][1]["method"], "DELETE");
    assert!(document["actions"][1].get("fields").is_none());

    assert!(system.render_one(99).await.expect("Failed to render").is_none());

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_rendered_page_carries_metadata_and_navigation() {
    let system = system();
    system.seed().await.expect("Failed to seed");

    let document = parse(
        &system
            .render_page(PageRequest::new(1, 2))
            .await
            .expect("Failed to render"),
    );

    assert_eq!(document["class"], json!(["page"]));
    assert_eq!(
        document["properties"],
        json!({ "size": 2, "totalElements": 3, "totalPages": 2, "number": 1 })
    );
    assert_eq!(document["entities"].as_array().map(Vec::len), Some(1));

    let discoverer = SirenLinkDiscoverer::new();
    let page = document.to_string();
    let prev = discoverer
        .find_link_with_rel("prev", &page)
        .expect("Failed to parse")
        .expect("prev link");
    assert_eq!(prev.href(), "/persons?page=0&size=2");
    assert!(discoverer
        .find_link_with_rel("next", &page)
        .expect("Failed to parse")
        .is_none());

    let invalid = system.render_page(PageRequest::new(0, 0)).await;
    assert!(matches!(invalid, Err(PersonError::ValidationError(_))));

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_insert_from_json_body() {
    let system = system();

    let document = parse(
        &system
            .insert_json(r#"{"name":"Dave","age":30}"#)
            .await
            .expect("Failed to insert"),
    );
    assert_eq!(document["properties"]["name"], "Dave");
    assert_eq!(document["links"][0]["href"], "/persons/1");

    let rejected = system.insert_json(r#"{"name":""}"#).await;
    assert!(matches!(rejected, Err(PersonError::ValidationError(_))));

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_root_document_links_to_collection() {
    let system = system();

    let root = system.render_root().expect("Failed to render");
    let persons = SirenLinkDiscoverer::new()
        .find_link_with_rel("persons", &root)
        .expect("Failed to parse")
        .expect("persons link");
    assert_eq!(persons.href(), "/persons");

    let document = parse(&root);
    let actions: Vec<&str> = document["actions"]
        .as_array()
        .expect("actions")
        .iter()
        .map(|action| action["name"].as_str().expect("name"))
        .collect();
    assert_eq!(actions, ["findPage", "findOne"]);

    system.shutdown().await.expect("Failed to shut down");
}
