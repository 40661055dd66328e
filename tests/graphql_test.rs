//! Schema-level tests
//!
//! Executes query documents straight against the schema, one fresh store per
//! test.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use devgraph::graphql::{build_schema, GraphQLSchema};
use devgraph::store::EntityStore;
use serde_json::{json, Value};

fn seeded_schema() -> (Arc<EntityStore>, GraphQLSchema) {
    let store = Arc::new(EntityStore::seeded());
    let schema = build_schema(store.clone());
    (store, schema)
}

async fn run(schema: &GraphQLSchema, request: impl Into<Request>) -> anyhow::Result<Value> {
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL request errored: {:?}",
        response.errors
    );
    Ok(serde_json::to_value(&response)?["data"].clone())
}

#[tokio::test]
async fn test_seeded_lists_in_listed_order() -> anyhow::Result<()> {
    let (_, schema) = seeded_schema();

    let data = run(&schema, "{ projects { id name developerId } developers { id name } }").await?;

    assert_eq!(
        data["developers"],
        json!([
            { "id": 1, "name": "John" },
            { "id": 2, "name": "Jonas" },
            { "id": 3, "name": "Jack" }
        ])
    );

    let projects = data["projects"].as_array().expect("projects should be a list");
    assert_eq!(projects.len(), 7);
    let names: Vec<&str> = projects.iter().filter_map(|p| p["name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["mango", "LandY", "ApnaBazaar", "WooCommerce1", "Delicious", "ParInd", "WooCommerce2"]
    );
    Ok(())
}

#[tokio::test]
async fn test_developer_lookup_by_id() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();
    let query = "query Dev($id: Int) { developer(id: $id) { id name } }";

    for developer in store.developers().await {
        let data = run(
            &schema,
            Request::new(query).variables(Variables::from_json(json!({ "id": developer.id }))),
        )
        .await?;
        assert_eq!(data["developer"]["id"], developer.id);
        assert_eq!(data["developer"]["name"], developer.name.as_str());
    }

    let data = run(
        &schema,
        Request::new(query).variables(Variables::from_json(json!({ "id": 404 }))),
    )
    .await?;
    assert!(data["developer"].is_null());

    // No id at all matches nothing
    let data = run(&schema, "{ developer { id } project { id } }").await?;
    assert!(data["developer"].is_null());
    assert!(data["project"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_project_developer_matches_foreign_key() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();
    let query = "query P($id: Int) { project(id: $id) { id developerId developer { id } } }";

    for project in store.projects().await {
        let data = run(
            &schema,
            Request::new(query).variables(Variables::from_json(json!({ "id": project.id }))),
        )
        .await?;
        assert_eq!(data["project"]["id"], project.id);
        assert_eq!(data["project"]["developer"]["id"], data["project"]["developerId"]);
    }
    Ok(())
}

#[tokio::test]
async fn test_dangling_developer_reference_resolves_to_null() -> anyhow::Result<()> {
    let store = Arc::new(EntityStore::new());
    store.add_project("Orphan", 9).await;
    let schema = build_schema(store);

    let data = run(&schema, "{ project(id: 1) { name developerId developer { id } } }").await?;
    assert_eq!(data["project"]["developerId"], 9);
    assert!(data["project"]["developer"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_developer_projects_are_exact_back_references() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();
    let data = run(&schema, "{ developers { id projects { id developerId } } }").await?;
    let all_projects = store.projects().await;

    for developer in data["developers"].as_array().expect("developers list") {
        let id = developer["id"].as_i64().expect("developer id") as i32;
        let returned: Vec<i64> = developer["projects"]
            .as_array()
            .expect("projects list")
            .iter()
            .map(|p| {
                assert_eq!(p["developerId"].as_i64(), Some(id as i64));
                p["id"].as_i64().expect("project id")
            })
            .collect();
        let expected: Vec<i64> = all_projects
            .iter()
            .filter(|p| p.developer_id == id)
            .map(|p| p.id as i64)
            .collect();
        assert_eq!(returned, expected);
    }
    Ok(())
}

#[tokio::test]
async fn test_add_developer_appends_and_is_listed() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();
    let before = store.developers().await.len() as i64;

    let data = run(
        &schema,
        r#"mutation { addDeveloper(name: "Ada") { id name projects { id } } }"#,
    )
    .await?;
    assert_eq!(data["addDeveloper"]["name"], "Ada");
    assert_eq!(data["addDeveloper"]["id"], before + 1);
    assert_eq!(data["addDeveloper"]["projects"], json!([]));

    let data = run(&schema, "{ developers { id name } }").await?;
    let developers = data["developers"].as_array().expect("developers list");
    assert_eq!(developers.len() as i64, before + 1);
    assert_eq!(developers.last(), Some(&json!({ "id": before + 1, "name": "Ada" })));
    Ok(())
}

#[tokio::test]
async fn test_add_project_stores_developer_reference() -> anyhow::Result<()> {
    let (_, schema) = seeded_schema();

    let mutation = r#"
        mutation AddProject($name: String!, $developer: Int!) {
            addProject(name: $name, developerID: $developer) {
                id
                name
                developerId
                developer { id name }
            }
        }
    "#;
    let data = run(
        &schema,
        Request::new(mutation).variables(Variables::from_json(json!({
            "name": "X",
            "developer": 1
        }))),
    )
    .await?;

    assert_eq!(data["addProject"]["id"], 8);
    assert_eq!(data["addProject"]["name"], "X");
    assert_eq!(data["addProject"]["developerId"], 1);
    assert_eq!(data["addProject"]["developer"], json!({ "id": 1, "name": "John" }));

    let data = run(&schema, "{ developer(id: 1) { projects { name } } }").await?;
    assert_eq!(
        data["developer"]["projects"],
        json!([
            { "name": "mango" },
            { "name": "WooCommerce1" },
            { "name": "WooCommerce2" },
            { "name": "X" }
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_required_argument_is_rejected() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();

    let response = schema
        .execute(r#"mutation { addProject(name: "NoOwner") { id } }"#)
        .await;
    assert!(response
        .errors
        .iter()
        .any(|e| e.message.contains("developerID")));

    let body = serde_json::to_value(&response)?;
    assert!(body["data"].is_null());
    assert_eq!(store.projects().await.len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_unknown_field_is_rejected_before_resolvers() -> anyhow::Result<()> {
    let (store, schema) = seeded_schema();

    let response = schema
        .execute(r#"mutation { addDeveloper(name: "Ghost") { id email } }"#)
        .await;
    assert!(response.errors.iter().any(|e| e.message.contains("email")));
    assert_eq!(store.developers().await.len(), 3);
    Ok(())
}
