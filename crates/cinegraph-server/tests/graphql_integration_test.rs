//! GraphQL API Integration Tests
//!
//! Executes documents directly against the schema with an in-memory catalog.

use async_graphql::{Request, Variables};
use cinegraph_core::testing::{memory_catalog, unavailable_catalog};
use cinegraph_core::Catalog;
use cinegraph_server::CinegraphServer;
use cinegraph_server::api::graphql::{CinegraphSchema, create_schema};
use serde_json::{Value, json};

fn schema_with(catalog: Catalog) -> CinegraphSchema {
    create_schema(CinegraphServer::shared(catalog))
}

/// Run a document and return its data, failing the test on GraphQL errors
async fn run(schema: &CinegraphSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "Query should not have errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Run a document expected to fail and return the first error's code
async fn error_code(schema: &CinegraphSchema, query: &str) -> String {
    let response = schema.execute(query).await;
    assert!(!response.errors.is_empty(), "Query should fail: {query}");
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    error["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

async fn add_director(schema: &CinegraphSchema, name: &str, age: i32) -> String {
    let data = run(
        schema,
        "mutation ($name: String!, $age: Int!) { addDirector(name: $name, age: $age) { id } }",
        json!({"name": name, "age": age}),
    )
    .await;
    data["addDirector"]["id"].as_str().unwrap().to_string()
}

async fn add_movie(schema: &CinegraphSchema, name: &str, genre: &str, director_id: &str) -> String {
    let data = run(
        schema,
        r#"
        mutation ($name: String!, $genre: String!, $directorId: ID!) {
            addMovie(name: $name, genre: $genre, directorId: $directorId) {
                name
                id
            }
        }
        "#,
        json!({"name": name, "genre": genre, "directorId": director_id}),
    )
    .await;
    assert_eq!(data["addMovie"]["name"], name);
    data["addMovie"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_graphql_schema_creation() {
    let schema = schema_with(memory_catalog());
    let sdl = schema.sdl();

    assert!(sdl.contains("type Movie"), "SDL should declare Movie");
    assert!(sdl.contains("type Director"), "SDL should declare Director");
    assert!(sdl.contains("director: Director"));
    assert!(sdl.contains("movies: [Movie!]!"));
}

#[tokio::test]
async fn test_graphql_introspection_query() {
    let schema = schema_with(memory_catalog());
    let data = run(
        &schema,
        "{ __schema { queryType { name } mutationType { name } } }",
        json!({}),
    )
    .await;

    assert_eq!(data["__schema"]["queryType"]["name"], "QueryRoot");
    assert_eq!(data["__schema"]["mutationType"]["name"], "MutationRoot");
}

#[tokio::test]
async fn test_director_roundtrip() {
    let schema = schema_with(memory_catalog());
    let id = add_director(&schema, "Christopher Nolan", 52).await;

    let data = run(
        &schema,
        "query ($id: ID!) { director(id: $id) { id name age } }",
        json!({"id": id}),
    )
    .await;
    assert_eq!(
        data["director"],
        json!({"id": id, "name": "Christopher Nolan", "age": 52})
    );
}

#[tokio::test]
async fn test_movie_resolves_director() {
    let schema = schema_with(memory_catalog());
    let d1 = add_director(&schema, "Christopher Nolan", 52).await;
    let m1 = add_movie(&schema, "Interstellar", "Sci-Fi", &d1).await;

    let data = run(
        &schema,
        "query ($id: ID!) { movie(id: $id) { name genre director { name age } } }",
        json!({"id": m1}),
    )
    .await;
    assert_eq!(
        data["movie"],
        json!({
            "name": "Interstellar",
            "genre": "Sci-Fi",
            "director": {"name": "Christopher Nolan", "age": 52}
        })
    );
}

#[tokio::test]
async fn test_dangling_director_resolves_to_null() {
    let schema = schema_with(memory_catalog());
    let ghost = cinegraph_core::EntityId::new().to_string();
    let m1 = add_movie(&schema, "Lost Reel", "Drama", &ghost).await;

    let data = run(
        &schema,
        "query ($id: ID!) { movie(id: $id) { name director { name } } }",
        json!({"id": m1}),
    )
    .await;
    assert_eq!(data["movie"]["name"], "Lost Reel");
    assert!(data["movie"]["director"].is_null());
}

#[tokio::test]
async fn test_movie_without_director() {
    let schema = schema_with(memory_catalog());
    let data = run(
        &schema,
        r#"mutation { addMovie(name: "Anonymous", genre: "Documentary") { id director { id } } }"#,
        json!({}),
    )
    .await;
    assert!(data["addMovie"]["director"].is_null());
}

#[tokio::test]
async fn test_director_movies() {
    let schema = schema_with(memory_catalog());
    let nolan = add_director(&schema, "Christopher Nolan", 52).await;
    let gerwig = add_director(&schema, "Greta Gerwig", 40).await;
    let inception = add_movie(&schema, "Inception", "Sci-Fi", &nolan).await;
    let dunkirk = add_movie(&schema, "Dunkirk", "War", &nolan).await;
    add_movie(&schema, "Lady Bird", "Drama", &gerwig).await;

    let data = run(
        &schema,
        "query ($id: ID!) { director(id: $id) { movies { id name director { name } } } }",
        json!({"id": nolan}),
    )
    .await;

    let movies = data["director"]["movies"].as_array().unwrap();
    let mut ids: Vec<_> = movies.iter().map(|m| m["id"].as_str().unwrap()).collect();
    ids.sort();
    let mut expected = vec![inception.as_str(), dunkirk.as_str()];
    expected.sort();
    assert_eq!(ids, expected);

    // Cycle back through the relationship
    assert!(
        movies
            .iter()
            .all(|m| m["director"]["name"] == "Christopher Nolan")
    );
}

#[tokio::test]
async fn test_list_queries_return_everything() {
    let schema = schema_with(memory_catalog());
    let d1 = add_director(&schema, "Agnès Varda", 90).await;
    let d2 = add_director(&schema, "Akira Kurosawa", 88).await;
    let m1 = add_movie(&schema, "Cléo from 5 to 7", "Drama", &d1).await;
    let m2 = add_movie(&schema, "Ran", "Drama", &d2).await;

    let data = run(&schema, "{ movies { id } directors { id } }", json!({})).await;

    let mut movies: Vec<_> = data["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect();
    movies.sort();
    let mut expected = vec![m1, m2];
    expected.sort();
    assert_eq!(movies, expected);

    assert_eq!(data["directors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_id_yields_null() {
    let schema = schema_with(memory_catalog());
    let unknown = cinegraph_core::EntityId::new().to_string();
    let data = run(
        &schema,
        "query ($id: ID!) { movie(id: $id) { id } director(id: $id) { id } }",
        json!({"id": unknown}),
    )
    .await;
    assert!(data["movie"].is_null());
    assert!(data["director"].is_null());
}

#[tokio::test]
async fn test_malformed_id_is_invalid_argument() {
    let schema = schema_with(memory_catalog());
    assert_eq!(
        error_code(&schema, r#"{ movie(id: "d1") { id } }"#).await,
        "INVALID_ARGUMENT"
    );
    assert_eq!(
        error_code(
            &schema,
            r#"mutation { addMovie(name: "X", genre: "Y", directorId: "not-an-id") { id } }"#
        )
        .await,
        "INVALID_ARGUMENT"
    );
}

#[tokio::test]
async fn test_missing_required_argument_is_invalid_argument() {
    let schema = schema_with(memory_catalog());
    assert_eq!(
        error_code(&schema, r#"mutation { addDirector(name: "No Age") { id } }"#).await,
        "INVALID_ARGUMENT"
    );
}

#[tokio::test]
async fn test_wrong_typed_id_is_invalid_argument() {
    let schema = schema_with(memory_catalog());
    for query in [
        "{ movie(id: true) { id } }",
        "{ director(id: 1.5) { id } }",
        "{ movie(id: 5) { id } }",
    ] {
        assert_eq!(error_code(&schema, query).await, "INVALID_ARGUMENT", "{query}");
    }
}

#[tokio::test]
async fn test_syntax_error_is_invalid_argument() {
    let schema = schema_with(memory_catalog());
    assert_eq!(error_code(&schema, "{ movies { id }").await, "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_storage_error_propagates() {
    let schema = schema_with(unavailable_catalog());
    assert_eq!(
        error_code(
            &schema,
            r#"mutation { addDirector(name: "Sofia Coppola", age: 53) { id } }"#
        )
        .await,
        "STORAGE_ERROR"
    );
    assert_eq!(error_code(&schema, "{ movies { id } }").await, "STORAGE_ERROR");
}

#[tokio::test]
async fn test_repeated_mutation_creates_new_records() {
    let schema = schema_with(memory_catalog());
    let a = add_director(&schema, "Same Name", 30).await;
    let b = add_director(&schema, "Same Name", 30).await;
    assert_ne!(a, b);

    let data = run(&schema, "{ directors { id } }", json!({})).await;
    assert_eq!(data["directors"].as_array().unwrap().len(), 2);
}
