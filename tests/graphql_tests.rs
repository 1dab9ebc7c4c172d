use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use serde_json::{Value, json};

use relay_todo::graphql::{TodoSchema, build_schema};
use relay_todo::relay::{global_id, offset_to_cursor};
use relay_todo::storage::{MemoryStore, TodoStore};

fn setup() -> (TodoSchema, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let schema = build_schema(store.clone());
    (schema, store)
}

fn create_test_data(store: &MemoryStore) {
    store.create("Taste JavaScript", true).unwrap();
    store.create("Buy a unicorn", false).unwrap();
}

async fn run(schema: &TodoSchema, query: &str) -> Response {
    schema.execute(query).await
}

async fn run_with(schema: &TodoSchema, query: &str, variables: Value) -> Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

fn data(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

fn error_code(response: &Response) -> Option<String> {
    let ext = response.errors.first()?.extensions.as_ref()?;
    match ext.get("code")? {
        async_graphql::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

// =============================================================================
// Schema
// =============================================================================

#[tokio::test]
async fn test_root_query_type() {
    let (schema, _store) = setup();
    let result = data(run(&schema, "{ __schema { queryType { name } } }").await);
    assert_eq!(result, json!({ "__schema": { "queryType": { "name": "Query" } } }));
}

#[tokio::test]
async fn test_user_type_has_viewer_fields() {
    let (schema, _store) = setup();
    let query = r#"{ __type(name: "User") {
        name
        fields { name type { name kind ofType { name } } }
    } }"#;
    let mut result = data(run(&schema, query).await);

    // Only the fields clients rely on; extra fields are fine
    let needed = ["id", "todos", "totalCount", "completedCount"];
    let fields: Vec<Value> = result["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| needed.contains(&f["name"].as_str().unwrap()))
        .cloned()
        .collect();
    result["__type"]["fields"] = Value::Array(fields);

    assert_eq!(
        result,
        json!({ "__type": {
            "name": "User",
            "fields": [
                { "name": "id", "type": { "name": null, "kind": "NON_NULL", "ofType": { "name": "ID" } } },
                { "name": "todos", "type": { "name": "TodoConnection", "kind": "OBJECT", "ofType": null } },
                { "name": "totalCount", "type": { "name": "Int", "kind": "SCALAR", "ofType": null } },
                { "name": "completedCount", "type": { "name": "Int", "kind": "SCALAR", "ofType": null } },
            ]
        } })
    );
}

#[tokio::test]
async fn test_viewer_field_is_nullable_user() {
    let (schema, _store) = setup();
    let query = r#"{ __type(name: "Query") { fields { name type { name kind } } } }"#;
    let result = data(run(&schema, query).await);
    let viewer = result["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "viewer")
        .cloned()
        .unwrap();
    assert_eq!(
        viewer,
        json!({ "name": "viewer", "type": { "name": "User", "kind": "OBJECT" } })
    );
}

#[tokio::test]
async fn test_sdl_declares_node_interface() {
    let (schema, _store) = setup();
    let sdl = schema.sdl();
    assert!(sdl.contains("interface Node"));
    assert!(sdl.contains("type Todo implements Node"));
    assert!(sdl.contains("type User implements Node"));
}

// =============================================================================
// Node
// =============================================================================

#[tokio::test]
async fn test_node_for_todo() {
    let (schema, store) = setup();
    let id = store.create("Test", false).unwrap();
    let gid = global_id::encode_todo(id);

    let query = format!(r#"{{ node(id: "{}") {{ id ... on Todo {{ text }} }} }}"#, gid);
    let result = data(run(&schema, &query).await);
    assert_eq!(result, json!({ "node": { "id": gid, "text": "Test" } }));
}

#[tokio::test]
async fn test_node_for_viewer_round_trips() {
    let (schema, _store) = setup();
    let result = data(run(&schema, "{ viewer { id } }").await);
    let viewer_gid = result["viewer"]["id"].as_str().unwrap().to_string();

    let query = format!(r#"{{ node(id: "{}") {{ id }} }}"#, viewer_gid);
    let result = data(run(&schema, &query).await);
    assert_eq!(result, json!({ "node": { "id": viewer_gid } }));
}

#[tokio::test]
async fn test_node_for_missing_todo_is_null() {
    let (schema, _store) = setup();
    let query = format!(r#"{{ node(id: "{}") {{ id }} }}"#, global_id::encode_todo(404));
    let result = data(run(&schema, &query).await);
    assert_eq!(result, json!({ "node": null }));
}

#[tokio::test]
async fn test_node_with_malformed_id_is_error() {
    let (schema, _store) = setup();
    let response = run(&schema, r#"{ node(id: "!!nope!!") { id } }"#).await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response).as_deref(), Some("DECODE_ERROR"));
}

#[tokio::test]
async fn test_node_with_unknown_type_is_error() {
    let (schema, _store) = setup();
    let query = format!(
        r#"{{ node(id: "{}") {{ id }} }}"#,
        global_id::encode("Spaceship", "1")
    );
    let response = run(&schema, &query).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNKNOWN_TYPE"));
}

// =============================================================================
// Viewer
// =============================================================================

#[tokio::test]
async fn test_counts() {
    let (schema, store) = setup();
    create_test_data(&store);
    let result = data(run(&schema, "{ viewer { totalCount completedCount } }").await);
    assert_eq!(
        result,
        json!({ "viewer": { "totalCount": 2, "completedCount": 1 } })
    );
}

#[tokio::test]
async fn test_todos_in_id_order() {
    let (schema, store) = setup();
    create_test_data(&store);
    let result = data(run(&schema, "{ viewer { todos { edges { cursor node { text } } } } }").await);
    assert_eq!(
        result,
        json!({ "viewer": { "todos": { "edges": [
            { "cursor": offset_to_cursor(0), "node": { "text": "Taste JavaScript" } },
            { "cursor": offset_to_cursor(1), "node": { "text": "Buy a unicorn" } },
        ] } } })
    );
}

#[tokio::test]
async fn test_todos_filter_by_complete() {
    let (schema, store) = setup();
    create_test_data(&store);
    let result =
        data(run(&schema, "{ viewer { todos(complete: true) { edges { node { text } } } } }").await);
    assert_eq!(
        result,
        json!({ "viewer": { "todos": { "edges": [{ "node": { "text": "Taste JavaScript" } }] } } })
    );
}

#[tokio::test]
async fn test_todos_filter_by_status() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"{ viewer {
        completed: todos(status: "completed") { edges { node { text } } }
        active: todos(status: "active") { edges { node { text } } }
    } }"#;
    let result = data(run(&schema, query).await);
    assert_eq!(
        result["viewer"]["completed"]["edges"],
        json!([{ "node": { "text": "Taste JavaScript" } }])
    );
    assert_eq!(
        result["viewer"]["active"]["edges"],
        json!([{ "node": { "text": "Buy a unicorn" } }])
    );
}

#[tokio::test]
async fn test_todos_invalid_status_is_error() {
    let (schema, store) = setup();
    create_test_data(&store);
    let response = run(&schema, r#"{ viewer { todos(status: "someday") { edges { cursor } } } }"#).await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_todos_text_filters() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"{ viewer {
        exact: todos(text: "Buy a unicorn") { edges { node { text } } }
        contains: todos(textContains: "JAVA") { edges { node { text } } }
        prefix: todos(textStartswith: "buy") { edges { node { text } } }
    } }"#;
    let result = data(run(&schema, query).await);
    assert_eq!(
        result["viewer"]["exact"]["edges"],
        json!([{ "node": { "text": "Buy a unicorn" } }])
    );
    assert_eq!(
        result["viewer"]["contains"]["edges"],
        json!([{ "node": { "text": "Taste JavaScript" } }])
    );
    assert_eq!(
        result["viewer"]["prefix"]["edges"],
        json!([{ "node": { "text": "Buy a unicorn" } }])
    );
}

#[tokio::test]
async fn test_filtered_listing_keeps_unfiltered_counts() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = "{ viewer { totalCount todos(complete: false) { edges { node { text } } } } }";
    let result = data(run(&schema, query).await);
    assert_eq!(result["viewer"]["totalCount"], json!(2));
    assert_eq!(result["viewer"]["todos"]["edges"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_pagination_first_and_after() {
    let (schema, store) = setup();
    for i in 0..5 {
        store.create(&format!("Todo {}", i), false).unwrap();
    }

    let page = |first: i32, after: Option<String>| {
        let after = after.map(|a| format!(r#", after: "{}""#, a)).unwrap_or_default();
        format!(
            "{{ viewer {{ todos(first: {}{}) {{ edges {{ cursor node {{ text }} }} pageInfo {{ hasNextPage hasPreviousPage endCursor }} }} }} }}",
            first, after
        )
    };

    for k in 1..=5 {
        let result = data(run(&schema, &page(k, None)).await);
        let todos = &result["viewer"]["todos"];
        assert_eq!(todos["edges"].as_array().unwrap().len(), k as usize);
        assert_eq!(todos["pageInfo"]["hasNextPage"], json!(k < 5));
        assert_eq!(todos["pageInfo"]["hasPreviousPage"], json!(false));
    }

    let first_two = data(run(&schema, &page(2, None)).await);
    let end_cursor = first_two["viewer"]["todos"]["pageInfo"]["endCursor"]
        .as_str()
        .unwrap()
        .to_string();
    let next = data(run(&schema, &page(1, Some(end_cursor))).await);
    let todos = &next["viewer"]["todos"];
    assert_eq!(todos["edges"][0]["node"]["text"], json!("Todo 2"));
    assert_eq!(todos["edges"][0]["cursor"], json!(offset_to_cursor(2)));
    assert_eq!(todos["pageInfo"]["hasPreviousPage"], json!(true));
}

#[tokio::test]
async fn test_after_past_end_is_empty_page() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = format!(
        r#"{{ viewer {{ todos(after: "{}") {{ edges {{ cursor }} pageInfo {{ hasNextPage }} }} }} }}"#,
        offset_to_cursor(10)
    );
    let result = data(run(&schema, &query).await);
    assert_eq!(
        result["viewer"]["todos"],
        json!({ "edges": [], "pageInfo": { "hasNextPage": false } })
    );
}

#[tokio::test]
async fn test_malformed_cursor_is_error() {
    let (schema, store) = setup();
    create_test_data(&store);
    let response = run(&schema, r#"{ viewer { todos(after: "xyz") { edges { cursor } } } }"#).await;
    assert_eq!(error_code(&response).as_deref(), Some("DECODE_ERROR"));
}

#[tokio::test]
async fn test_negative_first_is_error() {
    let (schema, store) = setup();
    create_test_data(&store);
    let response = run(&schema, "{ viewer { todos(first: -1) { edges { cursor } } } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_add_todo() {
    let (schema, _store) = setup();
    let query = r#"
      mutation AddTodoMutation($input: AddTodoInput!) {
        addTodo(input: $input) {
          todoEdge { cursor node { text complete } }
          viewer { totalCount }
          clientMutationId
        }
      }"#;
    let variables = json!({
        "input": { "text": "Test Todo", "clientMutationId": "give_this_back_to_me" }
    });
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(
        result,
        json!({ "addTodo": {
            "todoEdge": {
                "cursor": "YXJyYXljb25uZWN0aW9uOjA=",
                "node": { "text": "Test Todo", "complete": false }
            },
            "viewer": { "totalCount": 1 },
            "clientMutationId": "give_this_back_to_me"
        } })
    );
}

#[tokio::test]
async fn test_add_todo_empty_text_writes_nothing() {
    let (schema, store) = setup();
    let response = run(
        &schema,
        r#"mutation { addTodo(input: { text: "" }) { clientMutationId } }"#,
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));

    let response = run(
        &schema,
        r#"mutation { addTodo(input: { text: "   " }) { clientMutationId } }"#,
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_ERROR"));
    assert_eq!(store.count(&Default::default()).unwrap(), 0);
}

#[tokio::test]
async fn test_add_todo_multibyte_text_within_limit() {
    let (schema, store) = setup();
    let text = "猫".repeat(400);
    let query = r#"
      mutation AddTodoMutation($input: AddTodoInput!) {
        addTodo(input: $input) { todoEdge { node { text } } }
      }"#;
    let result = data(run_with(&schema, query, json!({ "input": { "text": text } })).await);
    assert_eq!(result["addTodo"]["todoEdge"]["node"]["text"], json!(text));
    assert_eq!(store.count(&Default::default()).unwrap(), 1);
}

#[tokio::test]
async fn test_rename_todo() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"
      mutation RenameTodoMutation($input: RenameTodoInput!) {
        renameTodo(input: $input) { todo { text } clientMutationId }
      }"#;
    let variables = json!({ "input": {
        "id": global_id::encode_todo(1),
        "text": "Taste Python",
        "clientMutationId": "give_this_back_to_me"
    } });
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(
        result,
        json!({ "renameTodo": {
            "todo": { "text": "Taste Python" },
            "clientMutationId": "give_this_back_to_me"
        } })
    );
}

#[tokio::test]
async fn test_rename_malformed_id_leaves_store_unchanged() {
    let (schema, store) = setup();
    create_test_data(&store);
    let before = store.list(&Default::default(), Default::default()).unwrap();

    let response = run(
        &schema,
        r#"mutation { renameTodo(input: { id: "not-a-global-id", text: "x" }) { todo { text } } }"#,
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ID"));
    assert!(response.errors[0].message.contains("not-a-global-id"));

    let after = store.list(&Default::default(), Default::default()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_change_todo_status() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"
      mutation ChangeTodoStatusMutation($input: ChangeTodoStatusInput!) {
        changeTodoStatus(input: $input) {
          todo { complete }
          viewer { completedCount }
          clientMutationId
        }
      }"#;
    let variables = json!({ "input": {
        "id": global_id::encode_todo(1),
        "complete": false,
        "clientMutationId": "give_this_back_to_me"
    } });
    let expected = json!({ "changeTodoStatus": {
        "todo": { "complete": false },
        "viewer": { "completedCount": 0 },
        "clientMutationId": "give_this_back_to_me"
    } });

    let result = data(run_with(&schema, query, variables.clone()).await);
    assert_eq!(result, expected);

    // Applying the same status again succeeds and changes nothing
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_change_status_of_missing_todo() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = format!(
        r#"mutation {{ changeTodoStatus(input: {{ id: "{}", complete: true }}) {{ todo {{ id }} }} }}"#,
        global_id::encode_todo(77)
    );
    let response = run(&schema, &query).await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ID"));
    assert_eq!(
        store.count(&relay_todo::model::TodoFilter::completed()).unwrap(),
        1
    );
}

#[tokio::test]
async fn test_mark_all_todos() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"
      mutation MarkAllTodosMutation($input: MarkAllTodosInput!) {
        markAllTodos(input: $input) {
          changedTodos { id complete }
          viewer { completedCount }
          clientMutationId
        }
      }"#;
    let variables = json!({ "input": { "complete": true, "clientMutationId": "give_this_back_to_me" } });
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(
        result,
        json!({ "markAllTodos": {
            "changedTodos": [{ "id": global_id::encode_todo(2), "complete": true }],
            "viewer": { "completedCount": 2 },
            "clientMutationId": "give_this_back_to_me"
        } })
    );
}

#[tokio::test]
async fn test_remove_todo() {
    let (schema, store) = setup();
    create_test_data(&store);
    let todo_gid = global_id::encode_todo(1);
    let query = r#"
      mutation RemoveTodoMutation($input: RemoveTodoInput!) {
        removeTodo(input: $input) {
          deletedTodoId
          viewer { completedCount totalCount }
          clientMutationId
        }
      }"#;
    let variables = json!({ "input": { "id": todo_gid, "clientMutationId": "give_this_back_to_me" } });
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(
        result,
        json!({ "removeTodo": {
            "deletedTodoId": todo_gid,
            "viewer": { "completedCount": 0, "totalCount": 1 },
            "clientMutationId": "give_this_back_to_me"
        } })
    );
}

#[tokio::test]
async fn test_remove_completed_todos() {
    let (schema, store) = setup();
    create_test_data(&store);
    let query = r#"
      mutation RemoveCompletedTodosMutation($input: RemoveCompletedTodosInput!) {
        removeCompletedTodos(input: $input) {
          deletedTodoIds
          viewer { completedCount totalCount }
          clientMutationId
        }
      }"#;
    let variables = json!({ "input": { "clientMutationId": "give_this_back_to_me" } });
    let result = data(run_with(&schema, query, variables).await);
    assert_eq!(
        result,
        json!({ "removeCompletedTodos": {
            "deletedTodoIds": [global_id::encode_todo(1)],
            "viewer": { "completedCount": 0, "totalCount": 1 },
            "clientMutationId": "give_this_back_to_me"
        } })
    );
}

#[tokio::test]
async fn test_client_mutation_id_absent_is_null() {
    let (schema, _store) = setup();
    let result = data(
        run(
            &schema,
            r#"mutation { addTodo(input: { text: "no token" }) { clientMutationId } }"#,
        )
        .await,
    );
    assert_eq!(result, json!({ "addTodo": { "clientMutationId": null } }));
}
