use crate::modules::users::core::user::User;
use crate::tests::fixtures::schema::{execute_json, make_test_schema};
use serde_json::json;

fn users_from(value: &serde_json::Value) -> Vec<User> {
    serde_json::from_value(value.clone()).unwrap()
}

#[tokio::test]
async fn creates_a_user_after_the_seed_and_lists_in_order() {
    let (schema, _state) = make_test_schema();

    let created = execute_json(
        &schema,
        r#"mutation { createUser(name: "C", age: 30) { id name age } }"#,
    )
    .await;
    assert_eq!(
        created,
        json!({ "data": { "createUser": { "id": "3", "name": "C", "age": 30 } } })
    );

    let listed = execute_json(&schema, "{ getAllUsers { id name age } }").await;
    let users = users_from(&listed["data"]["getAllUsers"]);
    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(users[2], User::new("3", "C", 30));
}

#[tokio::test]
async fn gets_a_created_user_by_its_fresh_id() {
    let (schema, _state) = make_test_schema();
    execute_json(&schema, r#"mutation { createUser(name: "Ada", age: 36) { id } }"#).await;

    let found = execute_json(&schema, r#"{ getUser(id: "3") { id name age } }"#).await;
    assert_eq!(
        found,
        json!({ "data": { "getUser": { "id": "3", "name": "Ada", "age": 36 } } })
    );
}

#[tokio::test]
async fn rejects_invalid_creations_without_touching_the_store() {
    let (schema, _state) = make_test_schema();

    for mutation in [
        r#"mutation { createUser(name: "", age: 20) { id } }"#,
        r#"mutation { createUser(name: "X", age: 0) { id } }"#,
    ] {
        let response = execute_json(&schema, mutation).await;
        assert_eq!(response["data"]["createUser"], serde_json::Value::Null);
        assert_eq!(response["errors"][0]["message"], "Name and age are required!");
    }

    let listed = execute_json(&schema, "{ getAllUsers { id } }").await;
    assert_eq!(listed["data"]["getAllUsers"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn returns_null_for_an_unknown_user() {
    let (schema, _state) = make_test_schema();
    let found = execute_json(&schema, r#"{ getUser(id: "42") { id } }"#).await;
    assert_eq!(found, json!({ "data": { "getUser": null } }));
}

#[tokio::test]
async fn updates_only_the_supplied_fields() {
    let (schema, _state) = make_test_schema();

    let renamed = execute_json(
        &schema,
        r#"mutation { updateUser(id: "1", name: "Quân") { id name age } }"#,
    )
    .await;
    assert_eq!(
        renamed,
        json!({ "data": { "updateUser": { "id": "1", "name": "Quân", "age": 21 } } })
    );

    let unchanged = execute_json(&schema, r#"mutation { updateUser(id: "1") { id name age } }"#).await;
    assert_eq!(
        unchanged,
        json!({ "data": { "updateUser": { "id": "1", "name": "Quân", "age": 21 } } })
    );
}

#[tokio::test]
async fn returns_null_when_updating_an_unknown_user() {
    let (schema, _state) = make_test_schema();
    let updated = execute_json(
        &schema,
        r#"mutation { updateUser(id: "42", name: "Nobody") { id } }"#,
    )
    .await;
    assert_eq!(updated, json!({ "data": { "updateUser": null } }));
}

#[tokio::test]
async fn deletes_a_user_and_returns_its_prior_values() {
    let (schema, _state) = make_test_schema();

    let deleted = execute_json(&schema, r#"mutation { deleteUser(id: "2") { id name age } }"#).await;
    assert_eq!(
        deleted,
        json!({ "data": { "deleteUser": { "id": "2", "name": "Anh Quân 2", "age": 22 } } })
    );

    let found = execute_json(&schema, r#"{ getUser(id: "2") { id } }"#).await;
    assert_eq!(found, json!({ "data": { "getUser": null } }));
}

#[tokio::test]
async fn returns_an_empty_user_when_deleting_an_unknown_user() {
    let (schema, _state) = make_test_schema();
    let deleted = execute_json(&schema, r#"mutation { deleteUser(id: "42") { id name age } }"#).await;
    assert_eq!(
        deleted,
        json!({ "data": { "deleteUser": { "id": "", "name": "", "age": 0 } } })
    );
}

#[tokio::test]
async fn reuses_the_id_of_a_deleted_tail_record() {
    let (schema, _state) = make_test_schema();
    execute_json(&schema, r#"mutation { deleteUser(id: "2") { id } }"#).await;
    let created = execute_json(&schema, r#"mutation { createUser(name: "D", age: 4) { id } }"#).await;
    assert_eq!(created["data"]["createUser"]["id"], "2");
}
