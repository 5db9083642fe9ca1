//! Integration tests exercising the facade the way a host harness would:
//! each assertion is a step, failures propagate with `?`, and the harness
//! records the failure message.

use affirm::{predicate, AssertionError, AssertionHelper};
use serde_json::json;

fn response_fixture() -> serde_json::Value {
    json!({
        "status": 200,
        "body": {
            "user": {"id": 7, "name": "ada", "roles": ["admin", "ops"]},
            "meta": {"page": 1, "next": null}
        }
    })
}

#[test]
fn test_response_check_flow() {
    fn check(helper: &AssertionHelper) -> Result<(), AssertionError> {
        let response = response_fixture();
        let body = &response["body"];

        helper.assert_status_code(200, 200)?;
        helper.assert_body_is_not_empty(body)?;
        helper.assert_key_in_object_exists("user.id", body)?;
        helper.assert_key_in_object_exists("user.roles.0", body)?;
        helper.assert_key_in_object_not_exists("user.password", body)?;
        helper.assert_equal(&body["user"]["id"], &json!("7"), None)?;
        helper.assert_deep_strict_equal(&body["user"]["id"], &json!(7), None)?;
        helper.assert_string_includes(body["user"]["name"].as_str().unwrap(), "ad")?;
        Ok(())
    }

    check(&AssertionHelper::new()).unwrap();
}

#[test]
fn test_first_failing_step_stops_the_flow() {
    fn check(helper: &AssertionHelper) -> Result<(), AssertionError> {
        let response = response_fixture();
        helper.assert_status_code(200, 200)?;
        helper.assert_key_in_object_exists("user.email", &response["body"])?;
        // Unreachable: the harness never sees this step.
        helper.assert_fail(None, None, Some("should not get here"), None)?;
        Ok(())
    }

    let err = check(&AssertionHelper::new()).unwrap_err();
    assert_eq!(
        err.message,
        "Expected user.email to exists in object, but actual not:( There is no email"
    );
}

#[test]
fn test_status_code_mismatch_message() {
    let err = AssertionHelper::new().assert_status_code(404, 200).unwrap_err();
    assert_eq!(err.message, "Expected status code to be 200, but found 404");
}

#[test]
fn test_collection_steps() {
    let helper = AssertionHelper::new();
    let response = response_fixture();
    let roles = response["body"]["user"]["roles"].as_array().unwrap().clone();

    let non_empty = predicate!("is a non-empty string", |v: &serde_json::Value| {
        v.as_str().is_some_and(|s| !s.is_empty())
    });
    helper
        .assert_each(&roles, &non_empty, "roles must be named")
        .unwrap();

    let admin = predicate!("is admin", |v: &serde_json::Value| {
        v.as_str() == Some("admin")
    });
    helper
        .assert_exists(&roles, &admin, "an admin role is required")
        .unwrap();

    let err = helper
        .assert_exists::<serde_json::Value>(&[], &admin, "an admin role is required")
        .unwrap_err();
    assert_eq!(
        err.message,
        "Items don't contains element, satisfied by predicate: is admin: an admin role is required"
    );
}

#[test]
fn test_null_in_path_confirms_absence() {
    let helper = AssertionHelper::new();
    let response = response_fixture();
    let body = &response["body"];

    // meta.next is null: present itself, absent one level down.
    helper.assert_key_in_object_exists("meta.next", body).unwrap();
    helper
        .assert_key_in_object_not_exists("meta.next.cursor", body)
        .unwrap();
    assert!(helper
        .assert_key_in_object_exists("meta.next.cursor", body)
        .is_err());
}

#[test]
fn test_failures_serialize_for_step_reporting() {
    let err = AssertionHelper::new()
        .assert_equal(&json!(1), &json!(2), None)
        .unwrap_err();

    let record = serde_json::to_value(&err).unwrap();
    assert_eq!(record["message"], json!("1 == 2"));
    assert_eq!(record["actual"], json!(1));
    assert_eq!(record["expected"], json!(2));
    assert_eq!(record["operator"], json!("=="));
}

#[test]
fn test_repeated_invocation_is_stable() {
    let helper = AssertionHelper::new();
    let obj = json!({"a": {"b": 1}});

    for _ in 0..3 {
        helper.assert_key_in_object_exists("a.b", &obj).unwrap();
        assert!(helper.assert_key_in_object_exists("a.x", &obj).is_err());
        helper.assert_not_equal(&json!(1), &json!(2), None).unwrap();
    }
}
