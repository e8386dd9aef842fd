//! End-to-end request handling against in-memory adapters.

use super::helpers::{App, app, error_text};
use rstest::rstest;
use serde_json::json;
use taskdesk::task::domain::REDACTION_PLACEHOLDER;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_through_the_api(app: App) {
    let ana = app.actor("341").await;
    let body = json!({"code": "pid-7788", "summary": "draft plan", "hasSensitiveData": true});

    let created = app.tasks.post(&ana, Some(&body)).await;
    assert_eq!(created.status(), 201);

    let patched = app
        .tasks
        .patch(&ana, "pid-7788", Some(&json!({"summary": "final plan"})))
        .await;
    assert_eq!(patched.status(), 204);

    let fetched = app.tasks.get(&ana, "pid-7788").await;
    assert_eq!(fetched.status(), 200);
    let data = fetched.data().expect("reply should carry data");
    assert_eq!(data.get("summary"), Some(&json!("final plan")));
    assert_eq!(data.get("hasSensitiveData"), Some(&json!(true)));

    assert_eq!(app.tasks.close(&ana, "pid-7788").await.status(), 204);
    let closed = app.tasks.get(&ana, "pid-7788").await;
    let closed_date = closed.data().and_then(|task| task.get("closedDate"));
    assert!(closed_date.is_some_and(serde_json::Value::is_string));

    assert_eq!(app.tasks.delete(&ana, "pid-7788").await.status(), 204);
    assert_eq!(app.tasks.get(&ana, "pid-7788").await.status(), 404);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn visibility_depends_on_role_and_ownership(app: App) {
    let ana = app.actor("341").await;
    let ben = app.actor("342").await;
    let maria = app.actor("900").await;
    app.tasks
        .post(
            &ana,
            Some(&json!({"code": "T-1", "summary": "appraisal", "hasSensitiveData": true})),
        )
        .await;
    app.tasks
        .post(&ben, Some(&json!({"code": "T-2", "summary": "refactor"})))
        .await;

    let ana_list = app.tasks.list(&ana).await;
    let maria_list = app.tasks.list(&maria).await;

    assert_eq!(
        ana_list.data(),
        Some(&json!([{
            "code": "T-1",
            "summary": "appraisal",
            "hasSensitiveData": true,
            "closedDate": null,
            "userId": ana.id().to_string(),
        }]))
    );
    let maria_tasks = maria_list
        .data()
        .and_then(serde_json::Value::as_array)
        .expect("manager listing should be an array");
    assert_eq!(maria_tasks.len(), 2);
    assert_eq!(
        maria_list.data().and_then(|data| data.pointer("/0/summary")),
        Some(&json!(REDACTION_PLACEHOLDER))
    );
    assert_eq!(
        maria_list.data().and_then(|data| data.pointer("/1/summary")),
        Some(&json!("refactor"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manager_may_remove_but_not_edit_foreign_tasks(app: App) {
    let ana = app.actor("341").await;
    let maria = app.actor("900").await;
    app.tasks
        .post(&ana, Some(&json!({"code": "T-1", "summary": "mine"})))
        .await;

    let edit = app
        .tasks
        .patch(&maria, "T-1", Some(&json!({"summary": "hers"})))
        .await;
    let close = app.tasks.close(&maria, "T-1").await;
    let remove = app.tasks.delete(&maria, "T-1").await;

    assert_eq!(edit.status(), 404);
    assert_eq!(close.status(), 404);
    assert_eq!(remove.status(), 204);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn error_replies_carry_only_the_error_field(app: App) {
    let ana = app.actor("341").await;

    let reply = app.tasks.get(&ana, "missing").await;

    assert_eq!(reply.status(), 404);
    assert_eq!(error_text(&reply), Some("task missing does not exist"));
    let body = serde_json::to_value(reply.body()).expect("body should serialise");
    assert_eq!(
        body,
        json!({"error": "task missing does not exist", "data": null})
    );
}
