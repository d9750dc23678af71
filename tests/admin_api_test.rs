//! Admin CRUD paths and payloads

mod helpers;

use apex_portal::models::Role;
use apex_portal::services::AdminResource;
use helpers::*;
use serde_json::{json, Value};

async fn admin_context() -> TestContext {
    let ctx = TestContext::new().await;
    ctx.session.set_token(Role::Admin, ADMIN_TOKEN).unwrap();
    ctx
}

#[tokio::test]
async fn test_member_crud_paths() {
    let ctx = admin_context().await;
    ctx.backend.mock_json("GET", &ctx.admin_path("/members"), 200, json!([])).await;
    ctx.backend.mock_json("POST", &ctx.admin_path("/members"), 201, json!({"id": 5})).await;
    ctx.backend.mock_json("GET", &ctx.admin_path("/members/5"), 200, json!({"id": 5})).await;
    ctx.backend.mock_json("PUT", &ctx.admin_path("/members/5"), 200, json!({"id": 5})).await;
    ctx.backend.mock_json("DELETE", &ctx.admin_path("/members/5"), 200, json!({})).await;

    let admin = &ctx.services.admin;
    admin.list_members().await.unwrap();
    let created = admin.create_member(&json!({"name": "Alex Kim"})).await.unwrap();
    assert_eq!(created["id"], 5);
    admin.get_member_by_id(5).await.unwrap();
    admin.update_member(5, &json!({"name": "Alex K."})).await.unwrap();
    admin.delete_member(5).await.unwrap();

    let seen: Vec<(String, String)> = ctx
        .backend
        .requests()
        .await
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    let expected: Vec<(String, String)> = [
        ("GET", "/api/admin/members"),
        ("POST", "/api/admin/members"),
        ("GET", "/api/admin/members/5"),
        ("PUT", "/api/admin/members/5"),
        ("DELETE", "/api/admin/members/5"),
    ]
    .iter()
    .map(|(m, p)| (m.to_string(), p.to_string()))
    .collect();
    assert_eq!(seen, expected);

    for request in ctx.backend.requests().await {
        assert_eq!(authorization(&request), Some(format!("Bearer {}", ADMIN_TOKEN)));
    }
}

#[tokio::test]
async fn test_update_sends_json_body() {
    let ctx = admin_context().await;
    ctx.backend.mock_json("PUT", &ctx.admin_path("/plans/2"), 200, json!({"id": 2})).await;

    let data = json!({"name": "Platinum", "price": 79.0, "duration_months": 12});
    ctx.services.admin.update_plan(2, &data).await.unwrap();

    let request = &ctx.backend.requests_to(&ctx.admin_path("/plans/2")).await[0];
    let body: Value = request.body_json().unwrap();
    assert_eq!(body, data);
    assert_eq!(
        request.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_assign_trainer_posts_trainer_id() {
    let ctx = admin_context().await;
    ctx.backend
        .mock_json("POST", &ctx.admin_path("/members/7/assign-trainer"), 200, json!({"message": "Assigned"}))
        .await;

    ctx.services.admin.assign_trainer_to_member(7, 16).await.unwrap();
    ctx.services.admin.assign_trainer_to_member("7", "16").await.unwrap();

    let bodies: Vec<Value> = ctx
        .backend
        .requests_to(&ctx.admin_path("/members/7/assign-trainer"))
        .await
        .iter()
        .map(|r| r.body_json().unwrap())
        .collect();
    assert_eq!(bodies, vec![json!({"trainer_id": 16}), json!({"trainer_id": "16"})]);
}

#[tokio::test]
async fn test_trainer_plan_and_guideline_collections() {
    let ctx = admin_context().await;
    for resource in ["/trainers", "/plans", "/guidelines"] {
        ctx.backend.mock_json("GET", &ctx.admin_path(resource), 200, json!([])).await;
        ctx.backend.mock_json("POST", &ctx.admin_path(resource), 201, json!({"id": 1})).await;
        ctx.backend
            .mock_json("DELETE", &ctx.admin_path(&format!("{}/1", resource)), 200, json!({}))
            .await;
    }

    let admin = &ctx.services.admin;
    admin.list_trainers().await.unwrap();
    admin.create_trainer(&json!({"name": "Sam"})).await.unwrap();
    admin.delete_trainer(1).await.unwrap();
    admin.list_plans().await.unwrap();
    admin.create_plan(&json!({"name": "Gold"})).await.unwrap();
    admin.delete_plan(1).await.unwrap();
    admin.list_guidelines().await.unwrap();
    admin.create_guideline(&json!({"title": "Wipe equipment"})).await.unwrap();
    admin.delete_guideline(1).await.unwrap();

    assert_eq!(ctx.backend.requests().await.len(), 9);
}

#[tokio::test]
async fn test_generic_resource_calls_match_named_ones() {
    let ctx = admin_context().await;
    ctx.backend.mock_json("PUT", &ctx.admin_path("/guidelines/4"), 200, json!({"id": 4})).await;

    let updated = ctx
        .services
        .admin
        .update(AdminResource::Guidelines, 4, &json!({"title": "Rack your weights"}))
        .await
        .unwrap();

    assert_eq!(updated, json!({"id": 4}));
}

#[tokio::test]
async fn test_ids_are_encoded_as_one_segment() {
    let ctx = admin_context().await;
    ctx.backend.mock_json("GET", &ctx.admin_path("/members/a%2Fb"), 200, json!({})).await;

    ctx.services.admin.get_member_by_id("a/b").await.unwrap();

    let requests = ctx.backend.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/admin/members/a%2Fb");
}
