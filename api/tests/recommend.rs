mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{ApiContext, MAX_IMAGE_BYTES, recommend_form, session, session_header};
use serde_json::{Value, json};
use test_context::test_context;

fn item_names(body: &Value) -> Vec<String> {
    body["data"]["recommendation"]["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_route_is_not_found(ctx: &mut ApiContext) {
    let response = ctx.server.get("/nowhere").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["status"], 404);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recommend_with_default_tags(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend")
        .add_header(session_header(), session("alice"))
        .multipart(recommend_form("20"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(
        body["data"]["tags"],
        json!(["glutenfree", "vegan", "vegetarian", "halal", "kosher"])
    );
    assert_eq!(body["data"]["filter"]["removed_count"], 4);
    assert_eq!(item_names(&body), vec!["Jasmine Tea"]);
    assert_eq!(body["data"]["recommendation"]["total"], 3.0);
    assert_eq!(body["data"]["recommendation"]["within_budget"], true);
    assert_eq!(body["data"]["cached"], false);
    assert_eq!(body["data"]["menu_hash"].as_str().map(str::len), Some(64));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recommend_with_explicit_tags(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend")
        .multipart(recommend_form("20").add_text("tags", "vegetarian"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["data"]["tags"], json!(["vegetarian"]));
    assert_eq!(item_names(&body), vec!["Spring Rolls", "Fried Rice"]);
    assert_eq!(body["data"]["recommendation"]["total"], 17.5);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_tags_as_json_array(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend")
        .multipart(recommend_form("20").add_text("tags", r#"["halal", "no peanut"]"#))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["data"]["filter"]["neg_keys"], json!(["peanut"]));
    let allowed: Vec<&str> = body["data"]["filter"]["allowed_items"]
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["name"].as_str()).collect())
        .unwrap_or_default();
    assert!(!allowed.contains(&"Kung Pao Chicken"));
    assert_eq!(allowed.len(), 4);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_identical_request_is_served_from_cache(ctx: &mut ApiContext) {
    let first = ctx
        .server
        .post("/recommend")
        .add_header(session_header(), session("alice"))
        .multipart(recommend_form("20"))
        .await;
    first.assert_status_ok();

    let second = ctx
        .server
        .post("/recommend")
        .add_header(session_header(), session("alice"))
        .multipart(recommend_form("20"))
        .await;
    second.assert_status_ok();

    let first = first.json::<Value>();
    let second = second.json::<Value>();
    assert_eq!(second["data"]["cached"], true);
    assert_eq!(
        first["data"]["recommendation"],
        second["data"]["recommendation"]
    );

    // Another session has its own cache
    let other = ctx
        .server
        .post("/recommend")
        .add_header(session_header(), session("bob"))
        .multipart(recommend_form("20"))
        .await;
    assert_eq!(other.json::<Value>()["data"]["cached"], false);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_basic_recommendation_skips_filtering(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend/basic")
        .multipart(recommend_form("20"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(item_names(&body), vec!["Spring Rolls", "Fried Rice"]);
    assert_eq!(body["data"]["recommendation"]["total"], 17.5);
    assert_eq!(body["data"]["menu_info"]["items"].as_array().map(Vec::len), Some(5));

    // Nothing was cached
    let last = ctx.server.get("/recommend/last").await;
    assert_eq!(last.status_code(), StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_invalid_budget(ctx: &mut ApiContext) {
    for budget in ["-5", "0", "abc"] {
        let response = ctx
            .server
            .post("/recommend")
            .multipart(recommend_form(budget))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "INVALID_BUDGET");
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_missing_image(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend")
        .multipart(MultipartForm::new().add_text("budget", "20"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "MISSING_IMAGE");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unsupported_mime_type(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("budget", "20").add_part(
        "image",
        Part::bytes(b"not a photo".to_vec())
            .file_name("menu.txt")
            .mime_type("text/plain"),
    );

    let response = ctx.server.post("/recommend").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_MIMETYPE");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_image_too_large(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("budget", "20").add_part(
        "image",
        Part::bytes(vec![0u8; MAX_IMAGE_BYTES + 1])
            .file_name("menu.jpg")
            .mime_type("image/jpeg"),
    );

    let response = ctx.server.post("/recommend").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.json::<Value>()["code"], "IMAGE_TOO_LARGE");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_invalid_session_header(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/recommend/last")
        .add_header(session_header(), session("not a session!"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_ID");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_rebudget_without_cache(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recommend/rebudget")
        .json(&json!({ "budget": 10 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "NO_CACHE");
    assert_eq!(body["status"], 404);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_rebudget_replans_cached_menu(ctx: &mut ApiContext) {
    ctx.server
        .post("/recommend")
        .add_header(session_header(), session("alice"))
        .multipart(recommend_form("20").add_text("tags", "vegetarian"))
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .post("/recommend/rebudget")
        .add_header(session_header(), session("alice"))
        .json(&json!({ "budget": 10 }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["data"]["tags"], json!(["vegetarian"]));
    assert_eq!(item_names(&body), vec!["Spring Rolls", "Jasmine Tea"]);
    assert_eq!(body["data"]["recommendation"]["total"], 9.5);
    assert_eq!(body["data"]["recommendation"]["budget"], 10.0);

    let last = ctx
        .server
        .get("/recommend/last")
        .add_header(session_header(), session("alice"))
        .await;
    last.assert_status_ok();
    assert_eq!(last.json::<Value>()["data"]["budget"], 10.0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_rebudget_validates_budget_and_body(ctx: &mut ApiContext) {
    let negative = ctx
        .server
        .post("/recommend/rebudget")
        .json(&json!({ "budget": -1 }))
        .await;
    assert_eq!(negative.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(negative.json::<Value>()["code"], "INVALID_BUDGET");

    for body in [
        json!({ "amount": 10 }),
        json!({ "budget": null }),
        json!({ "budget": "cheap" }),
    ] {
        let response = ctx.server.post("/recommend/rebudget").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "INVALID_BUDGET");
    }

    let malformed = ctx
        .server
        .post("/recommend/rebudget")
        .json(&json!({ "budget": 10, "tags": 5 }))
        .await;
    assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(malformed.json::<Value>()["code"], "BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_clear_cache(ctx: &mut ApiContext) {
    ctx.server
        .post("/recommend")
        .multipart(recommend_form("20"))
        .await
        .assert_status_ok();

    ctx.server.get("/recommend/last").await.assert_status_ok();

    ctx.server.delete("/recommend/cache").await.assert_status_ok();

    let last = ctx.server.get("/recommend/last").await;
    assert_eq!(last.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(last.json::<Value>()["code"], "NO_CACHE");
}
