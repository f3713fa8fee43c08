//! Webhook delivery tests using a wiremock receiver as the bot's endpoint.

mod common;

use common::{call_method, get_method, spawn_default, TEST_TOKEN};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn register_webhook(base: &str, url: &str, secret: Option<&str>) {
    let client = reqwest::Client::new();
    let mut body = json!({"token": TEST_TOKEN, "url": url});
    if let Some(secret) = secret {
        body["secret_token"] = json!(secret);
    }

    let response = client
        .post(format!("{}/__control/webhooks", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
}

async fn deliver(base: &str, update: Value) -> Value {
    let client = reqwest::Client::new();
    client
        .post(format!("{}/__control/webhooks/{}/deliver", base, TEST_TOKEN))
        .json(&update)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn delivers_update_as_json_post() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"update_id": 7, "message": {"text": "hi"}})))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), None).await;

    let result = deliver(&base, json!({"update_id": 7, "message": {"text": "hi"}})).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["status_code"], 200);
    assert_eq!(result["response_body"], "OK");
    assert!(result.get("method_result").is_none());
    assert!(result["duration_ms"].is_u64() || result["duration_ms"].is_i64());
}

#[tokio::test]
async fn sends_secret_token_header() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("X-Telegram-Bot-Api-Secret-Token", "shh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), Some("shh")).await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn executes_method_in_response() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"method": "sendMessage", "chat_id": 5, "text": "reply"})),
        )
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), None).await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], true);

    let method_result = &result["method_result"];
    assert_eq!(method_result["method"], "sendMessage");
    assert_eq!(method_result["params"]["chat_id"], 5);
    assert!(method_result["params"].get("method").is_none());
    assert!(method_result.get("error").is_none());

    // The executed method went through the responder: a real Message came back
    let message = &method_result["response"];
    assert_eq!(message["chat"]["id"], 5);
    assert_eq!(message["text"], "reply");
    assert!(message["message_id"].is_i64());
}

#[tokio::test]
async fn unknown_method_in_response_is_reported_not_executed() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"method": "sendTelepathy"})))
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), None).await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], true);

    let method_result = &result["method_result"];
    assert_eq!(method_result["error"], "unknown method: sendTelepathy");
    assert!(method_result.get("response").is_none());
}

#[tokio::test]
async fn plain_response_bodies_carry_no_method_result() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), None).await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], true);
    assert!(result.get("method_result").is_none());
}

#[tokio::test]
async fn failed_delivery_records_last_error() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/hook", receiver.uri()), None).await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], false);
    assert_eq!(result["status_code"], 500);
    assert!(result["error"].as_str().unwrap().contains("500"));
    // A failing response body never executes a method
    assert!(result.get("method_result").is_none());

    let (_, info) = get_method(&base, "getWebhookInfo").await;
    assert!(info["result"]["last_error_date"].is_i64());
    assert!(info["result"]["last_error_message"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn successful_delivery_clears_last_error() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&receiver)
        .await;
    Mock::given(method("POST"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&receiver)
        .await;

    let base = spawn_default().await;
    register_webhook(&base, &format!("{}/flaky", receiver.uri()), None).await;

    let first = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(first["success"], false);

    let second = deliver(&base, json!({"update_id": 2})).await;
    assert_eq!(second["success"], true);

    let (_, info) = get_method(&base, "getWebhookInfo").await;
    assert!(info["result"].get("last_error_date").is_none());
    assert!(info["result"].get("last_error_message").is_none());
}

#[tokio::test]
async fn deliver_without_webhook_fails_cleanly() {
    let base = spawn_default().await;

    let result = deliver(&base, json!({"update_id": 1})).await;
    assert_eq!(result["success"], false);
    assert_eq!(result["error"], "no webhook configured");
    assert!(result.get("status_code").is_none());
}

#[tokio::test]
async fn bot_plane_set_webhook_feeds_control_plane_delivery() {
    let receiver = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&receiver)
        .await;

    let base = spawn_default().await;

    // Register through the bot plane, like a real bot library would
    let (status, _) = call_method(
        &base,
        "setWebhook",
        json!({"url": format!("{}/hook", receiver.uri())}),
    )
    .await;
    assert_eq!(status, 200);

    let result = deliver(&base, json!({"update_id": 1, "message": {"text": "via bot plane"}})).await;
    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn webhook_crud_via_control_plane() {
    let base = spawn_default().await;
    let client = reqwest::Client::new();

    register_webhook(&base, "http://example.com/hook", None).await;

    let listed: Value = client
        .get(format!("{}/__control/webhooks", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["webhooks"][TEST_TOKEN]["url"], "http://example.com/hook");

    let deleted = client
        .delete(format!("{}/__control/webhooks/{}", base, TEST_TOKEN))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 204);

    let listed: Value = client
        .get(format!("{}/__control/webhooks", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed["webhooks"].as_object().unwrap().is_empty());
}
