//! End-to-end operation tests: typed API -> create -> poll -> result.

use axum::routing::post;
use axum::{Json, Router};
use pixelift_client::{ClientConfig, EnhancerClient};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn to_anime_submits_encrypted_preset_and_completes() {
    let config = ClientConfig::default();
    let (aes_key, aes_iv) = (config.aes_key.clone(), config.aes_iv.clone());

    let app = Router::new()
        .route(
            "/api/v1/r/image-enhance/create",
            post(move |Json(body): Json<Value>| {
                let (aes_key, aes_iv) = (aes_key.clone(), aes_iv.clone());
                async move {
                    assert_eq!(body["model"], 5);
                    assert!(body["image"]
                        .as_str()
                        .unwrap()
                        .starts_with("data:image/jpeg;base64,"));

                    // The settings field is the AES-CBC/base64 wire format;
                    // decrypting it recovers the preset JSON.
                    let settings = body["settings"].as_str().unwrap();
                    let plaintext = pixelift_crypto::decrypt_settings(
                        aes_key.as_bytes(),
                        aes_iv.as_bytes(),
                        settings,
                    )
                    .unwrap();
                    let preset: Value = serde_json::from_slice(&plaintext).unwrap();
                    assert_eq!(preset["size"], "2K");
                    assert!(preset["prompt"].as_str().unwrap().contains("GHIBLI"));

                    Json(json!({"code": 100000, "data": {"id": "task-e2e"}}))
                }
            }),
        )
        .route(
            "/api/v1/r/image-enhance/result",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["task_id"], "task-e2e");
                Json(json!({
                    "code": 100000,
                    "data": {
                        "status": "succeeded",
                        "output": "https://cdn.example/anime.jpg",
                        "input": "https://cdn.example/in.jpg"
                    }
                }))
            }),
        );
    let addr = spawn_stub(app).await;

    let client = EnhancerClient::with_config(
        ClientConfig::default()
            .with_base_url(format!("http://{addr}/api/v1"))
            .with_poll_interval(Duration::from_millis(10)),
    )
    .unwrap();

    let result = client.enhance().to_anime(JPEG_MAGIC, "ghibli").await.unwrap();
    assert_eq!(result.id, "task-e2e");
    assert_eq!(result.output, "https://cdn.example/anime.jpg");
}

#[tokio::test]
async fn edit_image_targets_editor_endpoints_with_merged_settings() {
    let app = Router::new()
        .route(
            "/api/v1/k/image-enhance/create",
            post(|Json(body): Json<Value>| async move {
                // flux resolves through the editor model table
                assert_eq!(body["model"], 8);
                Json(json!({"code": 100000, "data": {"id": "task-edit"}}))
            }),
        )
        .route(
            "/api/v1/k/image-enhance/result",
            post(|| async {
                Json(json!({
                    "code": 100000,
                    "data": {"status": "success", "output": "o", "input": "i"}
                }))
            }),
        );
    let addr = spawn_stub(app).await;

    let client = EnhancerClient::with_config(
        ClientConfig::default()
            .with_base_url(format!("http://{addr}/api/v1"))
            .with_poll_interval(Duration::from_millis(10)),
    )
    .unwrap();

    let result = client
        .enhance()
        .edit_image(JPEG_MAGIC, "flux", "add a hat", None)
        .await
        .unwrap();
    assert_eq!(result.id, "task-edit");
    assert_eq!(result.status, "success");
}
