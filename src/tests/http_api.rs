#[cfg(test)]
mod test {

    use serde_json::{json, Value};

    use crate::server::routes::hex_digest;
    use crate::tests::common::{build_app, build_reqwest_client, spawn_axum};

    async fn authenticate(client: &reqwest::Client, base: &str) -> String {
        let resp = client
            .post(format!("{base}/auth"))
            .json(&json!({"username": "alice", "password": "hunter2"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["expired_in"], 3600);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn auth_and_sum_roundtrip() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        let token = authenticate(&client, &base).await;

        let resp = client
            .post(format!("{base}/sum"))
            .bearer_auth(&token)
            .json(&json!([1, 2, 3, 4]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["sum"], hex_digest(10.0));
    }

    #[tokio::test]
    async fn auth_rejects_bad_credentials() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        let resp = client
            .post(format!("{base}/auth"))
            .json(&json!({"username": "", "password": "hunter2"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "the username is invalid");
        assert_eq!(body["status_code"], 400);

        let resp = client
            .post(format!("{base}/auth"))
            .json(&json!({"username": "alice", "password": ""}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "the password is invalid");
    }

    #[tokio::test]
    async fn auth_rejects_malformed_body() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        let resp = client
            .post(format!("{base}/auth"))
            .body("not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "the request is invalid");
    }

    #[tokio::test]
    async fn sum_requires_a_bearer_token() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        // no Authorization header at all
        let resp = client
            .post(format!("{base}/sum"))
            .json(&json!([1, 2]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401);

        // garbage token
        let resp = client
            .post(format!("{base}/sum"))
            .bearer_auth("not-a-token")
            .json(&json!([1, 2]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn sum_rejects_unsupported_shapes() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        let token = authenticate(&client, &base).await;

        let resp = client
            .post(format!("{base}/sum"))
            .bearer_auth(&token)
            .json(&json!([1.0, true]))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 422);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "the value type is unsupported");
    }

    #[tokio::test]
    async fn sum_rejects_malformed_body() {
        let (_handle, addr) = spawn_axum(build_app(false).await).await;
        let base = format!("http://{addr}");
        let client = build_reqwest_client();

        let token = authenticate(&client, &base).await;

        let resp = client
            .post(format!("{base}/sum"))
            .bearer_auth(&token)
            .body("")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn metrics_route_is_served_when_enabled() {
        let (_handle, addr) = spawn_axum(build_app(true).await).await;
        let client = build_reqwest_client();

        let resp = client
            .get(format!("http://{addr}/metrics"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert!(resp.text().await.unwrap().contains("sumgate_up"));
    }
}
