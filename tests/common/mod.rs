use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/store-admin-api");
        cmd.env("STORE_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any non-404 response
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Spawn (or reuse) the shared test server. Returns None when DATABASE_URL is
/// not configured, so suites skip cleanly on machines without postgres.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    if std::env::var("DATABASE_URL").is_err() && !std::path::Path::new(".env").exists() {
        eprintln!("skipping: DATABASE_URL not configured");
        return Ok(None);
    }

    let server =
        SERVER.get_or_init(|| Some(TestServer::spawn().expect("failed to spawn server binary")));
    if let Some(server) = server.as_ref() {
        server.wait_ready(Duration::from_secs(10)).await?;
    }
    Ok(server.as_ref())
}

/// Fresh opaque user id per call so repeated test runs never collide.
#[allow(dead_code)]
pub fn fresh_user_id(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("user_{}_{}", prefix, nanos)
}

/// Create a store for the given user and return its id.
#[allow(dead_code)]
pub async fn create_store(server: &TestServer, user_id: &str, name: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/stores", server.base_url))
        .header("x-user-id", user_id)
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "store create failed: {}", res.status());
    let body = res.json::<serde_json::Value>().await?;
    Ok(body["id"].as_str().context("store id missing")?.to_string())
}

/// Catalog fixture shared by the product and checkout suites.
#[allow(dead_code)]
pub struct Catalog {
    pub owner: String,
    pub store_id: String,
    pub billboard_id: String,
    pub category_id: String,
    pub size_id: String,
    pub color_id: String,
}

/// Seed one store with the relations a product needs.
#[allow(dead_code)]
pub async fn seed_catalog(server: &TestServer, prefix: &str) -> Result<Catalog> {
    let client = reqwest::Client::new();
    let owner = fresh_user_id(prefix);
    let store_id = create_store(server, &owner, "Catalog").await?;

    let post = |path: String, body: serde_json::Value| {
        let client = client.clone();
        let owner = owner.clone();
        async move {
            let res = client
                .post(path)
                .header("x-user-id", &owner)
                .json(&body)
                .send()
                .await?;
            anyhow::ensure!(res.status() == StatusCode::OK, "seed failed: {}", res.status());
            let body = res.json::<serde_json::Value>().await?;
            body["id"]
                .as_str()
                .map(str::to_string)
                .context("id missing from seed response")
        }
    };

    let billboard_id = post(
        format!("{}/api/{}/billboards", server.base_url, store_id),
        serde_json::json!({ "label": "Hero", "imageUrl": "https://img.test/hero.png" }),
    )
    .await?;
    let category_id = post(
        format!("{}/api/{}/categories", server.base_url, store_id),
        serde_json::json!({ "name": "Shirts", "billboardId": billboard_id }),
    )
    .await?;
    let size_id = post(
        format!("{}/api/{}/sizes", server.base_url, store_id),
        serde_json::json!({ "name": "Medium", "value": "M" }),
    )
    .await?;
    let color_id = post(
        format!("{}/api/{}/colors", server.base_url, store_id),
        serde_json::json!({ "name": "Slate", "value": "#64748b" }),
    )
    .await?;

    Ok(Catalog {
        owner,
        store_id,
        billboard_id,
        category_id,
        size_id,
        color_id,
    })
}

/// Create a product in the seeded catalog and return its id.
#[allow(dead_code)]
pub async fn create_product(
    server: &TestServer,
    catalog: &Catalog,
    name: &str,
    extra: serde_json::Value,
) -> Result<String> {
    let client = reqwest::Client::new();
    let mut body = serde_json::json!({
        "name": name,
        "price": "10.99",
        "categoryId": catalog.category_id,
        "colorId": catalog.color_id,
        "sizeId": catalog.size_id,
        "images": [{ "url": "https://img.test/front.png" }],
    });
    if let (Some(map), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            map.insert(key.clone(), value.clone());
        }
    }

    let res = client
        .post(format!("{}/api/{}/products", server.base_url, catalog.store_id))
        .header("x-user-id", &catalog.owner)
        .json(&body)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "product create failed: {}", res.status());
    let body = res.json::<serde_json::Value>().await?;
    body["id"]
        .as_str()
        .map(str::to_string)
        .context("product id missing")
}
