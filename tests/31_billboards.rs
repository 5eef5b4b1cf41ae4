mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn billboard_create_requires_identity() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let owner = common::fresh_user_id("bb_noauth");
    let store_id = common::create_store(server, &owner, "Billboards").await?;

    let res = client
        .post(format!("{}/api/{}/billboards", server.base_url, store_id))
        .json(&json!({ "label": "Summer", "imageUrl": "https://img.test/summer.png" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.text().await?, "Unauthenticated");

    Ok(())
}

#[tokio::test]
async fn billboard_create_validates_fields_in_order() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let owner = common::fresh_user_id("bb_fields");
    let store_id = common::create_store(server, &owner, "Billboards").await?;

    let res = client
        .post(format!("{}/api/{}/billboards", server.base_url, store_id))
        .header("x-user-id", &owner)
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Label is required");

    let res = client
        .post(format!("{}/api/{}/billboards", server.base_url, store_id))
        .header("x-user-id", &owner)
        .json(&json!({ "label": "Summer" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Image URL is required");

    Ok(())
}

#[tokio::test]
async fn billboard_mutations_reject_foreign_stores() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let owner = common::fresh_user_id("bb_owner");
    let intruder = common::fresh_user_id("bb_intruder");
    let store_id = common::create_store(server, &owner, "Billboards").await?;

    let res = client
        .post(format!("{}/api/{}/billboards", server.base_url, store_id))
        .header("x-user-id", &intruder)
        .json(&json!({ "label": "Hijack", "imageUrl": "https://img.test/x.png" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(res.text().await?, "Unauthorized");

    // Nothing was written
    let res = client
        .get(format!("{}/api/{}/billboards", server.base_url, store_id))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body.as_array().map(Vec::len), Some(0), "unexpected billboards: {}", body);

    Ok(())
}

#[tokio::test]
async fn billboard_crud_round_trip() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let owner = common::fresh_user_id("bb_crud");
    let store_id = common::create_store(server, &owner, "Billboards").await?;

    // Create
    let res = client
        .post(format!("{}/api/{}/billboards", server.base_url, store_id))
        .header("x-user-id", &owner)
        .json(&json!({ "label": "Summer", "imageUrl": "https://img.test/summer.png" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["label"], "Summer");
    assert_eq!(created["imageUrl"], "https://img.test/summer.png");
    assert_eq!(created["storeId"], store_id.as_str());
    let billboard_id = created["id"].as_str().unwrap().to_string();

    // Round-trip: fetched fields equal the input plus the assigned id
    let res = client
        .get(format!("{}/api/{}/billboards/{}", server.base_url, store_id, billboard_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["label"], "Summer");

    // List contains it
    let res = client
        .get(format!("{}/api/{}/billboards", server.base_url, store_id))
        .send()
        .await?;
    let list = res.json::<serde_json::Value>().await?;
    assert!(
        list.as_array().unwrap().iter().any(|b| b["id"] == created["id"]),
        "billboard missing from list: {}",
        list
    );

    // Update is a whole-record replacement reported as a count
    let res = client
        .patch(format!("{}/api/{}/billboards/{}", server.base_url, store_id, billboard_id))
        .header("x-user-id", &owner)
        .json(&json!({ "label": "Winter", "imageUrl": "https://img.test/winter.png" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["count"], 1);

    // Delete
    let res = client
        .delete(format!("{}/api/{}/billboards/{}", server.base_url, store_id, billboard_id))
        .header("x-user-id", &owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["count"], 1);

    // Missing records come back as a 200 null body
    let res = client
        .get(format!("{}/api/{}/billboards/{}", server.base_url, store_id, billboard_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body.is_null(), "expected null body, got {}", body);

    Ok(())
}
