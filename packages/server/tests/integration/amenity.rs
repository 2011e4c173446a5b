use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn creates_and_fetches_amenity() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::AMENITIES,
            &json!({ "name": "Wi-Fi", "description": "Fibre" }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["name"], "Wi-Fi");

    let fetched = app.get(&routes::amenity(&res.id())).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["description"], "Fibre");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app.post(routes::AMENITIES, &json!({ "name": "   " })).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(res.body["message"], "Amenity must have a non-empty name");
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let app = TestApp::spawn().await;
    app.create_amenity("Pool").await;

    let res = app.post(routes::AMENITIES, &json!({ "name": "Pool" })).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "DUPLICATE");
}

#[tokio::test]
async fn names_differing_in_case_are_distinct() {
    let app = TestApp::spawn().await;
    app.create_amenity("Pool").await;

    let res = app.post(routes::AMENITIES, &json!({ "name": "pool" })).await;

    assert_eq!(res.status, 201);
}

#[tokio::test]
async fn lists_amenities() {
    let app = TestApp::spawn().await;
    app.create_amenity("Pool").await;
    app.create_amenity("Sauna").await;

    let res = app.get(routes::AMENITIES).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_amenity_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::amenity("missing")).await;

    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn renames_amenity() {
    let app = TestApp::spawn().await;
    let id = app.create_amenity("Pool").await;

    let res = app
        .put(&routes::amenity(&id), &json!({ "name": "Heated pool" }))
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["name"], "Heated pool");
}

#[tokio::test]
async fn rename_to_taken_name_is_rejected() {
    let app = TestApp::spawn().await;
    app.create_amenity("Pool").await;
    let id = app.create_amenity("Sauna").await;

    let res = app
        .put(&routes::amenity(&id), &json!({ "name": "Pool" }))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "DUPLICATE");
}
