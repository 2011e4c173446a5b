use serde_json::json;

use crate::common::{TestApp, routes};

fn loft(owner_id: &str) -> serde_json::Value {
    json!({
        "title": "Loft",
        "price": 120.0,
        "latitude": 48.85,
        "longitude": 2.35,
        "owner_id": owner_id,
    })
}

mod place_creation {
    use super::*;

    #[tokio::test]
    async fn returns_hydrated_place() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let wifi = app.create_amenity("Wi-Fi").await;
        let pool = app.create_amenity("Pool").await;

        let mut body = loft(&owner);
        body["amenities"] = json!([pool, wifi]);
        let res = app.post(routes::PLACES, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["title"], "Loft");
        assert_eq!(res.body["owner"]["id"], owner);
        assert!(res.body["owner"].get("password").is_none());
        let names: Vec<_> = res.body["amenities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("Pool"), json!("Wi-Fi")]);
        assert_eq!(res.body["reviews"], json!([]));
    }

    #[tokio::test]
    async fn missing_fields_are_listed() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PLACES, &json!({ "title": "Loft" })).await;

        assert_eq!(res.status, 400);
        let message = res.body["message"].as_str().unwrap();
        assert!(message.contains("Missing required field: price"));
        assert!(message.contains("Missing required field: owner_id"));
    }

    #[tokio::test]
    async fn out_of_range_coordinates_are_rejected() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;

        let mut body = loft(&owner);
        body["latitude"] = json!(91.0);
        body["longitude"] = json!(-181.0);
        let res = app.post(routes::PLACES, &body).await;

        assert_eq!(res.status, 400);
        let message = res.body["message"].as_str().unwrap();
        assert!(message.contains("Latitude must be between -90 and 90"));
        assert!(message.contains("Longitude must be between -180 and 180"));
    }

    #[tokio::test]
    async fn free_place_is_accepted() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;

        let mut body = loft(&owner);
        body["price"] = json!(0.0);
        let res = app.post(routes::PLACES, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found_and_nothing_is_stored() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PLACES, &loft("ghost")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Owner not found");
        let list = app.get(routes::PLACES).await;
        assert_eq!(list.body, json!([]));
    }

    #[tokio::test]
    async fn unknown_amenity_is_not_found() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;

        let mut body = loft(&owner);
        body["amenities"] = json!(["nope"]);
        let res = app.post(routes::PLACES, &body).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Amenity not found: nope");
    }
}

mod place_reads {
    use super::*;

    #[tokio::test]
    async fn get_place_includes_reviews() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let guest = app.create_user("guest@example.com").await;
        let place = app.create_place(&owner, &[]).await;
        let review = app.create_review(&guest, &place, 4).await;

        let res = app.get(&routes::place(&place)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["reviews"][0]["id"], review);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::place("missing")).await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn lists_place_reviews() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let guest = app.create_user("guest@example.com").await;
        let place = app.create_place(&owner, &[]).await;
        let other = app.create_place(&owner, &[]).await;
        app.create_review(&guest, &place, 5).await;
        app.create_review(&guest, &other, 2).await;

        let res = app.get(&routes::place_reviews(&place)).await;

        assert_eq!(res.status, 200);
        let reviews = res.body.as_array().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0]["rating"], 5);
    }

    #[tokio::test]
    async fn reviews_of_unknown_place_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::place_reviews("missing")).await;

        assert_eq!(res.status, 404);
    }
}

mod place_update {
    use super::*;

    #[tokio::test]
    async fn updates_price_and_keeps_owner() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let place = app.create_place(&owner, &[]).await;

        let res = app
            .put(
                &routes::place(&place),
                &json!({ "price": 99.5, "owner_id": "someone-else" }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["price"], 99.5);
        assert_eq!(res.body["owner_id"], owner);
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let place = app.create_place(&owner, &[]).await;

        let res = app
            .put(&routes::place(&place), &json!({ "price": -1.0 }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "Price must be greater than or equal to 0"
        );
    }

    #[tokio::test]
    async fn replaces_amenity_list() {
        let app = TestApp::spawn().await;
        let owner = app.create_user("owner@example.com").await;
        let wifi = app.create_amenity("Wi-Fi").await;
        let place = app.create_place(&owner, &[wifi.as_str()]).await;
        let pool = app.create_amenity("Pool").await;

        let res = app
            .put(&routes::place(&place), &json!({ "amenities": [pool] }))
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        let amenities = res.body["amenities"].as_array().unwrap();
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0]["name"], "Pool");
    }

    #[tokio::test]
    async fn update_of_unknown_place_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .put(&routes::place("missing"), &json!({ "price": 10.0 }))
            .await;

        assert_eq!(res.status, 404);
    }
}
