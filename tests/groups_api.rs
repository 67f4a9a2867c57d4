mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{names, setup_test_app};

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn list_is_newest_first_by_default() {
    let app = setup_test_app().await;

    app.create_group("First", "A-1").await;
    app.create_group("Second", "A-2").await;
    app.create_group("Third", "A-3").await;

    let (status, page) = app.get("/api/groups").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 3);
    assert_eq!(names(&page, "name"), ["Third", "Second", "First"]);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn filter_and_search() {
    let app = setup_test_app().await;

    app.create_group("Math", "B-10").await;
    app.create_group("Math advanced", "B-11").await;
    app.create_group("History", "C-20").await;

    let (_, page) = app.get("/api/groups?name=Math").await;
    assert_eq!(names(&page, "name"), ["Math"]);

    let (_, page) = app.get("/api/groups?room_number=C-20").await;
    assert_eq!(names(&page, "name"), ["History"]);

    let (_, page) = app.get("/api/groups?search=b-1&ordering=name").await;
    assert_eq!(names(&page, "name"), ["Math", "Math advanced"]);

    let (_, page) = app.get("/api/groups?search=math%20advanced").await;
    assert_eq!(names(&page, "name"), ["Math advanced"]);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn renamed_group_moves_in_name_ordering() {
    let app = setup_test_app().await;

    let alpha = app.create_group("Alpha", "R-1").await;
    app.create_group("Beta", "R-2").await;
    app.create_group("Gamma", "R-3").await;

    let (_, page) = app.get("/api/groups?ordering=name").await;
    assert_eq!(names(&page, "name"), ["Alpha", "Beta", "Gamma"]);

    let id = alpha["id"].as_str().unwrap();
    let (status, updated) = app
        .patch(&format!("/api/groups/{id}"), json!({ "name": "Zeta" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Zeta");
    assert_eq!(updated["room_number"], "R-1");
    assert_ne!(updated["updated_at"], alpha["updated_at"]);

    let (_, page) = app.get("/api/groups?ordering=name").await;
    assert_eq!(names(&page, "name"), ["Beta", "Gamma", "Zeta"]);

    let (_, page) = app.get("/api/groups?ordering=-name").await;
    assert_eq!(names(&page, "name"), ["Zeta", "Gamma", "Beta"]);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn crud_round_trip() {
    let app = setup_test_app().await;

    let group = app.create_group("Chemistry", "L-4").await;
    let id = group["id"].as_str().unwrap();
    let uri = format!("/api/groups/{id}");

    let (status, fetched) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Chemistry");

    let (status, replaced) = app
        .put(&uri, json!({ "name": "Organic chemistry", "room_number": "L-5" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["room_number"], "L-5");

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not found.");

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .patch(&uri, json!({ "name": "Ghost" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn invalid_payloads_are_rejected() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post("/api/groups", json!({ "name": "", "room_number": "A-1" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("name").is_some(), "{body}");

    let (status, body) = app.post("/api/groups", json!({ "name": "No room" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("detail").is_some(), "{body}");

    let group = app.create_group("Physics", "P-1").await;
    let id = group["id"].as_str().unwrap();
    let (status, _) = app
        .put(&format!("/api/groups/{id}"), json!({ "name": "Only name" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn list_is_paginated() {
    let app = setup_test_app().await;

    for i in 0..7 {
        app.create_group(&format!("Group {i}"), "P").await;
    }

    let (status, first) = app.get("/api/groups?ordering=name").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["count"], 7);
    assert_eq!(first["results"].as_array().unwrap().len(), common::PAGE_SIZE as usize);
    assert!(first["previous"].is_null());
    let next = first["next"].as_str().unwrap();
    assert!(next.ends_with("/api/groups?ordering=name&page=2"), "{next}");

    let (status, second) = app.get("/api/groups?ordering=name&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&second, "name"), ["Group 5", "Group 6"]);
    assert!(second["next"].is_null());
    assert!(second["previous"].as_str().unwrap().ends_with("/api/groups?ordering=name"));

    let (status, body) = app.get("/api/groups?page=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Invalid page.");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn text_fields_are_trimmed_and_cleaned() {
    let app = setup_test_app().await;

    let group = app.create_group("  Group A  ", " 101 ").await;
    assert_eq!(group["name"], "Group A");
    assert_eq!(group["room_number"], "101");

    let (status, body) = app
        .post("/api/groups", json!({ "name": "   ", "room_number": "1" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["name"].is_array());

    let (status, body) = app
        .post("/api/groups", json!({ "name": "a\u{0}b", "room_number": "1" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"][0], "Null characters are not allowed.");

    let (status, body) = app.get("/api/groups?name=A%00B").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"][0], "Null characters are not allowed.");

    let id = group["id"].as_str().unwrap();
    let (status, _) = app
        .patch(&format!("/api/groups/{id}"), json!({ "name": null }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
