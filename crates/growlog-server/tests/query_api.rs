//! HTTP tests for the ad hoc SELECT gateway.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

#[actix_web::test]
async fn select_query_returns_rows() {
    let app = test::init_service(common::app(common::state().await)).await;

    for variety in ["Roma", "San Marzano"] {
        let response = test::call_service(
            &app,
            common::post_json(
                "/seeds/",
                json!({ "species": "Tomato", "variety": variety, "number_of_seeds": 10 }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let uri = common::select_query_uri("SELECT variety FROM seeds ORDER BY seed_id");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Value = test::read_body_json(response).await;
    assert_eq!(rows, json!([{ "variety": "Roma" }, { "variety": "San Marzano" }]));
}

#[actix_web::test]
async fn keywords_inside_literals_are_data() {
    let app = test::init_service(common::app(common::state().await)).await;

    let uri = common::select_query_uri("SELECT species FROM seeds WHERE comments = 'please delete me'");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Value = test::read_body_json(response).await;
    assert_eq!(rows, json!([]));
}

#[actix_web::test]
async fn mutating_statement_is_rejected() {
    let app = test::init_service(common::app(common::state().await)).await;

    let response = test::call_service(
        &app,
        common::post_json(
            "/seeds/",
            json!({ "species": "Tomato", "variety": "Roma", "number_of_seeds": 20 }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let uri = common::select_query_uri("DELETE FROM seeds");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "query must begin with SELECT");

    // Nothing ran; the row is still there.
    let response = test::call_service(&app, common::get("/seeds/").to_request()).await;
    let rows: Value = test::read_body_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn chained_statement_is_rejected() {
    let app = test::init_service(common::app(common::state().await)).await;

    let uri = common::select_query_uri("SELECT * FROM seeds; DROP TABLE seeds");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "statement chaining is not allowed");

    // The table survived.
    let response = test::call_service(&app, common::get("/seeds/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn non_select_subquery_is_rejected() {
    let app = test::init_service(common::app(common::state().await)).await;

    let uri = common::select_query_uri("SELECT * FROM (DELETE FROM seeds) AS x");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "parenthesized subquery must begin with SELECT, found `delete`"
    );
}

#[actix_web::test]
async fn forbidden_keyword_is_rejected() {
    let app = test::init_service(common::app(common::state().await)).await;

    let uri = common::select_query_uri("SELECT * FROM seeds INTO OUTFILE '/tmp/x'");
    let response = test::call_service(&app, common::post(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "forbidden keyword `into`");
}

#[actix_web::test]
async fn query_route_requires_the_key() {
    let app = test::init_service(common::app(common::state().await)).await;

    let uri = common::select_query_uri("SELECT 1");
    let response =
        test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn missing_query_parameter_is_bad_request() {
    let app = test::init_service(common::app(common::state().await)).await;

    let response =
        test::call_service(&app, common::post("/run_select_query/").to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
