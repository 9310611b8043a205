use httpmock::prelude::*;

use marquee_client::{
    config::ApiConfig,
    http::Client,
    nav::{Navigation, Route},
    view::{self, ViewData},
};

use serde_json::json;

fn client(server: &MockServer) -> Client {
    Client::new(&ApiConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn detail_page_loads_movie_and_ratings() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/42");
            then.status(200).json_body(json!({
                "id": "42",
                "title": "Dead Presidents (1995)",
                "genres": "Action|Crime|Drama"
            }));
        })
        .await;
    let ratings = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/movies/42/ratings")
                .query_param("page", "1")
                .query_param("page_size", "20");
            then.status(200).json_body(json!({
                "ratings": [],
                "total": 0,
                "page": 1,
                "page_size": 20,
                "total_pages": 0
            }));
        })
        .await;

    let navigation = Navigation::resolve("/movie/42").unwrap();
    let data = view::load(&client(&server), &navigation).await.unwrap();

    detail.assert_async().await;
    ratings.assert_async().await;

    let ViewData::MovieDetail { movie, ratings } = data else {
        panic!("expected movie detail view");
    };
    assert_eq!(movie.title, "Dead Presidents (1995)");
    assert_eq!(ratings.map(|r| r.total), Some(0));
}

#[tokio::test]
async fn detail_page_loads_movie_when_ratings_fail() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/42");
            then.status(200).json_body(json!({
                "id": "42",
                "title": "Dead Presidents (1995)",
                "genres": "Action|Crime|Drama"
            }));
        })
        .await;
    let ratings = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/42/ratings");
            then.status(404).json_body(json!({ "detail": "Not Found" }));
        })
        .await;

    let navigation = Navigation::resolve("/movie/42").unwrap();
    let data = view::load(&client(&server), &navigation).await.unwrap();

    detail.assert_async().await;
    ratings.assert_async().await;

    let ViewData::MovieDetail { movie, ratings } = data else {
        panic!("expected movie detail view");
    };
    assert_eq!(movie.title, "Dead Presidents (1995)");
    assert!(ratings.is_none());
}

#[tokio::test]
async fn detail_page_fails_when_movie_is_missing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/7");
            then.status(404).json_body(json!({ "detail": "Movie not found" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/7/ratings");
            then.status(200).json_body(json!({
                "ratings": [],
                "total": 0,
                "page": 1,
                "page_size": 20,
                "total_pages": 0
            }));
        })
        .await;

    let navigation = Navigation::resolve("/movie/7").unwrap();
    let err = view::load(&client(&server), &navigation).await.unwrap_err();

    assert_eq!(err.status(), Some(http::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn detail_page_decodes_movie_id() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/42");
            then.status(200).json_body(json!({
                "id": "42",
                "title": "Dead Presidents (1995)",
                "genres": "Action|Crime|Drama"
            }));
        })
        .await;
    let ratings = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/movies/42/ratings");
            then.status(200).json_body(json!({
                "ratings": [],
                "total": 0,
                "page": 1,
                "page_size": 20,
                "total_pages": 0
            }));
        })
        .await;

    let navigation = Navigation::resolve("/movie/%34%32").unwrap();
    view::load(&client(&server), &navigation).await.unwrap();

    detail.assert_async().await;
    ratings.assert_async().await;
}

#[tokio::test]
async fn listing_page_reads_pagination_from_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/movies")
                .query_param("page", "4")
                .query_param("page_size", "20");
            then.status(200).json_body(json!({
                "movies": [],
                "total": 61,
                "page": 4,
                "page_size": 20,
                "total_pages": 4
            }));
        })
        .await;

    let navigation = Navigation::resolve("/movies?page=4").unwrap();
    let data = view::load(&client(&server), &navigation).await.unwrap();

    mock.assert_async().await;
    assert!(matches!(data, ViewData::Movies { movies } if movies.page == 4));
}

#[tokio::test]
async fn search_page_without_term_loads_nothing() {
    // any request would hit an unmocked path and fail
    let server = MockServer::start_async().await;

    let navigation = Navigation::from(Route::Search);
    let data = view::load(&client(&server), &navigation).await.unwrap();

    assert!(matches!(data, ViewData::Search { results: None }));
}

#[tokio::test]
async fn admin_page_loads_status_and_logs() {
    let server = MockServer::start_async().await;
    let status = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/admin/batch/status");
            then.status(200).json_body(json!({
                "status": "idle",
                "progress": 0,
                "message": "not running",
                "updated_at": null
            }));
        })
        .await;
    let logs = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/admin/batch/logs");
            then.status(200).json_body(json!({ "logs": "" }));
        })
        .await;

    let navigation = Navigation::resolve("/admin").unwrap();
    let data = view::load(&client(&server), &navigation).await.unwrap();

    status.assert_async().await;
    logs.assert_async().await;

    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["view"], "Admin");
    assert_eq!(value["status"]["status"], "idle");
}
