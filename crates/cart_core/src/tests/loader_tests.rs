use super::*;
use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/cart.json")
}

#[tokio::test]
async fn fetches_and_decodes_cart_feed() {
    let url = serve(Router::new().route(
        "/cart.json",
        get(|| async {
            r#"{"items":[{"title":"Asgaard sofa","featured_image":{"url":"https://cdn.example.test/sofa.png"},"price":25000000,"quantity":1,"line_price":25000000}]}"#
        }),
    ))
    .await;

    let feed = HttpFeedSource::new(url).fetch_cart().await.expect("feed");
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].title, "Asgaard sofa");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let url = serve(Router::new().route("/cart.json", get(|| async { "<html>oops</html>" }))).await;

    let err = HttpFeedSource::new(url)
        .fetch_cart()
        .await
        .expect_err("should fail");
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[tokio::test]
async fn error_status_is_reported() {
    let url = serve(Router::new().route(
        "/cart.json",
        get(|| async { (StatusCode::NOT_FOUND, "missing") }),
    ))
    .await;

    let err = HttpFeedSource::new(url)
        .fetch_cart()
        .await
        .expect_err("should fail");
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = HttpFeedSource::new(format!("http://{addr}/cart.json"))
        .fetch_cart()
        .await
        .expect_err("should fail");
    assert!(matches!(err, LoadError::Transport { .. }));
}
