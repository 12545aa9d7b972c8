mod conditional;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};

#[tokio::main]
async fn main() {
    let app_state = conditional::build_state().expect("valid conditional configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet).put(routes::replace_greeting))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    println!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
