use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use axum_server::bind;
use log::info;
use std::{error::Error, future::Future, net::SocketAddr, pin::Pin};
use tower_http::cors::CorsLayer;
use welds::connections::any::AnyClient;

use app_state::AppState;
use middleware::{rate_limit, require_auth};
use routes::{create_student, delete_student, list_students, login, update_student};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let students = Router::new()
        .route("/", get(list_students))
        .route("/create", post(create_student))
        .route("/update/:id", put(update_student))
        .route("/student", delete(delete_student))
        .route("/student/", delete(delete_student))
        .route("/student/:id", delete(delete_student))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    Router::new()
        .route("/login", post(login))
        .merge(students)
        .layer(from_fn_with_state(app_state.clone(), rate_limit))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!("listening on {}", &self.address);
        self.http_future.await
    }
}

pub async fn get_db_client(db_url: &str) -> Result<AnyClient, Box<dyn Error>> {
    let client = welds::connections::connect(db_url).await?;
    Ok(client)
}
