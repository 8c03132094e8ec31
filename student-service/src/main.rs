use std::sync::Arc;

use log::{info, warn};
use student_service::app_state::{AppState, StudentStoreType};
use student_service::services::{HashmapStudentStore, SqlStudentStore, StubCredentialVerifier};
use student_service::utils::{Config, IN_MEMORY_DATABASE_URL};
use student_service::{get_db_client, Application};

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let student_store = get_configured_student_store(config.database_url()).await;
    let app_state = AppState::new(
        config.clone(),
        student_store,
        Arc::new(StubCredentialVerifier::default()),
    );
    let app = Application::build(app_state, config.server_address())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn get_configured_student_store(db_url: &str) -> StudentStoreType {
    if db_url == IN_MEMORY_DATABASE_URL {
        warn!("using in-memory student store; data is lost on exit");
        return Arc::new(HashmapStudentStore::new());
    }

    let db_client = get_db_client(db_url)
        .await
        .expect("Unable to connect to the database");
    info!("Connected to the database");
    Arc::new(SqlStudentStore::new(db_client))
}
