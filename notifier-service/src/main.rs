use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use fcm_shared::FcmClient;
use firestore_rest::FirestoreClient;
use gcp_auth::{ServiceAccountKey, TokenProvider, CLOUD_PLATFORM_SCOPE};
use notifier_service::{
    handlers::events::register_routes, metrics, services::FcmPushSender,
    services::FirestoreRecordStore, CommentNotifier, Config, LikeNotifier, NotificationSender,
    RecordStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting notifier service");

    let config =
        Config::from_env().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    let credentials = ServiceAccountKey::from_file(&config.firebase.credentials_path)
        .context("Failed to load service account key")?;
    let token_provider = Arc::new(TokenProvider::new(credentials, CLOUD_PLATFORM_SCOPE));

    let record_store: Arc<dyn RecordStore> = Arc::new(FirestoreRecordStore::new(
        FirestoreClient::new(config.firebase.project_id.clone(), token_provider.clone()),
    ));
    let sender: Arc<dyn NotificationSender> = Arc::new(FcmPushSender::new(FcmClient::new(
        config.firebase.project_id.clone(),
        token_provider,
    )));

    let like_notifier = Arc::new(LikeNotifier::new(sender.clone()));
    let comment_notifier = Arc::new(CommentNotifier::new(record_store, sender));

    tracing::info!(
        "Notifiers wired to Firebase project {}",
        config.firebase.project_id
    );

    let addr = format!("0.0.0.0:{}", config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(like_notifier.clone()))
            .app_data(web::Data::new(comment_notifier.clone()))
            .wrap(middleware::Logger::default())
            .wrap(metrics::RequestMetrics)
            .route("/health", web::get().to(|| async { "OK" }))
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .configure(register_routes)
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
