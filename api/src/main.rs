use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use sr_api::{create_app, AppState};
use sr_core::{
    default_policies, AuthorizationService, InMemoryStudentRepository, StudentRepository,
    TokenService,
};
use sr_infra::database::{DatabasePool, MySqlStudentRepository};
use sr_infra::{EnvSecretsProvider, SecretsProvider};
use sr_shared::{AppConfig, FRONT_END_APPLICATION_POLICY};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Student Records API Server");

    let config = load_config().await?;

    // Key material must be present before anything binds
    let token_service = Arc::new(
        TokenService::from_settings(&config.jwt).context("Invalid JWT configuration")?,
    );

    let policies = default_policies();
    policies
        .ensure_registered(&[FRONT_END_APPLICATION_POLICY])
        .context("Authorization policies are incomplete")?;
    let authorization = AuthorizationService::new(policies);

    match config.database.connection_url() {
        Some(_) => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("Failed to connect to the database")?;
            if !pool.health_check().await.context("Database health check failed")? {
                anyhow::bail!("Database health check returned an unexpected result");
            }
            pool.ensure_schema()
                .await
                .context("Failed to prepare the database schema")?;

            let repository = Arc::new(MySqlStudentRepository::new(pool.get_pool().clone()));
            serve(config, token_service, authorization, repository).await
        }
        None => {
            info!("No database URL configured; using the in-memory student store");
            let repository = Arc::new(InMemoryStudentRepository::new());
            serve(config, token_service, authorization, repository).await
        }
    }
}

/// Loads configuration, then reloads it with any secrets layered on top
async fn load_config() -> anyhow::Result<AppConfig> {
    let bootstrap = AppConfig::load(&HashMap::new()).context("Failed to load configuration")?;

    if !bootstrap.secrets.is_enabled() {
        return Ok(bootstrap);
    }

    info!("Fetching {} secret(s)", bootstrap.secrets.names.len());
    let secrets = EnvSecretsProvider::new()
        .fetch(&bootstrap.secrets.names)
        .await
        .context("Failed to fetch secrets")?;

    AppConfig::load_for(bootstrap.environment, &secrets)
        .context("Failed to load configuration with secrets")
}

async fn serve<R>(
    config: AppConfig,
    token_service: Arc<TokenService>,
    authorization: AuthorizationService,
    repository: Arc<R>,
) -> anyhow::Result<()>
where
    R: StudentRepository + 'static,
{
    let bind_address = config.server.bind_address();
    info!(
        "Server will bind to: {} ({} environment)",
        bind_address, config.environment
    );

    let state = web::Data::new(AppState::new(token_service, authorization, repository));
    let cors = config.cors.clone();

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
