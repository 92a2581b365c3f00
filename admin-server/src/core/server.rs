//! Server Implementation
//!
//! HTTP 服务器启动和优雅关闭

use std::net::SocketAddr;

use crate::core::{Config, Result, ServerState};
use crate::db::DbService;
use crate::db::repository::user;

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the database, bootstrap the admin account and build shared state
    pub async fn initialize(&self) -> Result<ServerState> {
        let db = DbService::new(&self.config.database_path).await?;

        match &self.config.admin_initial_password {
            Some(password) => {
                if let Some(admin) = user::ensure_admin(&db.pool, password).await? {
                    tracing::info!(user_id = admin.id, "Created initial admin account");
                }
            }
            None => {
                if user::count(&db.pool).await? == 0 {
                    tracing::warn!("No users exist and ADMIN_INITIAL_PASSWORD is not set; nobody can log in");
                }
            }
        }

        Ok(ServerState::new(self.config.clone(), db))
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.initialize().await?;
        let app = crate::routes::build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, environment = %self.config.environment, "Admin server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Admin server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
