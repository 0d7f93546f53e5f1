use std::sync::Arc;

use tracing::warn;

use crate::{
    auth::{jwt::JwtKeys, services::AuthService},
    bookmarks::{
        memory::MemoryBookmarkStore,
        repo::{BookmarkStore, PgBookmarkStore},
        services::BookmarkService,
    },
    config::AppConfig,
    db,
    users::{
        memory::MemoryUserStore,
        repo::{PgUserStore, UserStore},
        services::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub keys: JwtKeys,
    pub auth: AuthService,
    pub users: UserService,
    pub bookmarks: BookmarkService,
}

impl AppState {
    /// Connects to PostgreSQL and runs migrations when `DATABASE_URL` is set,
    /// otherwise falls back to the in-memory stores.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        match config.database_url.as_deref() {
            Some(url) => {
                let pool = db::connect(url, config.db_max_connections).await?;
                db::migrate(&pool).await?;
                Ok(Self::from_parts(
                    config,
                    Arc::new(PgUserStore::new(pool.clone())),
                    Arc::new(PgBookmarkStore::new(pool)),
                ))
            }
            None => {
                warn!("DATABASE_URL not set; using in-memory stores, data is lost on exit");
                Ok(Self::in_memory(config))
            }
        }
    }

    pub fn in_memory(config: AppConfig) -> Self {
        Self::from_parts(
            config,
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryBookmarkStore::new()),
        )
    }

    pub fn from_parts(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        bookmarks: Arc<dyn BookmarkStore>,
    ) -> Self {
        let keys = JwtKeys::from_config(&config.jwt);
        Self {
            auth: AuthService::new(users.clone(), keys.clone()),
            users: UserService::new(users),
            bookmarks: BookmarkService::new(bookmarks),
            keys,
            config: Arc::new(config),
        }
    }
}
