use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};

use crate::config::DatabaseConfig;

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    // Set connection pool options
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    sync_schema(&db).await?;

    Ok(db)
}

/// Create any missing tables and constraints for the registered entities.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.get_schema_registry("stockroom_server::entity::*")
        .sync(db)
        .await?;
    Ok(())
}

/// Produces one [`Session`] per unit of work.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn acquire(&self) -> Result<Session, DbErr>;
}

/// Exclusive handle to the database for a single unit of work.
///
/// Writes only become durable through [`Session::commit`]. Dropping a session
/// without committing rolls back and hands the connection back to the pool,
/// so every exit path, early `?` returns included, releases it.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub fn new(txn: DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }
}

/// [`SessionFactory`] backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct PooledSessionFactory {
    db: DatabaseConnection,
}

impl PooledSessionFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionFactory for PooledSessionFactory {
    async fn acquire(&self) -> Result<Session, DbErr> {
        let txn = self.db.begin().await?;
        Ok(Session::new(txn))
    }
}
