use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 1;
const SERVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the quiz database. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings once, so a bad connection string fails at startup
    /// instead of on the first request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.max_pool_size = Some(MAX_POOL_SIZE);
        options.min_pool_size = Some(MIN_POOL_SIZE);
        options.connect_timeout = Some(SERVER_TIMEOUT);
        options.server_selection_timeout = Some(SERVER_TIMEOUT);

        let inner = Client::with_options(options)?.database(&config.mongo_db_name);
        let db = Self { inner };
        db.ping().await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(db)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(name)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
