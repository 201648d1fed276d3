//! Redis Store Module
//!
//! A [`PayloadStore`] backed by a Redis server.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::cache::store::{PayloadStore, StoreError, StoreResult};

/// Redis-backed payload storage.
///
/// Payloads are stored as raw bytes; expiry is enforced by Redis.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else if err.is_connection_refusal() {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

/// Builds `GET key`.
fn get_cmd(key: &str) -> redis::Cmd {
    let mut cmd = redis::cmd("GET");
    cmd.arg(key);
    cmd
}

/// Builds `SET key value EX ttl`, or a plain `SET` when `ttl_secs` is 0.
fn set_cmd(key: &str, value: &[u8], ttl_secs: u64) -> redis::Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(key).arg(value);
    if ttl_secs > 0 {
        cmd.arg("EX").arg(ttl_secs);
    }
    cmd
}

impl RedisStore {
    /// Wraps an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a connection to `url` and verifies it with a PING.
    ///
    /// # Arguments
    /// * `url` - A Redis connection URL, e.g. `redis://127.0.0.1:6379/0`
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| map_redis_error("invalid Redis URL", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;

        let store = Self::new(conn);
        store.ping().await?;
        debug!("Connected to Redis");
        Ok(store)
    }
}

#[async_trait]
impl PayloadStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        trace!(key, "Fetching payload from Redis");

        let mut conn = self.conn.clone();
        match get_cmd(key).query_async::<Option<Vec<u8>>>(&mut conn).await {
            Ok(value) => Ok(value.map(Bytes::from)),
            Err(e) => {
                warn!(key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> StoreResult<()> {
        trace!(key, ttl_secs, "Storing payload in Redis");

        let mut conn = self.conn.clone();
        match set_cmd(key, value, ttl_secs).query_async::<()>(&mut conn).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(key, error = %e, "Failed to store payload in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| map_redis_error("Redis PING failed", e))
    }
}
