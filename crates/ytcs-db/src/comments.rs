//! The `comments` table: an append-only log of classified comments.

use std::path::Path;
use std::sync::Arc;

use sqlx::sqlite::{SqliteArguments, SqlitePool};
use sqlx::Sqlite;
use tokio::sync::Mutex;
use ytcs_core::{ClassifiedComment, SentimentLabel};

use crate::{connect_pool, DbError, StoreConfig};

const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS comments (author TEXT, sentiment TEXT, comment TEXT)";

const INSERT_SQL: &str = "INSERT INTO comments (author, sentiment, comment) VALUES (?, ?, ?)";

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    author: String,
    sentiment: String,
    comment: String,
}

impl CommentRow {
    fn into_comment(self) -> Result<ClassifiedComment, DbError> {
        let sentiment = self
            .sentiment
            .parse::<SentimentLabel>()
            .map_err(|e| DbError::InvalidSentiment(e.0))?;
        Ok(ClassifiedComment {
            author: self.author,
            sentiment,
            text: self.comment,
        })
    }
}

/// Durable store of classified comments.
///
/// Cloning is cheap and every clone shares the same pool and write lock, so
/// writes from concurrent runs are serialized while reads are not blocked.
#[derive(Debug, Clone)]
pub struct CommentStore {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl CommentStore {
    /// Wrap an existing pool. Call [`CommentStore::ensure_schema`] before use.
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the file cannot be opened or the table
    /// cannot be created.
    pub async fn open(path: &Path, config: StoreConfig) -> Result<Self, DbError> {
        let pool = connect_pool(path, config).await?;
        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        tracing::debug!(path = %path.display(), "comment store opened");
        Ok(store)
    }

    /// Create the `comments` table if it does not exist. Safe to call on
    /// every startup.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Append one row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the insert fails.
    pub async fn append(&self, comment: &ClassifiedComment) -> Result<(), DbError> {
        let _guard = self.write_lock.lock().await;
        insert_query(comment).execute(&self.pool).await?;
        Ok(())
    }

    /// Append every row in `comments`, in order, inside one transaction.
    ///
    /// Either all rows are committed or none are. An empty slice performs no
    /// write at all.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if any insert or the commit fails; the
    /// transaction is rolled back in that case.
    pub async fn append_batch(&self, comments: &[ClassifiedComment]) -> Result<(), DbError> {
        if comments.is_empty() {
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;
        for comment in comments {
            insert_query(comment).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        tracing::debug!(rows = comments.len(), "appended comment batch");
        Ok(())
    }

    /// Read every stored comment in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the query fails, or
    /// [`DbError::InvalidSentiment`] if a row carries a label outside the
    /// three known values.
    pub async fn read_all(&self) -> Result<Vec<ClassifiedComment>, DbError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT author, sentiment, comment FROM comments ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CommentRow::into_comment).collect()
    }

    /// Number of stored rows.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Verify the store still has a live connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlx`] if the ping fails.
    pub async fn ping(&self) -> Result<(), DbError> {
        crate::ping(&self.pool).await?;
        Ok(())
    }

    /// Close the underlying pool. Every clone observes the close.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn insert_query(
    comment: &ClassifiedComment,
) -> sqlx::query::Query<'_, Sqlite, SqliteArguments<'_>> {
    sqlx::query(INSERT_SQL)
        .bind(comment.author.as_str())
        .bind(comment.sentiment.as_str())
        .bind(comment.text.as_str())
}
