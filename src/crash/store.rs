//! 崩溃记录存储

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::Connection;

use super::model::CrashRecord;

/// 记录存储（只写，单条写入）
///
/// 存储自行分配记录主键，调用方不读取；任何错误都视为写入失败
pub trait RecordStore: Send + Sync {
    fn put(&self, record: &CrashRecord) -> Result<()>;
}

/// SQLite 存储（同步）
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// 打开数据库并确保表存在
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("打开数据库失败: {}", db_path))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS crash (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp INTEGER NOT NULL,
                exception TEXT NOT NULL
            );",
        )
        .context("初始化 crash 表失败")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        Ok(conn.query_row("SELECT COUNT(*) FROM crash", [], |row| row.get(0))?)
    }
}

impl RecordStore for SqliteRecordStore {
    fn put(&self, record: &CrashRecord) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO crash (timestamp, exception) VALUES (?1, ?2)",
            rusqlite::params![record.timestamp, record.exception],
        )?;
        tracing::debug!(id = conn.last_insert_rowid(), "崩溃记录已写入");
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    //! 测试用存储实现

    use super::*;

    /// 内存存储，记录所有写入
    #[derive(Default)]
    pub struct MemoryRecordStore {
        records: Mutex<Vec<CrashRecord>>,
    }

    impl MemoryRecordStore {
        pub fn records(&self) -> Vec<CrashRecord> {
            self.records.lock().clone()
        }
    }

    impl RecordStore for MemoryRecordStore {
        fn put(&self, record: &CrashRecord) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }
    }

    /// 总是写入失败的存储
    pub struct FailingRecordStore;

    impl RecordStore for FailingRecordStore {
        fn put(&self, _record: &CrashRecord) -> Result<()> {
            anyhow::bail!("database is locked")
        }
    }
}
