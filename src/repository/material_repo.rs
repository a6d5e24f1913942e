// ==========================================
// 物料盘点系统 - 物料数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::material::{Material, MaterialRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tracing::debug;

// ==========================================
// MaterialRepository - 物料仓储
// ==========================================
/// 物料仓储
/// 职责: 管理 materials 表的读写
/// 连接: 每次操作独立打开，操作结束即释放
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    db_path: String,
}

impl MaterialRepository {
    /// 创建新的 MaterialRepository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Err: 数据库无法打开
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        // 先试开一次，路径错误尽早暴露
        open_sqlite_connection(db_path)?;
        Ok(Self {
            db_path: db_path.to_string(),
        })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<Connection> {
        Ok(open_sqlite_connection(&self.db_path)?)
    }

    /// 批量写入物料（upsert）
    ///
    /// # 参数
    /// - records: 已清洗的物料记录
    ///
    /// # 返回
    /// - Ok(usize): 写入的记录数
    ///
    /// # 说明
    /// - code 已存在时仅替换 description，不新增行，registered_at 保持不变
    /// - 整批在一个 IMMEDIATE 事务中执行，任一条失败则整批回滚
    /// - 写锁在 busy_timeout 内拿不到时返回 DatabaseTransactionError，不写入任何记录
    pub fn upsert_materials(&self, records: &[MaterialRecord]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| RepositoryError::DatabaseTransactionError(format!("BEGIN: {}", e)))?;

        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO materials (code, description)
                VALUES (?1, ?2)
                ON CONFLICT(code) DO UPDATE SET description = excluded.description
                "#,
            )?;
            for record in records {
                stmt.execute(params![record.code, record.description])?;
                count += 1;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(format!("COMMIT: {}", e)))?;
        debug!("upsert_materials: {} 条物料已写入", count);
        Ok(count)
    }

    /// 查询全部物料（按 code 升序）
    pub fn list_materials(&self) -> RepositoryResult<Vec<Material>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT code, description, registered_at
            FROM materials
            ORDER BY code ASC
            "#,
        )?;

        let materials = stmt
            .query_map([], map_material_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(materials)
    }

    /// 按 code 查询物料
    ///
    /// # 返回
    /// - Ok(Some(Material)): 找到记录
    /// - Ok(None): 未找到记录
    pub fn find_material(&self, code: &str) -> RepositoryResult<Option<Material>> {
        let conn = self.get_conn()?;
        let material = conn
            .query_row(
                "SELECT code, description, registered_at FROM materials WHERE code = ?1",
                params![code],
                map_material_row,
            )
            .optional()?;
        Ok(material)
    }

    /// 物料总数
    pub fn count_materials(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM materials", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn map_material_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Material> {
    Ok(Material {
        code: row.get(0)?,
        description: row.get(1)?,
        registered_at: row.get(2)?,
    })
}
