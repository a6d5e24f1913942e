// ==========================================
// 物料盘点系统 - 盘点数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 表: inventories（表头）/ inventory_items（明细）
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::inventory::{Inventory, InventoryInfo, InventoryItemView, InventorySummary};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

// ==========================================
// InventoryRepository - 盘点仓储
// ==========================================
/// 盘点仓储
/// 职责: 盘点表头的创建与查询、明细追加、历史汇总
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db_path: String,
}

impl InventoryRepository {
    /// 创建新的 InventoryRepository 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        open_sqlite_connection(db_path)?;
        Ok(Self {
            db_path: db_path.to_string(),
        })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<Connection> {
        Ok(open_sqlite_connection(&self.db_path)?)
    }

    // ==========================================
    // 表头
    // ==========================================

    /// 创建盘点单，taken_at 取当前本地时间
    ///
    /// # 返回
    /// - Ok(i64): 新盘点单 ID（自增，单调递增）
    /// - Err(ValidationError): responsible 为空
    pub fn create_inventory(&self, responsible: &str) -> RepositoryResult<i64> {
        self.create_inventory_at(responsible, Local::now().naive_local())
    }

    /// 以指定时间创建盘点单
    pub fn create_inventory_at(
        &self,
        responsible: &str,
        taken_at: NaiveDateTime,
    ) -> RepositoryResult<i64> {
        if responsible.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "responsável não pode ser vazio".to_string(),
            ));
        }

        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO inventories (responsible, taken_at) VALUES (?1, ?2)",
            params![responsible, taken_at],
        )?;
        let id = conn.last_insert_rowid();

        debug!("create_inventory: id={}, responsible={}", id, responsible);
        Ok(id)
    }

    /// 按 ID 查询盘点单
    pub fn find_inventory(&self, inventory_id: i64) -> RepositoryResult<Option<Inventory>> {
        let conn = self.get_conn()?;
        let inventory = conn
            .query_row(
                "SELECT id, responsible, taken_at FROM inventories WHERE id = ?1",
                params![inventory_id],
                |row| {
                    Ok(Inventory {
                        id: row.get(0)?,
                        responsible: row.get(1)?,
                        taken_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(inventory)
    }

    /// 查询盘点表头信息（负责人 + 时间）
    ///
    /// # 返回
    /// - Ok(None): ID 不存在
    pub fn get_inventory_info(&self, inventory_id: i64) -> RepositoryResult<Option<InventoryInfo>> {
        Ok(self.find_inventory(inventory_id)?.map(InventoryInfo::from))
    }

    /// 盘点单总数
    pub fn count_inventories(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM inventories", [], |row| row.get(0))?;
        Ok(count)
    }

    // ==========================================
    // 明细
    // ==========================================

    /// 追加一条盘点明细
    ///
    /// 不做去重：同一物料多次追加产生多行。
    /// 盘点单或物料不存在时由外键约束拒绝。
    pub fn add_inventory_item(
        &self,
        inventory_id: i64,
        material_code: &str,
        quantity: u32,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO inventory_items (inventory_id, material_code, quantity)
            VALUES (?1, ?2, ?3)
            "#,
            params![inventory_id, material_code, quantity],
        )?;
        let id = conn.last_insert_rowid();

        debug!(
            "add_inventory_item: inventory_id={}, material_code={}, quantity={}",
            inventory_id, material_code, quantity
        );
        Ok(id)
    }

    /// 查询盘点明细（关联物料描述，按物料编码排序）
    pub fn get_inventory_items(
        &self,
        inventory_id: i64,
    ) -> RepositoryResult<Vec<InventoryItemView>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                ii.material_code,
                m.description,
                ii.quantity
            FROM inventory_items ii
            JOIN materials m ON ii.material_code = m.code
            WHERE ii.inventory_id = ?1
            ORDER BY ii.material_code ASC, ii.id ASC
            "#,
        )?;

        let items = stmt
            .query_map(params![inventory_id], |row| {
                Ok(InventoryItemView {
                    material_code: row.get(0)?,
                    description: row.get(1)?,
                    quantity: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    // ==========================================
    // 汇总
    // ==========================================

    /// 查询全部盘点单及明细汇总（按盘点时间倒序）
    ///
    /// LEFT JOIN：没有明细的盘点单 item_count=0、total_quantity=NULL
    pub fn list_inventories(&self) -> RepositoryResult<Vec<InventorySummary>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                i.id,
                i.responsible,
                i.taken_at,
                COUNT(ii.id) AS item_count,
                SUM(ii.quantity) AS total_quantity
            FROM inventories i
            LEFT JOIN inventory_items ii ON i.id = ii.inventory_id
            GROUP BY i.id, i.responsible, i.taken_at
            ORDER BY i.taken_at DESC, i.id DESC
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(InventorySummary {
                    id: row.get(0)?,
                    responsible: row.get(1)?,
                    taken_at: row.get(2)?,
                    item_count: row.get(3)?,
                    total_quantity: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(summaries)
    }

    /// 所有盘点单的数量合计
    pub fn total_counted_quantity(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let total: Option<i64> =
            conn.query_row("SELECT SUM(quantity) FROM inventory_items", [], |row| row.get(0))?;
        Ok(total.unwrap_or(0))
    }
}
