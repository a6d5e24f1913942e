// ==========================================
// 物料盘点系统 - 盘点领域模型
// ==========================================
// 对齐: inventories / inventory_items 表
// 说明: “已关闭”仅是会话层概念，不落库
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Inventory - 盘点单（表头）
// ==========================================
// 创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,                  // 自增主键
    pub responsible: String,      // 负责人
    pub taken_at: NaiveDateTime,  // 盘点时间（创建时刻）
}

// ==========================================
// InventoryItemView - 盘点明细
// ==========================================
// 同一 (inventory_id, material_code) 允许多行，不做合并
/// 盘点明细读模型（关联物料描述）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemView {
    pub material_code: String,
    pub description: String,
    pub quantity: u32,
}

/// 盘点表头信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryInfo {
    pub responsible: String,
    pub taken_at: NaiveDateTime,
}

impl From<Inventory> for InventoryInfo {
    fn from(inventory: Inventory) -> Self {
        Self {
            responsible: inventory.responsible,
            taken_at: inventory.taken_at,
        }
    }
}

/// 盘点汇总（历史列表）
///
/// 没有明细的盘点也会出现：item_count = 0，total_quantity = None
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub id: i64,
    pub responsible: String,
    pub taken_at: NaiveDateTime,
    pub item_count: i64,
    pub total_quantity: Option<i64>,
}

impl InventorySummary {
    /// 数量合计（无明细时为 0）
    pub fn total_quantity_or_zero(&self) -> i64 {
        self.total_quantity.unwrap_or(0)
    }
}
