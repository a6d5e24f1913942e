// ==========================================
// 物料盘点系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与读模型
// 红线: 不含数据访问逻辑
// ==========================================

pub mod inventory;
pub mod material;

// 重导出核心类型
pub use inventory::{Inventory, InventoryInfo, InventoryItemView, InventorySummary};
pub use material::{Material, MaterialRecord};
