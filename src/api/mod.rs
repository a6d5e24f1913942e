// ==========================================
// 物料盘点系统 - API 层
// ==========================================
// 职责: 业务接口，供应用层（桌面命令 / 测试）调用
// 错误: 统一转换为 ApiError
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod inventory_api;
pub mod material_api;

pub use dashboard_api::{DashboardApi, ReportsOverview};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use inventory_api::{ActiveInventoryView, InventoryApi, InventoryOverview};
pub use material_api::{ImportPreview, MaterialApi};
