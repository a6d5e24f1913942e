// ==========================================
// 物料盘点系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化；每次调用独立打开连接，返回即释放
// ==========================================

pub mod error;
pub mod inventory_repo;
pub mod material_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use inventory_repo::InventoryRepository;
pub use material_repo::MaterialRepository;
