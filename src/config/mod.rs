// ==========================================
// 物料盘点系统 - 配置层
// ==========================================
// 职责: 数据库位置、公司名称、界面语言
// 来源: 默认值 + 环境变量 INVENTORY_DB_PATH
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{get_default_db_path, AppConfig, DB_PATH_ENV};
