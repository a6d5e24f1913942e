// ==========================================
// 物料盘点系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (+ 可选 Tauri 桌面壳)
// 系统定位: 单用户数据录入工具（物料登记 / 盘点 / 报表）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 表格 → 物料记录
pub mod importer;

// 导出层 - 盘点数据 → 表格
pub mod exporter;

// 会话流程 - 盘点状态机
pub mod workflow;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    Inventory, InventoryInfo, InventoryItemView, InventorySummary, Material, MaterialRecord,
};

pub use repository::{InventoryRepository, MaterialRepository};

pub use workflow::InventorySession;

pub use api::{DashboardApi, InventoryApi, MaterialApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Sistema de Inventário";

// 数据库版本
pub const DB_VERSION: &str = "v1";
