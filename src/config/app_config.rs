// ==========================================
// 物料盘点系统 - 应用配置
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 覆盖数据库路径的环境变量
pub const DB_PATH_ENV: &str = "INVENTORY_DB_PATH";

/// 默认公司名称（报表抬头 / 导出文件名）
pub const DEFAULT_COMPANY_NAME: &str = "Rezende Energia";

/// 默认数据库文件名
pub const DEFAULT_DB_FILE: &str = "inventario.db";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite 数据库文件路径
    pub db_path: String,

    /// 公司名称
    pub company_name: String,

    /// 界面语言（pt-BR / en）
    pub locale: String,
}

impl AppConfig {
    /// 使用指定数据库路径与默认值创建配置
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            locale: crate::i18n::DEFAULT_LOCALE.to_string(),
        }
    }

    /// 从环境读取配置（仅数据库位置可由环境变量覆盖）
    pub fn from_env() -> Self {
        Self::new(get_default_db_path())
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// 公司名称用于文件名的形式: 小写，空格替换为下划线
    pub fn company_slug(&self) -> String {
        self.company_name.trim().to_lowercase().replace(' ', "_")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// ==========================================
// 默认数据库路径
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// - 环境变量 INVENTORY_DB_PATH（非空时）
/// - 开发环境: 用户数据目录/inventory-system-dev/inventario.db
/// - 生产环境: 用户数据目录/inventory-system/inventario.db
/// - 无法获取用户数据目录时: ./inventario.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from(format!("./{}", DEFAULT_DB_FILE));

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let dir = data_dir.join("inventory-system-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("inventory-system");

        // 目录创建失败时保留当前目录下的回退路径
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join(DEFAULT_DB_FILE);
        }
    }

    path.to_string_lossy().to_string()
}
