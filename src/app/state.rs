// ==========================================
// 物料盘点系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
//       会话状态机作为显式字段持有，由命令层按需加锁传入 API
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{ApiError, ApiResult, DashboardApi, InventoryApi, MaterialApi};
use crate::config::AppConfig;
use crate::importer::MaterialImporterImpl;
use crate::repository::{InventoryRepository, MaterialRepository};
use crate::workflow::InventorySession;

/// 应用状态
///
/// 包含所有API实例和当前用户的盘点会话
pub struct AppState {
    /// 应用配置
    pub config: Arc<AppConfig>,

    /// 物料API
    pub material_api: Arc<MaterialApi>,

    /// 盘点API
    pub inventory_api: Arc<InventoryApi>,

    /// 报表总览API
    pub dashboard_api: Arc<DashboardApi>,

    /// 盘点会话（单用户）
    session: Mutex<InventorySession>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 确保数据库与 schema 存在
    /// 2. 设置界面语言
    /// 3. 初始化所有Repository与API
    pub fn new(config: AppConfig) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", config.db_path);

        crate::db::ensure_database(&config.db_path)
            .map_err(|e| format!("无法初始化数据库: {}", e))?;
        crate::i18n::set_locale(&config.locale);

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let material_repo = Arc::new(
            MaterialRepository::new(&config.db_path)
                .map_err(|e| format!("无法创建MaterialRepository: {}", e))?,
        );
        let inventory_repo = Arc::new(
            InventoryRepository::new(&config.db_path)
                .map_err(|e| format!("无法创建InventoryRepository: {}", e))?,
        );

        // ==========================================
        // 初始化API层
        // ==========================================
        let config = Arc::new(config);
        let importer = Arc::new(MaterialImporterImpl::new(material_repo.clone()));

        let material_api = Arc::new(MaterialApi::new(
            material_repo.clone(),
            importer,
            config.clone(),
        ));
        let inventory_api = Arc::new(InventoryApi::new(
            inventory_repo.clone(),
            material_repo.clone(),
            config.clone(),
        ));
        let dashboard_api = Arc::new(DashboardApi::new(material_repo, inventory_repo));

        let session = InventorySession::new();
        tracing::info!("AppState初始化完成, session_id={}", session.session_id());

        Ok(Self {
            config,
            material_api,
            inventory_api,
            dashboard_api,
            session: Mutex::new(session),
        })
    }

    /// 获取数据库路径
    pub fn get_db_path(&self) -> &str {
        &self.config.db_path
    }

    /// 在持有会话锁的情况下执行操作
    pub fn with_session<T>(
        &self,
        f: impl FnOnce(&mut InventorySession) -> ApiResult<T>,
    ) -> ApiResult<T> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| ApiError::InternalError(format!("会话锁获取失败: {}", e)))?;
        f(&mut session)
    }
}
