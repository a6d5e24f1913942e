// ==========================================
// 物料盘点系统 - 盘点 API
// ==========================================
// 职责:
// 1. 会话流程（开始 / 录入 / 结束 / 取消），会话对象由调用方显式传入
// 2. 盘点查询（明细 / 表头 / 历史列表）
// 3. 盘点报表导出
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::inventory::{InventoryInfo, InventoryItemView, InventorySummary};
use crate::domain::material::Material;
use crate::exporter::{
    inventory_file_name, render_inventory_workbook, session_export_file_name, ExportArtifact,
    InventoryReport,
};
use crate::repository::{InventoryRepository, MaterialRepository};
use crate::workflow::InventorySession;

/// 历史列表中的一行（含展示名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub id: i64,
    pub responsible: String,
    pub taken_at: NaiveDateTime,
    /// dd/mm/YYYY
    pub formatted_date: String,
    /// Inventário <empresa> - <responsável> - dd/mm/YYYY
    pub display_name: String,
    pub item_count: i64,
    pub total_quantity: i64,
}

/// 进行中盘点的视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveInventoryView {
    pub inventory_id: i64,
    pub responsible: String,
    pub taken_at: NaiveDateTime,
    pub added_count: usize,
    pub items: Vec<InventoryItemView>,
}

// ==========================================
// InventoryApi - 盘点 API
// ==========================================
pub struct InventoryApi {
    inventory_repo: Arc<InventoryRepository>,
    material_repo: Arc<MaterialRepository>,
    config: Arc<AppConfig>,
}

impl InventoryApi {
    pub fn new(
        inventory_repo: Arc<InventoryRepository>,
        material_repo: Arc<MaterialRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            inventory_repo,
            material_repo,
            config,
        }
    }

    // ==========================================
    // 会话流程
    // ==========================================

    /// 开始新盘点
    pub fn start_inventory(
        &self,
        session: &mut InventorySession,
        responsible: &str,
    ) -> ApiResult<i64> {
        Ok(session.start(&self.inventory_repo, responsible)?)
    }

    /// 录入一条明细
    pub fn add_item(
        &self,
        session: &mut InventorySession,
        material_code: &str,
        quantity: i64,
    ) -> ApiResult<()> {
        Ok(session.add_item(&self.inventory_repo, material_code, quantity)?)
    }

    /// 结束盘点
    pub fn finalize(&self, session: &mut InventorySession) -> ApiResult<i64> {
        Ok(session.finalize()?)
    }

    /// 取消盘点
    pub fn cancel(&self, session: &mut InventorySession) -> ApiResult<i64> {
        Ok(session.cancel()?)
    }

    /// 当前会话可选物料
    pub fn available_materials(&self, session: &InventorySession) -> ApiResult<Vec<Material>> {
        let materials = self.material_repo.list_materials()?;
        Ok(session.available_materials(materials))
    }

    /// 进行中盘点的视图（Idle 时为 None）
    pub fn active_inventory(
        &self,
        session: &InventorySession,
    ) -> ApiResult<Option<ActiveInventoryView>> {
        let Some(inventory_id) = session.active_inventory() else {
            return Ok(None);
        };

        let info = self.get_inventory_info(inventory_id)?;
        let items = self.inventory_repo.get_inventory_items(inventory_id)?;
        Ok(Some(ActiveInventoryView {
            inventory_id,
            responsible: info.responsible,
            taken_at: info.taken_at,
            added_count: session.added_codes().len(),
            items,
        }))
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 盘点明细（按物料编码排序，重复录入不合并）
    pub fn get_inventory_items(&self, inventory_id: i64) -> ApiResult<Vec<InventoryItemView>> {
        Ok(self.inventory_repo.get_inventory_items(inventory_id)?)
    }

    /// 盘点表头
    ///
    /// # 返回
    /// - Err(NotFound): ID 不存在
    pub fn get_inventory_info(&self, inventory_id: i64) -> ApiResult<InventoryInfo> {
        self.inventory_repo
            .get_inventory_info(inventory_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Inventário(id={})", inventory_id)))
    }

    /// 历史盘点列表（按盘点时间倒序）
    pub fn list_inventories(&self) -> ApiResult<Vec<InventoryOverview>> {
        let summaries = self.inventory_repo.list_inventories()?;
        Ok(summaries
            .into_iter()
            .map(|summary| self.to_overview(summary))
            .collect())
    }

    fn to_overview(&self, summary: InventorySummary) -> InventoryOverview {
        let formatted_date = summary.taken_at.format("%d/%m/%Y").to_string();
        let display_name = format!(
            "Inventário {} - {} - {}",
            self.config.company_name, summary.responsible, formatted_date
        );
        InventoryOverview {
            id: summary.id,
            total_quantity: summary.total_quantity_or_zero(),
            responsible: summary.responsible,
            taken_at: summary.taken_at,
            formatted_date,
            display_name,
            item_count: summary.item_count,
        }
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 盘点报表（历史盘点命名）
    pub fn render_inventory_spreadsheet(&self, inventory_id: i64) -> ApiResult<ExportArtifact> {
        let (info, bytes) = self.render(inventory_id)?;
        let file_name =
            inventory_file_name(&self.config.company_slug(), &info.responsible, info.taken_at);

        info!("盘点报表导出: inventory_id={}, 文件 {}", inventory_id, file_name);
        Ok(ExportArtifact::xlsx(file_name, bytes))
    }

    /// 进行中盘点的报表（按导出时刻命名）
    pub fn render_active_inventory_spreadsheet(
        &self,
        session: &InventorySession,
    ) -> ApiResult<ExportArtifact> {
        let inventory_id = session.active_inventory().ok_or_else(|| {
            ApiError::InvalidStateTransition {
                from: "Idle".to_string(),
                to: "Export".to_string(),
            }
        })?;

        let (_, bytes) = self.render(inventory_id)?;
        let file_name = session_export_file_name(inventory_id, Local::now().naive_local());
        Ok(ExportArtifact::xlsx(file_name, bytes))
    }

    fn render(&self, inventory_id: i64) -> ApiResult<(InventoryInfo, Vec<u8>)> {
        let info = self.get_inventory_info(inventory_id)?;
        let items = self.inventory_repo.get_inventory_items(inventory_id)?;

        let bytes = render_inventory_workbook(&InventoryReport {
            company_name: &self.config.company_name,
            info: &info,
            items: &items,
        })?;
        Ok((info, bytes))
    }
}
