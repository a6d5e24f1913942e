// ==========================================
// 物料盘点系统 - 报表总览 API
// ==========================================
// 职责: 报表页的汇总指标
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::repository::{InventoryRepository, MaterialRepository};

/// 报表总览
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsOverview {
    /// 已登记物料数
    pub total_materials: i64,

    /// 已进行的盘点数
    pub inventories_taken: i64,

    /// 全部盘点的数量合计
    pub total_quantity_counted: i64,
}

pub struct DashboardApi {
    material_repo: Arc<MaterialRepository>,
    inventory_repo: Arc<InventoryRepository>,
}

impl DashboardApi {
    pub fn new(
        material_repo: Arc<MaterialRepository>,
        inventory_repo: Arc<InventoryRepository>,
    ) -> Self {
        Self {
            material_repo,
            inventory_repo,
        }
    }

    pub fn overview(&self) -> ApiResult<ReportsOverview> {
        Ok(ReportsOverview {
            total_materials: self.material_repo.count_materials()?,
            inventories_taken: self.inventory_repo.count_inventories()?,
            total_quantity_counted: self.inventory_repo.total_counted_quantity()?,
        })
    }
}
