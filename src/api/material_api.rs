// ==========================================
// 物料盘点系统 - 物料 API
// ==========================================
// 职责: 物料表格解析 / 预览 / 导入、物料查询、物料清单导出
// ==========================================

use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::material::{Material, MaterialRecord};
use crate::exporter::{materials_file_name, render_materials_workbook, ExportArtifact};
use crate::importer::{
    parse_materials_file, ImportSummary, MaterialImporter, ParsedMaterials, SpreadsheetFormat,
};
use crate::repository::MaterialRepository;

/// 导入预览（不落库）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPreview {
    /// 有效记录总数
    pub total: usize,

    /// 因缺值丢弃的行数
    pub dropped_rows: usize,

    /// 前若干条记录
    pub preview: Vec<MaterialRecord>,
}

// ==========================================
// MaterialApi - 物料 API
// ==========================================
pub struct MaterialApi {
    material_repo: Arc<MaterialRepository>,
    importer: Arc<dyn MaterialImporter>,
    config: Arc<AppConfig>,
}

impl MaterialApi {
    pub fn new(
        material_repo: Arc<MaterialRepository>,
        importer: Arc<dyn MaterialImporter>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            material_repo,
            importer,
            config,
        }
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 解析物料表格（不落库）
    pub fn parse_materials_spreadsheet(&self, file_path: &Path) -> ApiResult<ParsedMaterials> {
        Ok(parse_materials_file(file_path)?)
    }

    /// 导入预览
    pub fn preview_import(&self, file_path: &Path) -> ApiResult<ImportPreview> {
        let parsed = self.parse_materials_spreadsheet(file_path)?;
        debug!("导入预览: {} 条有效记录", parsed.records.len());

        Ok(ImportPreview {
            total: parsed.records.len(),
            dropped_rows: parsed.dropped_rows,
            preview: parsed.preview().to_vec(),
        })
    }

    /// 导入物料文件（解析 + upsert）
    pub async fn import_materials(&self, file_path: &Path) -> ApiResult<ImportSummary> {
        Ok(self.importer.import_from_file(file_path).await?)
    }

    /// 导入上传内容，格式由文件名扩展名判断
    pub async fn import_uploaded(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<ImportSummary> {
        let format = SpreadsheetFormat::from_path(Path::new(file_name))?;
        Ok(self.importer.import_from_bytes(bytes, format).await?)
    }

    /// 直接写入已清洗的记录
    pub fn upsert_materials(&self, records: &[MaterialRecord]) -> ApiResult<usize> {
        if records.is_empty() {
            return Err(ApiError::InvalidInput("nenhum material para importar".to_string()));
        }
        Ok(self.material_repo.upsert_materials(records)?)
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 全部物料（按编码升序）
    pub fn list_materials(&self) -> ApiResult<Vec<Material>> {
        Ok(self.material_repo.list_materials()?)
    }

    pub fn count_materials(&self) -> ApiResult<i64> {
        Ok(self.material_repo.count_materials()?)
    }

    pub fn get_material(&self, code: &str) -> ApiResult<Material> {
        self.material_repo
            .find_material(code)?
            .ok_or_else(|| ApiError::NotFound(format!("Material(code={})", code)))
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 物料清单导出（单工作表）
    pub fn render_materials_spreadsheet(&self) -> ApiResult<ExportArtifact> {
        let materials = self.material_repo.list_materials()?;
        let bytes = render_materials_workbook(&materials)?;
        let file_name =
            materials_file_name(&self.config.company_slug(), Local::now().naive_local());

        info!("物料清单导出: {} 条, 文件 {}", materials.len(), file_name);
        Ok(ExportArtifact::xlsx(file_name, bytes))
    }
}
