// ==========================================
// 物料盘点系统 - 物料导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::file_parser::{RawSheet, SpreadsheetFormat};
use crate::importer::material_importer_impl::ImportSummary;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// MaterialImporter Trait
// ==========================================
// 用途: 物料导入主接口
// 实现者: MaterialImporterImpl
#[async_trait]
pub trait MaterialImporter: Send + Sync {
    /// 从文件导入物料（按扩展名选择解析器）
    ///
    /// # 导入流程
    /// 1. 读取第一个工作表
    /// 2. 取前两列（code / description），丢弃缺值行，TRIM
    /// 3. 批量 upsert
    async fn import_from_file(&self, file_path: &Path) -> ImportResult<ImportSummary>;

    /// 从内存中的上传内容导入物料
    async fn import_from_bytes(
        &self,
        bytes: Vec<u8>,
        format: SpreadsheetFormat,
    ) -> ImportResult<ImportSummary>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（读取第一个工作表）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件内容为原始表格（首行为表头）
    fn parse_raw_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet>;
}
