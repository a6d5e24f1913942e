// ==========================================
// 物料盘点系统 - 导出层
// ==========================================
// 职责: 盘点 / 物料数据 → 多工作表 xlsx（内存中生成）
// 工具: rust_xlsxwriter
// ==========================================

pub mod error;
pub mod file_name;
pub mod inventory_workbook;
pub mod materials_workbook;

pub use error::{ExportError, ExportResult};
pub use file_name::{
    file_name_component, inventory_file_name, materials_file_name, session_export_file_name,
};
pub use inventory_workbook::{
    render_inventory_workbook, summarize_by_code, CodeSummary, InventoryReport,
    HEADERS_GENERAL_INFO, HEADERS_ITEMS, HEADERS_SUMMARY_BY_CODE, SHEET_GENERAL_INFO,
    SHEET_ITEMS, SHEET_SUMMARY_BY_CODE,
};
pub use materials_workbook::{render_materials_workbook, HEADERS_MATERIALS, SHEET_MATERIALS};

use serde::{Deserialize, Serialize};

/// xlsx MIME 类型
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 导出产物（文件名 + 内容）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn xlsx(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            mime: XLSX_MIME.to_string(),
            bytes,
        }
    }
}

/// 表头写入（加粗）
pub(crate) fn write_headers(
    sheet: &mut rust_xlsxwriter::Worksheet,
    headers: &[&str],
    format: &rust_xlsxwriter::Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
        sheet.set_column_width(col as u16, header_width(header))?;
    }
    Ok(())
}

fn header_width(header: &str) -> f64 {
    (header.chars().count() as f64 + 4.0).max(12.0)
}
