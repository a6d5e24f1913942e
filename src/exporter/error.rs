// ==========================================
// 物料盘点系统 - 导出模块错误类型
// ==========================================

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Erro ao gerar Excel: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
