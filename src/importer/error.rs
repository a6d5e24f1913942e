// ==========================================
// 物料盘点系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (use .xlsx/.xls/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("Falha ao ler o arquivo: {0}")]
    FileReadError(String),

    #[error("Erro ao processar arquivo Excel: {0}")]
    ExcelParseError(String),

    #[error("Erro ao processar arquivo CSV: {0}")]
    CsvParseError(String),

    // ===== 列结构错误 =====
    #[error("O arquivo deve ter pelo menos 2 colunas: código e descrição (encontradas: {found})")]
    InsufficientColumns { found: usize },

    // ===== 数据库错误 =====
    #[error("Erro ao inserir materiais: {0}")]
    DatabaseError(String),

    // ===== 通用错误 =====
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<RepositoryError>
impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        ImportError::DatabaseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
