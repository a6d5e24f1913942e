// ==========================================
// 物料盘点系统 - API层错误类型
// ==========================================
// 职责: 将各层技术错误收敛为用户可见的三类错误
//       （校验 / 未找到 / 存储失败），均不致命，流程保持原状态
// ==========================================

use crate::exporter::error::ExportError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use crate::workflow::error::WorkflowError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 校验错误
    // ==========================================
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Falha de validação: {0}")]
    ValidationError(String),

    #[error("Erro ao processar arquivo: {0}")]
    ImportError(String),

    #[error("Operação não permitida no estado atual: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 未找到
    // ==========================================
    #[error("Registro não encontrado: {0}")]
    NotFound(String),

    // ==========================================
    // 存储 / 导出失败
    // ==========================================
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(String),

    #[error("Falha ao conectar ao banco de dados: {0}")]
    DatabaseConnectionError(String),

    #[error("Falha na transação: {0}")]
    DatabaseTransactionError(String),

    #[error("Erro ao gerar arquivo: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 用户可见的错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidInput(_)
            | ApiError::ValidationError(_)
            | ApiError::ImportError(_)
            | ApiError::InvalidStateTransition { .. } => ErrorKind::Validation,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::DatabaseError(_)
            | ApiError::DatabaseConnectionError(_)
            | ApiError::DatabaseTransactionError(_)
            | ApiError::ExportError(_)
            | ApiError::InternalError(_)
            | ApiError::Other(_) => ErrorKind::Storage,
        }
    }

    /// 稳定的错误代码（返回给前端）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::DatabaseTransactionError(_) => "DATABASE_TRANSACTION_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::ValidationError(format!("registro duplicado: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => ApiError::ValidationError(format!(
                "material ou inventário inexistente: {}",
                msg
            )),
            RepositoryError::CheckConstraintViolation(msg) => {
                ApiError::ValidationError(format!("valor fora do permitido: {}", msg))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(err) => ApiError::Other(err),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::InvalidStateTransition { from, to } => {
                ApiError::InvalidStateTransition { from, to }
            }
            WorkflowError::Validation(msg) => ApiError::ValidationError(msg),
            WorkflowError::Repository(err) => err.into(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
