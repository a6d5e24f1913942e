// ==========================================
// 物料盘点系统 - 会话流程错误类型
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Transição de estado inválida: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Falha de validação: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 类型别名
pub type WorkflowResult<T> = Result<T, WorkflowError>;
