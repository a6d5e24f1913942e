// ==========================================
// 物料盘点系统 - 会话流程层
// ==========================================
// 职责: 每个用户会话一个盘点状态机（Idle ⇄ Active）
// 约束: 状态对象显式传入调用方，不使用全局可变状态
// ==========================================

pub mod error;
pub mod session;

pub use error::{WorkflowError, WorkflowResult};
pub use session::{InventorySession, SessionState};
