// ==========================================
// 物料盘点系统 - 应用层
// ==========================================
// 职责: 共享状态与命令，连接前端与后端
// ==========================================

pub mod commands;
pub mod state;
pub mod tauri_commands;

// 重导出
pub use state::AppState;
