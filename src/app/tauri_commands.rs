// ==========================================
// 物料盘点系统 - Tauri 命令
// ==========================================
// 职责: 把 commands 暴露给前端（invoke），不含业务逻辑
// ==========================================

#![cfg(feature = "tauri-app")]

use crate::app::commands;
use crate::app::state::AppState;

// ==========================================
// 物料
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub fn preview_materials_import(
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    commands::preview_materials_import(&state, &file_path)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn import_materials(
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    commands::import_materials(&state, &file_path).await
}

#[tauri::command(rename_all = "snake_case")]
pub async fn import_uploaded_materials(
    state: tauri::State<'_, AppState>,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<String, String> {
    commands::import_uploaded_materials(&state, &file_name, bytes).await
}

#[tauri::command(rename_all = "snake_case")]
pub fn list_materials(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::list_materials(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn export_materials(
    state: tauri::State<'_, AppState>,
    output_dir: String,
) -> Result<String, String> {
    commands::export_materials(&state, &output_dir)
}

// ==========================================
// 盘点会话
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub fn start_inventory(
    state: tauri::State<'_, AppState>,
    responsible: String,
) -> Result<String, String> {
    commands::start_inventory(&state, &responsible)
}

#[tauri::command(rename_all = "snake_case")]
pub fn add_inventory_item(
    state: tauri::State<'_, AppState>,
    material_code: String,
    quantity: i64,
) -> Result<String, String> {
    commands::add_inventory_item(&state, &material_code, quantity)
}

#[tauri::command(rename_all = "snake_case")]
pub fn finalize_inventory(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::finalize_inventory(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn cancel_inventory(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::cancel_inventory(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn get_active_inventory(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::get_active_inventory(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn list_available_materials(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::list_available_materials(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn export_active_inventory(
    state: tauri::State<'_, AppState>,
    output_dir: String,
) -> Result<String, String> {
    commands::export_active_inventory(&state, &output_dir)
}

// ==========================================
// 报表
// ==========================================

#[tauri::command(rename_all = "snake_case")]
pub fn get_inventory_items(
    state: tauri::State<'_, AppState>,
    inventory_id: i64,
) -> Result<String, String> {
    commands::get_inventory_items(&state, inventory_id)
}

#[tauri::command(rename_all = "snake_case")]
pub fn get_inventory_info(
    state: tauri::State<'_, AppState>,
    inventory_id: i64,
) -> Result<String, String> {
    commands::get_inventory_info(&state, inventory_id)
}

#[tauri::command(rename_all = "snake_case")]
pub fn list_inventories(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::list_inventories(&state)
}

#[tauri::command(rename_all = "snake_case")]
pub fn export_inventory(
    state: tauri::State<'_, AppState>,
    inventory_id: i64,
    output_dir: String,
) -> Result<String, String> {
    commands::export_inventory(&state, inventory_id, &output_dir)
}

#[tauri::command(rename_all = "snake_case")]
pub fn get_reports_overview(state: tauri::State<'_, AppState>) -> Result<String, String> {
    commands::get_reports_overview(&state)
}
