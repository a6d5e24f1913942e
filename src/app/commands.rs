// ==========================================
// 物料盘点系统 - 应用命令
// ==========================================
// 职责: 连接前端与 API；返回 JSON 字符串，错误转为 ErrorResponse JSON
// 说明: 与桌面壳无关，Tauri 命令只是这里的薄包装
// ==========================================

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::app::state::AppState;
use crate::exporter::ExportArtifact;
use crate::i18n::{t, t_with_args};

// ==========================================
// 公共工具：错误映射、序列化
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误类别（Validation / NotFound / Storage）
    pub kind: String,

    /// 错误消息
    pub message: String,
}

/// 成功响应（数据 + 可选提示）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub message: Option<String>,
    pub data: T,
}

/// 将ApiError转换为JSON字符串
pub fn map_api_error(err: ApiError) -> String {
    tracing::warn!("命令失败: {}", err);
    let error_response = ErrorResponse {
        code: err.code().to_string(),
        kind: format!("{:?}", err.kind()),
        message: err.to_string(),
    };
    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

fn to_json<T: Serialize>(data: T, message: Option<String>) -> Result<String, String> {
    serde_json::to_string(&CommandResponse { message, data })
        .map_err(|e| format!("序列化失败: {}", e))
}

/// 文件名必须是单个普通路径片段，不得跳出导出目录
fn is_single_component(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// 写出导出文件，返回完整路径
fn write_artifact(artifact: &ExportArtifact, output_dir: &str) -> Result<PathBuf, String> {
    if !is_single_component(&artifact.file_name) {
        return Err(map_api_error(ApiError::ExportError(format!(
            "nome de arquivo inválido: {}",
            artifact.file_name
        ))));
    }

    let path = Path::new(output_dir).join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)
        .map_err(|e| map_api_error(ApiError::ExportError(format!("{}: {}", path.display(), e))))?;
    tracing::info!("导出文件已写入: {}", path.display());
    Ok(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExportedFile {
    path: String,
    file_name: String,
    size_bytes: usize,
}

fn exported(artifact: &ExportArtifact, output_dir: &str) -> Result<String, String> {
    let path = write_artifact(artifact, output_dir)?;
    to_json(
        ExportedFile {
            path: path.to_string_lossy().to_string(),
            file_name: artifact.file_name.clone(),
            size_bytes: artifact.bytes.len(),
        },
        None,
    )
}

// ==========================================
// 物料
// ==========================================

/// 导入预览
pub fn preview_materials_import(state: &AppState, file_path: &str) -> Result<String, String> {
    let preview = state
        .material_api
        .preview_import(Path::new(file_path))
        .map_err(map_api_error)?;
    let message = t_with_args("import.materials_found", &[("count", &preview.total.to_string())]);
    to_json(preview, Some(message))
}

/// 导入物料文件
pub async fn import_materials(state: &AppState, file_path: &str) -> Result<String, String> {
    let summary = state
        .material_api
        .import_materials(Path::new(file_path))
        .await
        .map_err(map_api_error)?;
    let message = t_with_args(
        "import.materials_imported",
        &[("count", &summary.written_rows.to_string())],
    );
    to_json(summary, Some(message))
}

/// 导入前端上传的文件内容
pub async fn import_uploaded_materials(
    state: &AppState,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String, String> {
    let summary = state
        .material_api
        .import_uploaded(file_name, bytes)
        .await
        .map_err(map_api_error)?;
    let message = t_with_args(
        "import.materials_imported",
        &[("count", &summary.written_rows.to_string())],
    );
    to_json(summary, Some(message))
}

/// 全部物料
pub fn list_materials(state: &AppState) -> Result<String, String> {
    let materials = state.material_api.list_materials().map_err(map_api_error)?;
    let message = materials.is_empty().then(|| t("report.no_materials"));
    to_json(materials, message)
}

/// 导出物料清单到目录
pub fn export_materials(state: &AppState, output_dir: &str) -> Result<String, String> {
    let artifact = state
        .material_api
        .render_materials_spreadsheet()
        .map_err(map_api_error)?;
    exported(&artifact, output_dir)
}

// ==========================================
// 盘点会话
// ==========================================

/// 开始盘点
pub fn start_inventory(state: &AppState, responsible: &str) -> Result<String, String> {
    let inventory_id = state
        .with_session(|session| state.inventory_api.start_inventory(session, responsible))
        .map_err(map_api_error)?;
    let message = t_with_args("inventory.started", &[("id", &inventory_id.to_string())]);
    to_json(inventory_id, Some(message))
}

/// 录入明细
pub fn add_inventory_item(
    state: &AppState,
    material_code: &str,
    quantity: i64,
) -> Result<String, String> {
    state
        .with_session(|session| state.inventory_api.add_item(session, material_code, quantity))
        .map_err(map_api_error)?;

    // 明细已落库，剩余物料统计失败不影响本次结果
    let remaining = remaining_material_count(state);

    let mut message = t_with_args(
        "inventory.item_added",
        &[("code", material_code.trim()), ("quantity", &quantity.to_string())],
    );
    if remaining == Some(0) {
        message = format!("{} {}", message, t("inventory.all_materials_added"));
    }
    to_json(remaining, Some(message))
}

/// 当前会话剩余可选物料数（查询失败时为 None）
fn remaining_material_count(state: &AppState) -> Option<usize> {
    match state.with_session(|session| state.inventory_api.available_materials(session)) {
        Ok(materials) => Some(materials.len()),
        Err(e) => {
            tracing::warn!("剩余物料统计失败: {}", e);
            None
        }
    }
}

/// 结束盘点
pub fn finalize_inventory(state: &AppState) -> Result<String, String> {
    let inventory_id = state
        .with_session(|session| state.inventory_api.finalize(session))
        .map_err(map_api_error)?;
    to_json(inventory_id, Some(t("inventory.finalized")))
}

/// 取消盘点
pub fn cancel_inventory(state: &AppState) -> Result<String, String> {
    let inventory_id = state
        .with_session(|session| state.inventory_api.cancel(session))
        .map_err(map_api_error)?;
    to_json(inventory_id, Some(t("inventory.cancelled")))
}

/// 进行中盘点（无则 data 为 null）
pub fn get_active_inventory(state: &AppState) -> Result<String, String> {
    let view = state
        .with_session(|session| state.inventory_api.active_inventory(session))
        .map_err(map_api_error)?;
    to_json(view, None)
}

/// 当前会话可选物料
pub fn list_available_materials(state: &AppState) -> Result<String, String> {
    let materials = state
        .with_session(|session| state.inventory_api.available_materials(session))
        .map_err(map_api_error)?;
    let message = materials.is_empty().then(|| t("inventory.all_materials_added"));
    to_json(materials, message)
}

/// 导出进行中的盘点
pub fn export_active_inventory(state: &AppState, output_dir: &str) -> Result<String, String> {
    let artifact = state
        .with_session(|session| state.inventory_api.render_active_inventory_spreadsheet(session))
        .map_err(map_api_error)?;
    exported(&artifact, output_dir)
}

// ==========================================
// 报表
// ==========================================

pub fn get_inventory_items(state: &AppState, inventory_id: i64) -> Result<String, String> {
    let items = state
        .inventory_api
        .get_inventory_items(inventory_id)
        .map_err(map_api_error)?;
    to_json(items, None)
}

pub fn get_inventory_info(state: &AppState, inventory_id: i64) -> Result<String, String> {
    let info = state
        .inventory_api
        .get_inventory_info(inventory_id)
        .map_err(map_api_error)?;
    to_json(info, None)
}

pub fn list_inventories(state: &AppState) -> Result<String, String> {
    let inventories = state.inventory_api.list_inventories().map_err(map_api_error)?;
    let message = inventories.is_empty().then(|| t("report.no_inventories"));
    to_json(inventories, message)
}

pub fn export_inventory(
    state: &AppState,
    inventory_id: i64,
    output_dir: &str,
) -> Result<String, String> {
    let artifact = state
        .inventory_api
        .render_inventory_spreadsheet(inventory_id)
        .map_err(map_api_error)?;
    exported(&artifact, output_dir)
}

pub fn get_reports_overview(state: &AppState) -> Result<String, String> {
    let overview = state.dashboard_api.overview().map_err(map_api_error)?;
    to_json(overview, None)
}
