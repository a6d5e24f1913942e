// ==========================================
// 物料盘点系统 - 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 未启用 tauri-app 时以命令行方式打印报表总览
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(
    all(not(debug_assertions), feature = "tauri-app"),
    windows_subsystem = "windows"
)]

use inventory_system::app::AppState;
use inventory_system::config::AppConfig;

#[cfg(feature = "tauri-app")]
fn main() {
    use inventory_system::app::tauri_commands::*;

    // 初始化日志系统
    inventory_system::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - v{}", inventory_system::APP_NAME, inventory_system::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!("使用数据库: {}", config.db_path);

    let app_state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("无法初始化AppState: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("AppState初始化成功，启动Tauri应用...");

    let result = tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 物料
            // ==========================================
            preview_materials_import,
            import_materials,
            import_uploaded_materials,
            list_materials,
            export_materials,

            // ==========================================
            // 盘点会话
            // ==========================================
            start_inventory,
            add_inventory_item,
            finalize_inventory,
            cancel_inventory,
            get_active_inventory,
            list_available_materials,
            export_active_inventory,

            // ==========================================
            // 报表
            // ==========================================
            get_inventory_items,
            get_inventory_info,
            list_inventories,
            export_inventory,
            get_reports_overview,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("启动Tauri应用失败: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() -> anyhow::Result<()> {
    inventory_system::logging::init();

    let config = AppConfig::from_env();
    let state = AppState::new(config).map_err(anyhow::Error::msg)?;
    let overview = state.dashboard_api.overview()?;

    println!("==================================================");
    println!("{} - v{}", inventory_system::APP_NAME, inventory_system::VERSION);
    println!("==================================================");
    println!("Banco de dados: {}", state.get_db_path());
    println!("Materiais cadastrados: {}", overview.total_materials);
    println!("Inventários realizados: {}", overview.inventories_taken);
    println!("Quantidade total contada: {}", overview.total_quantity_counted);
    println!();
    println!("Interface gráfica: cargo run --features tauri-app");
    Ok(())
}
