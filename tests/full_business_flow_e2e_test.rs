// ==========================================
// 完整业务流程 E2E 测试
// ==========================================
// 场景: 导入物料 → 开始盘点 → 录入明细 → 结束 → 历史查询 → 导出报表
// ==========================================


use inventory_system::api::{ApiError, ErrorKind};
use inventory_system::app::AppState;
use inventory_system::config::AppConfig;
use inventory_system::exporter::{SHEET_GENERAL_INFO, SHEET_SUMMARY_BY_CODE};
use inventory_system::logging;
use tempfile::TempDir;
use test_helpers::record;

fn setup_state() -> (tempfile::NamedTempFile, AppState) {
    logging::init_test();
    let (temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let state = AppState::new(AppConfig::new(db_path)).expect("Failed to create AppState");
    (temp_file, state)
}

#[tokio::test]
async fn test_full_inventory_flow() {
    let (_tmp, state) = setup_state();
    let dir = TempDir::new().unwrap();

    // 步骤 1: 导入物料
    let path = test_helpers::write_xlsx_fixture(
        &dir,
        "materiais.xlsx",
        &["Código", "Descrição"],
        &[vec![Some("A1"), Some("Wire")], vec![Some("A2"), Some("Tape")]],
    )
    .unwrap();

    let preview = state.material_api.preview_import(&path).unwrap();
    assert_eq!(preview.total, 2);

    let summary = state.material_api.import_materials(&path).await.unwrap();
    assert_eq!(summary.written_rows, 2);

    // 步骤 2: 开始盘点并录入
    let inventory_id = state
        .with_session(|session| state.inventory_api.start_inventory(session, "Bob"))
        .unwrap();
    state
        .with_session(|session| state.inventory_api.add_item(session, "A1", 10))
        .unwrap();
    state
        .with_session(|session| state.inventory_api.add_item(session, "A2", 5))
        .unwrap();

    let remaining = state
        .with_session(|session| state.inventory_api.available_materials(session))
        .unwrap();
    assert!(remaining.is_empty());

    // 进行中导出
    let active_export = state
        .with_session(|session| state.inventory_api.render_active_inventory_spreadsheet(session))
        .unwrap();
    assert!(active_export
        .file_name
        .starts_with(&format!("inventario_{}_", inventory_id)));

    // 步骤 3: 结束
    let closed = state
        .with_session(|session| state.inventory_api.finalize(session))
        .unwrap();
    assert_eq!(closed, inventory_id);

    // 步骤 4: 查询
    let items = state.inventory_api.get_inventory_items(inventory_id).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().map(|i| i.quantity).sum::<u32>(), 15);

    let history = state.inventory_api.list_inventories().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_quantity, 15);
    assert!(history[0]
        .display_name
        .starts_with("Inventário Rezende Energia - Bob - "));

    let overview = state.dashboard_api.overview().unwrap();
    assert_eq!(overview.total_materials, 2);
    assert_eq!(overview.inventories_taken, 1);
    assert_eq!(overview.total_quantity_counted, 15);

    // 步骤 5: 导出报表
    let artifact = state
        .inventory_api
        .render_inventory_spreadsheet(inventory_id)
        .unwrap();
    assert!(artifact.file_name.starts_with("inventario_rezende_energia_Bob_"));

    let general = test_helpers::read_sheet(&artifact.bytes, SHEET_GENERAL_INFO);
    assert_eq!(general[0][4], "Quantidade Total");
    assert_eq!(general[1][4], "15");

    let by_code = test_helpers::read_sheet(&artifact.bytes, SHEET_SUMMARY_BY_CODE);
    assert_eq!(by_code.len(), 3);
}

#[test]
fn test_session_rules() {
    let (_tmp, state) = setup_state();
    state
        .material_api
        .upsert_materials(&[record("A1", "Wire")])
        .unwrap();

    // 未开始时录入
    let err = state
        .with_session(|session| state.inventory_api.add_item(session, "A1", 1))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidStateTransition { .. }));

    // 负责人为空
    let err = state
        .with_session(|session| state.inventory_api.start_inventory(session, "  "))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    state
        .with_session(|session| state.inventory_api.start_inventory(session, "Ana"))
        .unwrap();

    // 已有进行中的盘点
    let err = state
        .with_session(|session| state.inventory_api.start_inventory(session, "Ana"))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidStateTransition { .. }));

    // 负数量
    let err = state
        .with_session(|session| state.inventory_api.add_item(session, "A1", -1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // 未登记物料
    let err = state
        .with_session(|session| state.inventory_api.add_item(session, "ZZ", 1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // 同一会话重复物料
    state
        .with_session(|session| state.inventory_api.add_item(session, "A1", 0))
        .unwrap();
    let err = state
        .with_session(|session| state.inventory_api.add_item(session, "A1", 2))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // 取消后明细保留
    let cancelled = state
        .with_session(|session| state.inventory_api.cancel(session))
        .unwrap();
    let items = state.inventory_api.get_inventory_items(cancelled).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 0);

    let err = state
        .with_session(|session| state.inventory_api.finalize(session))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidStateTransition { .. }));
}

#[test]
fn test_unknown_inventory_not_found() {
    let (_tmp, state) = setup_state();

    let err = state.inventory_api.get_inventory_info(404).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = state.inventory_api.render_inventory_spreadsheet(404).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
