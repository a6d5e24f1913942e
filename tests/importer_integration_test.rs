// ==========================================
// Importer 集成测试
// ==========================================
// 测试目标: xlsx / csv 解析 → 清洗 → upsert 的完整导入流程
// ==========================================


use std::sync::Arc;

use inventory_system::importer::{
    parse_materials_file, ImportError, MaterialImporter, MaterialImporterImpl, SpreadsheetFormat,
};
use inventory_system::logging;
use inventory_system::repository::MaterialRepository;
use tempfile::TempDir;

// ==========================================
// 解析
// ==========================================

#[test]
fn test_xlsx_drops_rows_with_missing_values() {
    logging::init_test();
    let dir = TempDir::new().unwrap();

    let rows = vec![
        vec![Some("A1"), Some("Wire"), Some("ignored")],
        vec![Some("A2"), Some("Tape"), None],
        vec![Some("A3"), None, Some("x")],
        vec![Some("A4"), Some("  Bolt  "), None],
        vec![Some("A5"), Some("Nut"), None],
    ];
    let path = test_helpers::write_xlsx_fixture(
        &dir,
        "materiais.xlsx",
        &["Código", "Descrição", "Obs"],
        &rows,
    )
    .unwrap();

    let parsed = parse_materials_file(&path).unwrap();
    assert_eq!(parsed.records.len(), 4);
    assert_eq!(parsed.dropped_rows, 1);

    let codes: Vec<&str> = parsed.records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "A2", "A4", "A5"]);
    assert_eq!(parsed.records[2].description, "Bolt");
}

#[test]
fn test_single_column_file_rejected() {
    let dir = TempDir::new().unwrap();
    let rows = vec![vec![Some("A1")], vec![Some("A2")]];
    let path = test_helpers::write_xlsx_fixture(&dir, "uma_coluna.xlsx", &["Código"], &rows)
        .unwrap();

    let result = parse_materials_file(&path);
    assert!(matches!(result, Err(ImportError::InsufficientColumns { found: 1 })));
}

#[test]
fn test_corrupt_xlsx_reported_as_parse_error() {
    let dir = TempDir::new().unwrap();
    let path =
        test_helpers::write_text_fixture(&dir, "quebrado.xlsx", "not a zip archive").unwrap();

    let result = parse_materials_file(&path);
    assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
}

#[test]
fn test_missing_file_reported() {
    let result = parse_materials_file("/nonexistent/materiais.xlsx");
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_csv_with_semicolon_delimiter() {
    let dir = TempDir::new().unwrap();
    let content = "Código;Descrição\nA1;Wire\nA2;\n;Orphan\nA3;Tape\n";
    let path = test_helpers::write_text_fixture(&dir, "materiais.csv", content).unwrap();

    let parsed = parse_materials_file(&path).unwrap();
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.dropped_rows, 2);
    assert_eq!(parsed.records[1].code, "A3");
}

#[test]
fn test_preview_is_limited_to_ten_records() {
    let dir = TempDir::new().unwrap();
    let codes: Vec<String> = (1..=15).map(|i| format!("M{:02}", i)).collect();
    let rows: Vec<Vec<Option<&str>>> = codes
        .iter()
        .map(|c| vec![Some(c.as_str()), Some("Item")])
        .collect();
    let path = test_helpers::write_xlsx_fixture(&dir, "muitos.xlsx", &["c", "d"], &rows).unwrap();

    let parsed = parse_materials_file(&path).unwrap();
    assert_eq!(parsed.records.len(), 15);
    assert_eq!(parsed.preview().len(), 10);
    assert_eq!(parsed.preview()[0].code, "M01");
}

// ==========================================
// 导入落库
// ==========================================

#[tokio::test]
async fn test_import_from_file_upserts_materials() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = Arc::new(MaterialRepository::new(&db_path).unwrap());
    let importer = MaterialImporterImpl::new(repo.clone());
    let dir = TempDir::new().unwrap();

    let first = test_helpers::write_xlsx_fixture(
        &dir,
        "v1.xlsx",
        &["Código", "Descrição"],
        &[vec![Some("A1"), Some("Wire")], vec![Some("A2"), Some("Tape")]],
    )
    .unwrap();
    let summary = importer.import_from_file(&first).await.unwrap();
    assert_eq!(summary.parsed_rows, 2);
    assert_eq!(summary.written_rows, 2);

    // 二次导入: 覆盖 A1，新增 A3
    let second = test_helpers::write_xlsx_fixture(
        &dir,
        "v2.xlsx",
        &["Código", "Descrição"],
        &[vec![Some("A1"), Some("Cable")], vec![Some("A3"), Some("Bolt")]],
    )
    .unwrap();
    importer.import_from_file(&second).await.unwrap();

    assert_eq!(repo.count_materials().unwrap(), 3);
    assert_eq!(repo.find_material("A1").unwrap().unwrap().description, "Cable");
}

#[tokio::test]
async fn test_failed_import_leaves_materials_untouched() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let repo = Arc::new(MaterialRepository::new(&db_path).unwrap());
    let importer = MaterialImporterImpl::new(repo.clone());

    let result = importer
        .import_from_bytes(b"garbage".to_vec(), SpreadsheetFormat::Xlsx)
        .await;
    assert!(result.is_err());
    assert_eq!(repo.count_materials().unwrap(), 0);
}
