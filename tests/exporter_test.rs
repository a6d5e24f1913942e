// ==========================================
// Exporter 测试
// ==========================================
// 测试目标: 生成的 xlsx 用 calamine 读回后，工作表与数值符合报表格式
// ==========================================


use chrono::NaiveDate;
use inventory_system::domain::inventory::{InventoryInfo, InventoryItemView};
use inventory_system::domain::material::Material;
use inventory_system::exporter::{
    render_inventory_workbook, render_materials_workbook, InventoryReport, SHEET_GENERAL_INFO,
    SHEET_ITEMS, SHEET_MATERIALS, SHEET_SUMMARY_BY_CODE,
};

fn info() -> InventoryInfo {
    InventoryInfo {
        responsible: "Bob".to_string(),
        taken_at: NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap(),
    }
}

fn item(code: &str, desc: &str, quantity: u32) -> InventoryItemView {
    InventoryItemView {
        material_code: code.to_string(),
        description: desc.to_string(),
        quantity,
    }
}

#[test]
fn test_empty_inventory_workbook() {
    let info = info();
    let bytes = render_inventory_workbook(&InventoryReport {
        company_name: "Rezende Energia",
        info: &info,
        items: &[],
    })
    .unwrap();

    let sheets = test_helpers::sheet_names(&bytes);
    assert_eq!(sheets, vec![SHEET_ITEMS, SHEET_GENERAL_INFO]);
    assert!(!sheets.iter().any(|s| s == SHEET_SUMMARY_BY_CODE));

    let items = test_helpers::read_sheet(&bytes, SHEET_ITEMS);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], vec!["Código do Material", "Descrição", "Quantidade"]);

    let general = test_helpers::read_sheet(&bytes, SHEET_GENERAL_INFO);
    assert_eq!(general[0][3], "Total de Itens Diferentes");
    assert_eq!(
        general[1],
        vec!["Rezende Energia", "Bob", "16/10/2026 14:30", "0", "0"]
    );
}

#[test]
fn test_inventory_workbook_aggregates_by_code() {
    let info = info();
    let items = vec![
        item("A1", "Wire", 4),
        item("A1", "Wire", 6),
        item("B2", "Tape", 5),
    ];
    let bytes = render_inventory_workbook(&InventoryReport {
        company_name: "Rezende Energia",
        info: &info,
        items: &items,
    })
    .unwrap();

    assert_eq!(
        test_helpers::sheet_names(&bytes),
        vec![SHEET_ITEMS, SHEET_GENERAL_INFO, SHEET_SUMMARY_BY_CODE]
    );

    // 明细不合并
    let detail = test_helpers::read_sheet(&bytes, SHEET_ITEMS);
    assert_eq!(detail.len(), 4);

    let general = test_helpers::read_sheet(&bytes, SHEET_GENERAL_INFO);
    assert_eq!(general[1][3], "2");
    assert_eq!(general[1][4], "15");

    let summary = test_helpers::read_sheet(&bytes, SHEET_SUMMARY_BY_CODE);
    assert_eq!(summary[0], vec!["Código do Material", "Descrição", "Quantidade Total"]);
    assert_eq!(summary[1], vec!["A1", "Wire", "10"]);
    assert_eq!(summary[2], vec!["B2", "Tape", "5"]);
}

#[test]
fn test_materials_workbook() {
    let registered_at = NaiveDate::from_ymd_opt(2026, 10, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let materials = vec![
        Material {
            code: "A1".to_string(),
            description: "Wire".to_string(),
            registered_at,
        },
        Material {
            code: "A2".to_string(),
            description: "Tape".to_string(),
            registered_at,
        },
    ];

    let bytes = render_materials_workbook(&materials).unwrap();
    assert_eq!(test_helpers::sheet_names(&bytes), vec![SHEET_MATERIALS]);

    let rows = test_helpers::read_sheet(&bytes, SHEET_MATERIALS);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Código", "Descrição", "Data de Cadastro"]);
    assert_eq!(rows[1][0], "A1");
    assert_eq!(rows[2][1], "Tape");
}
