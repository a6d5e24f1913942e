// ==========================================
// 物料盘点系统 - 盘点报表 XLSX
// ==========================================
// 工作表（名称与列名逐字固定）:
// - Itens do Inventário（3列）: 明细；无明细时只有表头
// - Informações Gerais（5列）: 公司 / 负责人 / 日期 / 不同物料数 / 数量合计
// - Resumo por Código（3列）: 按物料编码汇总，仅在有明细时生成
// ==========================================

use std::collections::BTreeMap;

use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};

use crate::domain::inventory::{InventoryInfo, InventoryItemView};
use crate::exporter::error::ExportResult;
use crate::exporter::write_headers;

pub const SHEET_ITEMS: &str = "Itens do Inventário";
pub const SHEET_GENERAL_INFO: &str = "Informações Gerais";
pub const SHEET_SUMMARY_BY_CODE: &str = "Resumo por Código";

pub const HEADERS_ITEMS: [&str; 3] = ["Código do Material", "Descrição", "Quantidade"];

pub const HEADERS_GENERAL_INFO: [&str; 5] = [
    "Empresa",
    "Responsável",
    "Data do Inventário",
    "Total de Itens Diferentes",
    "Quantidade Total",
];

pub const HEADERS_SUMMARY_BY_CODE: [&str; 3] =
    ["Código do Material", "Descrição", "Quantidade Total"];

/// 报表日期格式
const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// 盘点报表输入
#[derive(Debug, Clone)]
pub struct InventoryReport<'a> {
    pub company_name: &'a str,
    pub info: &'a InventoryInfo,
    pub items: &'a [InventoryItemView],
}

/// 按物料编码汇总后的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSummary {
    pub material_code: String,
    pub description: String,
    pub total_quantity: u64,
}

/// 按物料编码汇总（编码升序；描述取首次出现的值）
pub fn summarize_by_code(items: &[InventoryItemView]) -> Vec<CodeSummary> {
    let mut grouped: BTreeMap<&str, CodeSummary> = BTreeMap::new();
    for item in items {
        grouped
            .entry(item.material_code.as_str())
            .or_insert_with(|| CodeSummary {
                material_code: item.material_code.clone(),
                description: item.description.clone(),
                total_quantity: 0,
            })
            .total_quantity += u64::from(item.quantity);
    }
    grouped.into_values().collect()
}

/// 生成盘点报表，返回 xlsx 内容
pub fn render_inventory_workbook(report: &InventoryReport<'_>) -> ExportResult<Vec<u8>> {
    let summary = summarize_by_code(report.items);
    let total_quantity: u64 = summary.iter().map(|s| s.total_quantity).sum();

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let items_sheet = workbook.add_worksheet();
        items_sheet.set_name(SHEET_ITEMS)?;
        write_headers(items_sheet, &HEADERS_ITEMS, &header_format)?;

        let mut row: u32 = 1;
        for item in report.items {
            items_sheet.write_string(row, 0, &item.material_code)?;
            items_sheet.write_string(row, 1, &item.description)?;
            items_sheet.write_number(row, 2, f64::from(item.quantity))?;
            row += 1;
        }
    }

    {
        let info_sheet = workbook.add_worksheet();
        info_sheet.set_name(SHEET_GENERAL_INFO)?;
        write_headers(info_sheet, &HEADERS_GENERAL_INFO, &header_format)?;

        info_sheet.write_string(1, 0, report.company_name)?;
        info_sheet.write_string(1, 1, &report.info.responsible)?;
        info_sheet.write_string(1, 2, report.info.taken_at.format(DATE_FORMAT).to_string())?;
        info_sheet.write_number(1, 3, summary.len() as f64)?;
        info_sheet.write_number(1, 4, total_quantity as f64)?;
    }

    if !summary.is_empty() {
        let summary_sheet = workbook.add_worksheet();
        summary_sheet.set_name(SHEET_SUMMARY_BY_CODE)?;
        write_headers(summary_sheet, &HEADERS_SUMMARY_BY_CODE, &header_format)?;

        let mut row: u32 = 1;
        for entry in &summary {
            summary_sheet.write_string(row, 0, &entry.material_code)?;
            summary_sheet.write_string(row, 1, &entry.description)?;
            summary_sheet.write_number(row, 2, entry.total_quantity as f64)?;
            row += 1;
        }
    }

    tracing::debug!(
        "盘点报表生成: 明细 {} 行, 不同物料 {} 个, 数量合计 {}",
        report.items.len(),
        summary.len(),
        total_quantity
    );
    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, desc: &str, quantity: u32) -> InventoryItemView {
        InventoryItemView {
            material_code: code.to_string(),
            description: desc.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_summarize_by_code_merges_duplicates() {
        let items = vec![item("B2", "Fita", 5), item("A1", "Fio", 10), item("A1", "Fio", 7)];

        let summary = summarize_by_code(&items);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].material_code, "A1");
        assert_eq!(summary[0].total_quantity, 17);
        assert_eq!(summary[1].total_quantity, 5);
    }

    #[test]
    fn test_summarize_keeps_first_description() {
        let items = vec![item("A1", "Fio", 1), item("A1", "Fio novo", 1)];
        assert_eq!(summarize_by_code(&items)[0].description, "Fio");
    }
}
