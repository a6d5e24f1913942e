// ==========================================
// 物料盘点系统 - 物料清单 XLSX
// ==========================================

use rust_xlsxwriter::{Format, Workbook};

use crate::domain::material::Material;
use crate::exporter::error::ExportResult;
use crate::exporter::write_headers;

pub const SHEET_MATERIALS: &str = "Materiais Cadastrados";

pub const HEADERS_MATERIALS: [&str; 3] = ["Código", "Descrição", "Data de Cadastro"];

/// 生成物料清单（单工作表），返回 xlsx 内容
pub fn render_materials_workbook(materials: &[Material]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_MATERIALS)?;
    write_headers(sheet, &HEADERS_MATERIALS, &header_format)?;

    let mut row: u32 = 1;
    for material in materials {
        sheet.write_string(row, 0, &material.code)?;
        sheet.write_string(row, 1, &material.description)?;
        sheet.write_string(row, 2, material.registered_at.format("%d/%m/%Y %H:%M").to_string())?;
        row += 1;
    }

    Ok(workbook.save_to_buffer()?)
}
