// ==========================================
// 物料盘点系统 - 物料表格清洗
// ==========================================
// 规则:
// - 至少 2 列，只取前两列（不看表头名称）: 第一列 code，第二列 description
// - 任一列缺值的行丢弃
// - 两列均转文本并 TRIM；TRIM 后为空视为缺值
// ==========================================

use crate::domain::material::MaterialRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawSheet;
use serde::{Deserialize, Serialize};

/// 预览返回的最大记录数
pub const PREVIEW_LIMIT: usize = 10;

/// 清洗结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMaterials {
    /// 有效记录（保持文件中的顺序）
    pub records: Vec<MaterialRecord>,

    /// 因缺值被丢弃的行数
    pub dropped_rows: usize,
}

impl ParsedMaterials {
    /// 前 PREVIEW_LIMIT 条记录
    pub fn preview(&self) -> &[MaterialRecord] {
        let end = self.records.len().min(PREVIEW_LIMIT);
        &self.records[..end]
    }
}

/// 将原始表格清洗为物料记录
///
/// # 返回
/// - Err(InsufficientColumns): 列数少于 2
pub fn parse_materials_sheet(sheet: &RawSheet) -> ImportResult<ParsedMaterials> {
    let width = sheet.width();
    if width < 2 {
        return Err(ImportError::InsufficientColumns { found: width });
    }

    let mut parsed = ParsedMaterials::default();
    for row in &sheet.rows {
        let code = row.first().cloned().flatten();
        let description = row.get(1).cloned().flatten();

        let record = match (code, description) {
            (Some(code), Some(description)) => MaterialRecord::from_raw(&code, &description),
            _ => None,
        };

        match record {
            Some(record) => parsed.records.push(record),
            None => parsed.dropped_rows += 1,
        }
    }

    tracing::debug!(
        "物料表格清洗完成: 有效 {} 行, 丢弃 {} 行",
        parsed.records.len(),
        parsed.dropped_rows
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_takes_first_two_columns_only() {
        let sheet = RawSheet {
            headers: vec!["Item".into(), "Texto".into(), "Obs".into()],
            rows: vec![
                vec![cell(" A1 "), cell(" Fio "), cell("ignorar")],
                vec![cell("A2"), None, cell("x")],
                vec![cell("A3"), cell("Fita"), None],
            ],
        };

        let parsed = parse_materials_sheet(&sheet).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.dropped_rows, 1);
        assert_eq!(parsed.records[0], MaterialRecord::from_raw("A1", "Fio").unwrap());
        assert_eq!(parsed.records[1].code, "A3");
    }

    #[test]
    fn test_single_column_rejected() {
        let sheet = RawSheet {
            headers: vec!["codigo".into()],
            rows: vec![vec![cell("A1")]],
        };

        let result = parse_materials_sheet(&sheet);
        assert!(matches!(result, Err(ImportError::InsufficientColumns { found: 1 })));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let sheet = RawSheet {
            headers: vec!["c".into(), "d".into()],
            rows: vec![vec![cell("A1"), cell("   ")], vec![cell("A2"), cell("Fita")]],
        };

        let parsed = parse_materials_sheet(&sheet).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.dropped_rows, 1);
    }

    #[test]
    fn test_preview_is_capped() {
        let rows = (0..25)
            .map(|i| vec![cell(&format!("M{:02}", i)), cell("desc")])
            .collect();
        let sheet = RawSheet {
            headers: vec!["c".into(), "d".into()],
            rows,
        };

        let parsed = parse_materials_sheet(&sheet).unwrap();
        assert_eq!(parsed.records.len(), 25);
        assert_eq!(parsed.preview().len(), PREVIEW_LIMIT);
        assert_eq!(parsed.preview()[0].code, "M00");
    }
}
