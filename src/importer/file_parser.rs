// ==========================================
// 物料盘点系统 - 文件解析器实现
// ==========================================
// 只读取第一个工作表；首行为表头
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// ==========================================

use crate::importer::data_cleaner::{parse_materials_sheet, ParsedMaterials};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::material_importer_trait::FileParser;
use calamine::{Data, Ods, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

// ==========================================
// SpreadsheetFormat - 文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadsheetFormat {
    Xlsx,
    Xls,
    Ods,
    Csv,
}

impl SpreadsheetFormat {
    /// 按扩展名识别（大小写不敏感）
    pub fn from_extension(ext: &str) -> ImportResult<Self> {
        match ext.to_lowercase().as_str() {
            "xlsx" | "xlsm" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            "ods" => Ok(Self::Ods),
            "csv" => Ok(Self::Csv),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// 按文件路径识别
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }
}

// ==========================================
// RawSheet - 原始表格
// ==========================================
/// 第一个工作表的原始内容
///
/// - headers: 首行（表头），缺值记为空串
/// - rows: 数据行，None 表示缺值（空单元格 / 错误单元格）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawSheet {
    /// 列数
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser {
    pub format: SpreadsheetFormat,
}

impl ExcelParser {
    pub fn new(format: SpreadsheetFormat) -> Self {
        Self { format }
    }
}

impl FileParser for ExcelParser {
    fn parse_raw_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet> {
        let cursor = Cursor::new(bytes.to_vec());
        match self.format {
            SpreadsheetFormat::Xlsx => read_first_sheet(Xlsx::new(cursor).map_err(excel_error)?),
            SpreadsheetFormat::Xls => read_first_sheet(Xls::new(cursor).map_err(excel_error)?),
            SpreadsheetFormat::Ods => read_first_sheet(Ods::new(cursor).map_err(excel_error)?),
            SpreadsheetFormat::Csv => Err(ImportError::UnsupportedFormat("csv".to_string())),
        }
    }
}

fn excel_error<E: std::fmt::Display>(err: E) -> ImportError {
    ImportError::ExcelParseError(err.to_string())
}

fn read_first_sheet<R>(mut workbook: R) -> ImportResult<RawSheet>
where
    R: Reader<Cursor<Vec<u8>>>,
    R::Error: std::fmt::Display,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::ExcelParseError("arquivo Excel sem planilhas".to_string()))?
        .map_err(excel_error)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_to_text(cell).unwrap_or_default())
            .collect(),
        None => return Ok(RawSheet::default()),
    };

    let mut data_rows = Vec::new();
    for row in rows {
        let values: Vec<Option<String>> = row.iter().map(cell_to_text).collect();

        // 跳过完全空白的行
        if values.iter().all(|v| v.is_none()) {
            continue;
        }
        data_rows.push(values);
    }

    Ok(RawSheet {
        headers,
        rows: data_rows,
    })
}

/// 单元格转文本
///
/// - 空单元格、错误单元格 → None
/// - 整数值的浮点数不带小数部分（123.0 → "123"）
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 分隔符探测: 首行含 ';' 且不含 ',' 时使用 ';'
    fn detect_delimiter(bytes: &[u8]) -> u8 {
        let first_line = bytes.split(|b| *b == b'\n').next().unwrap_or(&[]);
        if first_line.contains(&b';') && !first_line.contains(&b',') {
            b';'
        } else {
            b','
        }
    }
}

impl FileParser for CsvParser {
    fn parse_raw_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .delimiter(Self::detect_delimiter(bytes))
            .from_reader(bytes);

        let mut records = reader.records();
        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|h| h.trim().to_string()).collect(),
            None => return Ok(RawSheet::default()),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            let values: Vec<Option<String>> = record
                .iter()
                .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                .collect();

            if values.iter().all(|v| v.is_none()) {
                continue;
            }
            rows.push(values);
        }

        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据格式自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse(&self, bytes: &[u8], format: SpreadsheetFormat) -> ImportResult<RawSheet> {
        match format {
            SpreadsheetFormat::Csv => CsvParser.parse_raw_sheet(bytes),
            excel => ExcelParser::new(excel).parse_raw_sheet(bytes),
        }
    }
}

// ==========================================
// 物料表格解析入口
// ==========================================

/// 解析上传内容为物料记录
pub fn parse_materials_bytes(
    bytes: &[u8],
    format: SpreadsheetFormat,
) -> ImportResult<ParsedMaterials> {
    let sheet = UniversalFileParser.parse(bytes, format)?;
    parse_materials_sheet(&sheet)
}

/// 解析物料文件（按扩展名选择解析器）
pub fn parse_materials_file<P: AsRef<Path>>(file_path: P) -> ImportResult<ParsedMaterials> {
    let path = file_path.as_ref();

    // 检查文件存在
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let format = SpreadsheetFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    parse_materials_bytes(&bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SpreadsheetFormat::from_extension("XLSX").unwrap(), SpreadsheetFormat::Xlsx);
        assert_eq!(SpreadsheetFormat::from_extension("csv").unwrap(), SpreadsheetFormat::Csv);
        assert!(matches!(
            SpreadsheetFormat::from_extension("pdf"),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(123.0), "123");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn test_csv_parser_semicolon() {
        let content = "Código;Descrição\nA1;Fio\n;\nA2;Fita\n";
        let sheet = CsvParser.parse_raw_sheet(content.as_bytes()).unwrap();

        assert_eq!(sheet.headers, vec!["Código", "Descrição"]);
        // 完全空白的行被跳过
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][0].as_deref(), Some("A2"));
    }

    #[test]
    fn test_csv_parser_ragged_rows() {
        let content = "code,description,extra\nA1,Fio\nA2,Fita,x\n";
        let sheet = CsvParser.parse_raw_sheet(content.as_bytes()).unwrap();

        assert_eq!(sheet.width(), 3);
        assert_eq!(sheet.rows[0].len(), 2);
    }

    #[test]
    fn test_excel_parser_rejects_garbage() {
        let result = ExcelParser::new(SpreadsheetFormat::Xlsx).parse_raw_sheet(b"not a workbook");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_parse_materials_file_not_found() {
        let result = parse_materials_file("nao_existe.xlsx");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }
}
