// ==========================================
// 物料盘点系统 - 导入层
// ==========================================
// 职责: 上传表格 → 物料记录 → 落库
// 支持: Excel (.xlsx/.xlsm/.xls/.ods), CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod material_importer_impl;
pub mod material_importer_trait;

// 重导出核心类型
pub use data_cleaner::{parse_materials_sheet, ParsedMaterials, PREVIEW_LIMIT};
pub use error::{ImportError, ImportResult};
pub use file_parser::{
    parse_materials_bytes, parse_materials_file, CsvParser, ExcelParser, RawSheet,
    SpreadsheetFormat, UniversalFileParser,
};
pub use material_importer_impl::{ImportSummary, MaterialImporterImpl};

// 重导出 Trait 接口
pub use material_importer_trait::{FileParser, MaterialImporter};
