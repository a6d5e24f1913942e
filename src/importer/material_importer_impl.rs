// ==========================================
// 物料盘点系统 - 物料导入器实现
// ==========================================
// 流程: 解析（阻塞 IO，放到 blocking 线程）→ 清洗 → 批量 upsert
// ==========================================

use crate::importer::data_cleaner::ParsedMaterials;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{parse_materials_bytes, parse_materials_file, SpreadsheetFormat};
use crate::importer::material_importer_trait::MaterialImporter;
use crate::repository::MaterialRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// 导入结果汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// 有效记录数
    pub parsed_rows: usize,

    /// 因缺值丢弃的行数
    pub dropped_rows: usize,

    /// 写入（新增或覆盖）的记录数
    pub written_rows: usize,

    /// 耗时（毫秒）
    pub elapsed_ms: u64,
}

// ==========================================
// MaterialImporterImpl
// ==========================================
pub struct MaterialImporterImpl {
    material_repo: Arc<MaterialRepository>,
}

impl MaterialImporterImpl {
    pub fn new(material_repo: Arc<MaterialRepository>) -> Self {
        Self { material_repo }
    }

    /// 在 blocking 线程中执行解析 + 落库
    async fn run_blocking<F>(&self, parse: F) -> ImportResult<ImportSummary>
    where
        F: FnOnce() -> ImportResult<ParsedMaterials> + Send + 'static,
    {
        let repo = self.material_repo.clone();
        let started = Instant::now();

        let (parsed, written) = tokio::task::spawn_blocking(move || {
            let parsed = parse()?;
            let written = repo.upsert_materials(&parsed.records)?;
            Ok::<_, ImportError>((parsed, written))
        })
        .await
        .map_err(|e| ImportError::InternalError(format!("tarefa de importação falhou: {}", e)))??;

        Ok(ImportSummary {
            parsed_rows: parsed.records.len(),
            dropped_rows: parsed.dropped_rows,
            written_rows: written,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[async_trait]
impl MaterialImporter for MaterialImporterImpl {
    async fn import_from_file(&self, file_path: &Path) -> ImportResult<ImportSummary> {
        let path: PathBuf = file_path.to_path_buf();
        info!("开始导入物料文件: {}", path.display());

        let result = self.run_blocking(move || parse_materials_file(&path)).await;
        match &result {
            Ok(summary) => info!(
                "物料导入完成: 有效 {} 行, 丢弃 {} 行, 写入 {} 行, 耗时 {}ms",
                summary.parsed_rows, summary.dropped_rows, summary.written_rows, summary.elapsed_ms
            ),
            Err(e) => warn!("物料导入失败: {}", e),
        }
        result
    }

    async fn import_from_bytes(
        &self,
        bytes: Vec<u8>,
        format: SpreadsheetFormat,
    ) -> ImportResult<ImportSummary> {
        info!("开始导入上传内容: {} 字节, 格式 {:?}", bytes.len(), format);

        let result = self
            .run_blocking(move || parse_materials_bytes(&bytes, format))
            .await;
        if let Err(e) = &result {
            warn!("物料导入失败: {}", e);
        }
        result
    }
}
