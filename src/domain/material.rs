// ==========================================
// 物料盘点系统 - 物料领域模型
// ==========================================
// 对齐: materials 表
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Material - 已登记物料
// ==========================================
// 用途: 导入层写入（upsert），盘点与报表只读
// 主键: code（全局唯一，自然键）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub code: String,                  // 物料编码
    pub description: String,           // 物料描述
    pub registered_at: NaiveDateTime,  // 登记时间（首次写入时由数据库默认）
}

// ==========================================
// MaterialRecord - 导入记录
// ==========================================
// 用途: 表格解析后的清洗结果，写库前的中间形态
// 约束: code/description 均已 trim 且非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub code: String,
    pub description: String,
}

impl MaterialRecord {
    /// 由原始字符串构造；任一字段 trim 后为空时返回 None
    pub fn from_raw(code: &str, description: &str) -> Option<Self> {
        let code = code.trim();
        let description = description.trim();
        if code.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            description: description.to_string(),
        })
    }
}

impl From<&Material> for MaterialRecord {
    fn from(material: &Material) -> Self {
        Self {
            code: material.code.clone(),
            description: material.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims() {
        let record = MaterialRecord::from_raw("  A1 ", "\tFio 2,5mm ").unwrap();
        assert_eq!(record.code, "A1");
        assert_eq!(record.description, "Fio 2,5mm");
    }

    #[test]
    fn test_from_raw_rejects_blank() {
        assert!(MaterialRecord::from_raw("A1", "   ").is_none());
        assert!(MaterialRecord::from_raw("", "Fita").is_none());
    }
}
