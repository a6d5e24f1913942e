// ==========================================
// 导出文件命名
// ==========================================

use chrono::NaiveDateTime;

/// 文件名中不允许出现的字符（路径分隔符与 Windows 保留字符）
const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 将任意文本转为单个文件名片段
///
/// 空白、保留字符与控制字符替换为 '_'
pub fn file_name_component(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || RESERVED_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// 历史盘点导出文件名
///
/// 例: inventario_rezende_energia_Joao_Silva_16102026.xlsx
pub fn inventory_file_name(
    company_slug: &str,
    responsible: &str,
    taken_at: NaiveDateTime,
) -> String {
    format!(
        "inventario_{}_{}_{}.xlsx",
        file_name_component(company_slug),
        file_name_component(responsible),
        taken_at.format("%d%m%Y")
    )
}

/// 进行中盘点导出文件名
///
/// 例: inventario_7_20261016_1430.xlsx
pub fn session_export_file_name(inventory_id: i64, now: NaiveDateTime) -> String {
    format!("inventario_{}_{}.xlsx", inventory_id, now.format("%Y%m%d_%H%M"))
}

/// 物料清单导出文件名
pub fn materials_file_name(company_slug: &str, now: NaiveDateTime) -> String {
    format!(
        "materiais_{}_{}.xlsx",
        file_name_component(company_slug),
        now.format("%d%m%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_inventory_file_name() {
        let name = inventory_file_name("rezende_energia", "João Silva", at(9, 5));
        assert_eq!(name, "inventario_rezende_energia_João_Silva_16102026.xlsx");
    }

    #[test]
    fn test_inventory_file_name_replaces_path_separators() {
        let name = inventory_file_name("rezende_energia", "João / Maria", at(9, 5));
        assert_eq!(name, "inventario_rezende_energia_João___Maria_16102026.xlsx");

        let name = inventory_file_name("rezende_energia", r"Ana\Bob: C", at(9, 5));
        assert_eq!(name, "inventario_rezende_energia_Ana_Bob__C_16102026.xlsx");
        assert!(!name.contains('/') && !name.contains('\\'));
    }

    #[test]
    fn test_file_name_component() {
        assert_eq!(file_name_component("  Ana/Bob  "), "Ana_Bob");
        assert_eq!(file_name_component("a<b>c|d?e*\"f\""), "a_b_c_d_e__f_");
        assert_eq!(file_name_component("..\tab\t"), ".._tab");
    }

    #[test]
    fn test_session_export_file_name() {
        assert_eq!(session_export_file_name(7, at(14, 30)), "inventario_7_20261016_1430.xlsx");
    }

    #[test]
    fn test_materials_file_name() {
        assert_eq!(
            materials_file_name("rezende_energia", at(8, 0)),
            "materiais_rezende_energia_16102026.xlsx"
        );
    }
}
