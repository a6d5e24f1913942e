// ==========================================
// 物料盘点系统 - 日志
// ==========================================
// 输出: tracing-subscriber fmt 层，级别由 RUST_LOG 控制
// 默认: 本库 info，rusqlite 仅 warn（trace 特性开启后 SQL 日志较多）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "info,rusqlite=warn";

/// 测试使用的过滤规则
const TEST_FILTER: &str = "debug,rusqlite=warn";

/// 由过滤规则文本构造 EnvFilter，规则非法时回退到 DEFAULT_FILTER
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化日志（桌面壳与命令行入口调用）
///
/// 已初始化过时直接返回。
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    let _ = fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 初始化测试日志，输出交给测试框架捕获
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        assert_eq!(build_filter(None).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
        assert_eq!(
            build_filter(Some("inventory_system=trace")).to_string(),
            "inventory_system=trace"
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_test();
        init_test();
        init();
    }
}
