// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认 pt-BR）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["pt-BR", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// 未提供翻译的语言回退为默认语言。
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!("不支持的语言 {}，回退为 {}", locale, DEFAULT_LOCALE);
        rust_i18n::set_locale(DEFAULT_LOCALE);
    }
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use inventory_system::i18n::t_with_args;
/// let msg = t_with_args("inventory.started", &[("id", "7")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// rust-i18n 的 locale 为全局状态，测试默认并行执行；
// 凡是会修改 locale 的测试（包括构造 AppState）都需持有此锁
#[cfg(test)]
static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_locale_for_test() -> std::sync::MutexGuard<'static, ()> {
    LOCALE_TEST_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_locale() {
        let _guard = lock_locale_for_test();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), "pt-BR");
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let _guard = lock_locale_for_test();
        set_locale("fr");
        assert_eq!(current_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = lock_locale_for_test();
        set_locale("pt-BR");
        let msg = t_with_args("inventory.started", &[("id", "42")]);
        assert_eq!(msg, "Inventário iniciado! ID: 42");

        set_locale("en");
        let msg = t_with_args("inventory.item_added", &[("code", "A1"), ("quantity", "10")]);
        assert_eq!(msg, "Item A1 added with quantity 10!");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(t("inventory.cancelled"), "Inventário cancelado!");
    }
}
