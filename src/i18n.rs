// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持印尼语（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言（驾驶舱面向印尼工厂）
pub const DEFAULT_LOCALE: &str = "id-ID";

/// 支持的语言列表
pub const SUPPORTED_LOCALES: &[&str] = &["id-ID", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"id-ID" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 是否为支持的语言
pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（当前语言，无参数）
///
/// # 示例
/// ```no_run
/// use manufacturing_dashboard::i18n::t;
/// let msg = t("machine_status.running");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（指定语言，无参数）
///
/// 不读取全局语言状态，供纯函数使用
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（当前语言，带参数）
///
/// # 示例
/// ```no_run
/// use manufacturing_dashboard::i18n::t_with_args;
/// let msg = t_with_args("inventory.low_stock", &[("name", "Steel"), ("stock", "5"), ("unit", "kg")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key).to_string(), args)
}

/// 翻译消息（指定语言，带参数）
pub fn t_with_args_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key, locale = locale).to_string(), args)
}

/// 单次扫描模板替换 %{key}，替换值中的占位符保持原样
fn interpolate(template: String, args: &[(&str, &str)]) -> String {
    let patterns: Vec<&str> = args.iter().map(|(k, _)| *k).collect();
    let values: Vec<String> = args.iter().map(|(_, v)| v.to_string()).collect();
    rust_i18n::replace_patterns(&template, &patterns, &values)
}
