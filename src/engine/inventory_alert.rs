// ==========================================
// 制造驾驶舱 - 低库存预警
// ==========================================
// 规则: stock < min_stock（严格小于）
// 顺序: 原料在前、成品在后，各组内保持输入顺序
// ==========================================

use crate::domain::inventory::{InventoryItem, InventorySnapshot};
use crate::i18n;

/// 低库存项（惰性遍历，按预警顺序）
pub fn low_stock_items(inventory: &InventorySnapshot) -> impl Iterator<Item = &InventoryItem> {
    inventory.items().filter(|item| item.is_low_stock())
}

/// 低库存预警文本（默认语言 id-ID）
///
/// # 示例
/// ```
/// use manufacturing_dashboard::domain::{InventoryItem, InventorySnapshot};
/// use manufacturing_dashboard::engine::check_low_stock;
///
/// let inventory = InventorySnapshot::new(vec![InventoryItem::new("Steel", 5.0, 10.0, "kg")], vec![]);
/// assert_eq!(check_low_stock(&inventory), vec!["Steel stock rendah: 5 kg".to_string()]);
/// ```
pub fn check_low_stock(inventory: &InventorySnapshot) -> Vec<String> {
    check_low_stock_in(inventory, i18n::DEFAULT_LOCALE)
}

/// 低库存预警文本（指定语言）
pub fn check_low_stock_in(inventory: &InventorySnapshot, locale: &str) -> Vec<String> {
    let alerts: Vec<String> = low_stock_items(inventory)
        .map(|item| low_stock_message(item, locale))
        .collect();

    if !alerts.is_empty() {
        tracing::debug!("低库存预警: {}项 / 共{}项", alerts.len(), inventory.len());
    }
    alerts
}

/// 单项预警文本
pub fn low_stock_message(item: &InventoryItem, locale: &str) -> String {
    let stock = item.stock.to_string();
    i18n::t_with_args_in(
        locale,
        "inventory.low_stock",
        &[
            ("name", item.name.as_str()),
            ("stock", stock.as_str()),
            ("unit", item.unit.as_str()),
        ],
    )
}
