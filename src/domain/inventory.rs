// ==========================================
// 制造驾驶舱 - 库存快照
// ==========================================
// 职责: 原料/成品两组库存项，供低库存预警使用
// 说明: 快照由调用方每次提供，不做保留
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

// ==========================================
// InventoryItem - 库存项
// ==========================================

/// 库存项
///
/// 字段约束（由 [`InventoryItem::validate`] 在边界处检查）：
/// - name: 非空白
/// - stock / min_stock: 有限且非负
/// - unit: 非空白
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub stock: f64,
    pub min_stock: f64,
    pub unit: String,
}

impl InventoryItem {
    pub fn new(name: &str, stock: f64, min_stock: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            stock,
            min_stock,
            unit: unit.to_string(),
        }
    }

    /// 是否低于最低库存（严格小于；等于最低库存不预警）
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    /// 边界校验
    ///
    /// # 参数
    /// - path: 字段路径前缀（如 "raw_materials[0]"），用于错误定位
    pub fn validate(&self, path: &str) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(
                format!("{}.name", path),
                "名称不能为空",
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(DomainError::validation(
                format!("{}.unit", path),
                "单位不能为空",
            ));
        }
        check_quantity(&format!("{}.stock", path), self.stock)?;
        check_quantity(&format!("{}.min_stock", path), self.min_stock)?;
        Ok(())
    }
}

fn check_quantity(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(field, format!("数值无效: {}", value)));
    }
    if value < 0.0 {
        return Err(DomainError::validation(field, format!("数值不能为负: {}", value)));
    }
    Ok(())
}

// ==========================================
// InventorySnapshot - 库存快照
// ==========================================

/// 库存快照：原料在前，成品在后，各自保持输入顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub raw_materials: Vec<InventoryItem>,
    #[serde(default)]
    pub finished_products: Vec<InventoryItem>,
}

impl InventorySnapshot {
    pub fn new(raw_materials: Vec<InventoryItem>, finished_products: Vec<InventoryItem>) -> Self {
        Self {
            raw_materials,
            finished_products,
        }
    }

    /// 按预警顺序遍历全部库存项（原料 → 成品）
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.raw_materials.iter().chain(self.finished_products.iter())
    }

    pub fn len(&self) -> usize {
        self.raw_materials.len() + self.finished_products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 校验全部库存项，返回第一个违规
    pub fn validate(&self) -> DomainResult<()> {
        for (idx, item) in self.raw_materials.iter().enumerate() {
            item.validate(&format!("raw_materials[{}]", idx))?;
        }
        for (idx, item) in self.finished_products.iter().enumerate() {
            item.validate(&format!("finished_products[{}]", idx))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_low_stock_strict() {
        assert!(InventoryItem::new("Steel", 5.0, 10.0, "kg").is_low_stock());
        assert!(!InventoryItem::new("Steel", 10.0, 10.0, "kg").is_low_stock());
        assert!(!InventoryItem::new("Steel", 11.0, 10.0, "kg").is_low_stock());
    }

    #[test]
    fn test_validate_reports_field_path() {
        let snapshot = InventorySnapshot::new(
            vec![InventoryItem::new("Pulp Kayu", 100.0, 50.0, "kg")],
            vec![InventoryItem::new("Kertas HVS A4", -1.0, 10.0, "rim")],
        );

        match snapshot.validate() {
            Err(DomainError::ValidationError { field, .. }) => {
                assert_eq!(field, "finished_products[0].stock");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_name_and_nan() {
        let item = InventoryItem::new("  ", 1.0, 1.0, "kg");
        assert!(item.validate("raw_materials[0]").is_err());

        let item = InventoryItem::new("Bahan Kimia", f64::NAN, 1.0, "kg");
        assert!(item.validate("raw_materials[0]").is_err());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "raw_materials": [
                {"id": 1, "name": "Pulp Kayu", "stock": 15000, "unit": "kg", "min_stock": 5000}
            ]
        }"#;
        let snapshot: InventorySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.raw_materials.len(), 1);
        assert!(snapshot.finished_products.is_empty());
        assert_eq!(snapshot.raw_materials[0].stock, 15000.0);
    }
}
