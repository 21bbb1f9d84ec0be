// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use manufacturing_dashboard::domain::{InventoryItem, InventorySnapshot};
use manufacturing_dashboard::ui::{Form, FormControl};

// ==========================================
// InventorySnapshot 构建器
// ==========================================

#[derive(Default)]
pub struct InventoryBuilder {
    raw_materials: Vec<InventoryItem>,
    finished_products: Vec<InventoryItem>,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, name: &str, stock: f64, min_stock: f64, unit: &str) -> Self {
        self.raw_materials
            .push(InventoryItem::new(name, stock, min_stock, unit));
        self
    }

    pub fn product(mut self, name: &str, stock: f64, min_stock: f64, unit: &str) -> Self {
        self.finished_products
            .push(InventoryItem::new(name, stock, min_stock, unit));
        self
    }

    pub fn build(self) -> InventorySnapshot {
        InventorySnapshot::new(self.raw_materials, self.finished_products)
    }
}

/// 纸厂默认库存（全部高于最低库存）
pub fn paper_mill_inventory() -> InventorySnapshot {
    InventoryBuilder::new()
        .raw("Pulp Kayu", 15000.0, 5000.0, "kg")
        .raw("Pulp Daur Ulang", 8000.0, 3000.0, "kg")
        .raw("Bahan Kimia", 2000.0, 1000.0, "kg")
        .product("Kertas HVS A4", 50000.0, 10000.0, "rim")
        .product("Kertas Koran", 30000.0, 8000.0, "rim")
        .product("Kertas Kemasan", 20000.0, 5000.0, "rim")
        .build()
}

// ==========================================
// Form 构建器
// ==========================================

/// 生产录入表单（date/machine_id/quantity 必填）
pub fn production_form(date: &str, machine_id: &str, quantity: &str) -> Form {
    Form::new("productionForm")
        .with_control(FormControl::input("date").required().with_value(date))
        .with_control(FormControl::select("machine_id").required().with_value(machine_id))
        .with_control(FormControl::input("quantity").required().with_value(quantity))
        .with_control(FormControl::input("defects"))
}
