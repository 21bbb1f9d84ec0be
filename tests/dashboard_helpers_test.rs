// ==========================================
// 纯函数辅助 集成测试
// ==========================================
// 测试范围:
// 1. 良率 / OEE 计算公式与边界
// 2. 徽章映射（良率、OEE、机台状态）
// 3. 低库存预警顺序与严格小于
// 4. 数字/日期格式化
// ==========================================

mod helpers;

use helpers::test_data_builder::{paper_mill_inventory, InventoryBuilder};
use manufacturing_dashboard::domain::{MachineStatus, OeeLevel, Severity, YieldOutcome};
use manufacturing_dashboard::engine::{
    calculate_oee_components, calculate_production_yield, check_low_stock, machine_status_badge,
    oee_assessment, yield_badge,
};
use manufacturing_dashboard::format::{current_date, format_date, format_number};

// ==========================================
// 良率
// ==========================================

#[test]
fn test_yield_公式与一位小数() {
    let cases: [(u64, u64, &str); 8] = [
        (7, 3, "57.1"),
        (16, 1, "93.8"),
        (3, 1, "66.7"),
        (12000, 120, "99.0"),
        (8000, 160, "98.0"),
        (1, 0, "100.0"),
        (100, 100, "0.0"),
        (3, 2, "33.3"),
    ];
    for (q, d, expected) in cases {
        assert_eq!(calculate_production_yield(q, d).display(), expected, "q={} d={}", q, d);
    }
}

#[test]
fn test_yield_产量为零() {
    let outcome = calculate_production_yield(0, 3);
    assert_eq!(outcome, YieldOutcome::NotComputable);
    assert_eq!(outcome.display(), "0");
}

#[test]
fn test_yield_badge_边界() {
    assert_eq!(yield_badge(95.0), Severity::Success);
    assert_eq!(yield_badge(94.9), Severity::Warning);
    assert_eq!(yield_badge(89.9), Severity::Danger);
}

// ==========================================
// OEE
// ==========================================

#[test]
fn test_oee_公式() {
    for (a, p, q) in [(0.0, 50.0, 100.0), (90.0, 95.0, 99.0), (100.0, 100.0, 100.0), (62.5, 80.0, 97.3)] {
        let c = calculate_oee_components(a, p, q);
        assert_eq!(c.oee, a * p * q / 10000.0);
        assert_eq!((c.availability, c.performance, c.quality), (a, p, q));
    }
}

#[test]
fn test_oee_assessment_下界含() {
    assert_eq!(oee_assessment(85.0).level, OeeLevel::Excellent);
    assert_eq!(oee_assessment(84.9).level, OeeLevel::Good);
    assert_eq!(oee_assessment(70.0).level, OeeLevel::Good);
    assert_eq!(oee_assessment(50.0).level, OeeLevel::Fair);
    assert_eq!(oee_assessment(49.9).level, OeeLevel::Poor);
}

// ==========================================
// 机台状态
// ==========================================

#[test]
fn test_machine_status_badge() {
    let badge = machine_status_badge("running");
    assert_eq!(badge.severity, Severity::Success);
    assert_eq!(badge.label, "Berjalan");

    let badge = machine_status_badge("bogus");
    assert_eq!(badge.status, MachineStatus::Unknown);
    assert_eq!(badge.badge_class(), "bg-secondary");
    assert_eq!(badge.label, "Tidak Diketahui");
}

// ==========================================
// 低库存预警
// ==========================================

#[test]
fn test_check_low_stock_单项() {
    let inventory = InventoryBuilder::new().raw("Steel", 5.0, 10.0, "kg").build();
    let alerts = check_low_stock(&inventory);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("Steel"));
    assert!(alerts[0].contains("5 kg"));
}

#[test]
fn test_check_low_stock_等于最低库存不预警() {
    let inventory = InventoryBuilder::new().raw("Steel", 10.0, 10.0, "kg").build();
    assert!(check_low_stock(&inventory).is_empty());
    assert!(check_low_stock(&paper_mill_inventory()).is_empty());
}

#[test]
fn test_check_low_stock_名称含占位符() {
    let inventory = InventoryBuilder::new().raw("Tinta %{unit}", 5.0, 10.0, "kg").build();
    assert_eq!(check_low_stock(&inventory), vec!["Tinta %{unit} stock rendah: 5 kg"]);
}

#[test]
fn test_check_low_stock_顺序() {
    let inventory = InventoryBuilder::new()
        .raw("R1", 1.0, 2.0, "kg")
        .raw("R2", 5.0, 2.0, "kg")
        .raw("R3", 0.0, 2.0, "kg")
        .product("P1", 1.0, 2.0, "rim")
        .build();
    let alerts = check_low_stock(&inventory);
    assert_eq!(alerts.len(), 3);
    assert!(alerts[0].starts_with("R1"));
    assert!(alerts[1].starts_with("R3"));
    assert!(alerts[2].starts_with("P1"));
}

// ==========================================
// 格式化
// ==========================================

#[test]
fn test_format_number_id_locale() {
    assert_eq!(format_number(50000.0), "50.000");
    assert_eq!(format_number(1234.56), "1.234,56");
}

#[test]
fn test_format_date() {
    assert_eq!(format_date("2024-01-02").unwrap(), "02/01/2024");
    assert!(format_date("not a date").is_err());
    assert_eq!(current_date().len(), 10);
}
