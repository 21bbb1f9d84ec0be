// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试范围:
// 1. 表单校验: validate_form（标记与清除 is-invalid）
// 2. 通知: show_notification（顶部插入、5 秒自动移除、累积）
// 3. 导出: export_to_csv / export_inventory_csv
// 4. 提示框初始化
// ==========================================

mod helpers;

use std::time::Duration;

use helpers::api_test_helper::{ApiTestEnv, RecordingTooltips};
use helpers::test_data_builder::{paper_mill_inventory, production_form, InventoryBuilder};
use manufacturing_dashboard::api::ApiError;
use manufacturing_dashboard::domain::NotificationKind;
use manufacturing_dashboard::ui::{NotificationSurface, PageElement};

// ==========================================
// 表单校验
// ==========================================

#[test]
fn test_validate_form_空必填项() {
    let env = ApiTestEnv::new();
    env.with_page(|page| page.add_form(production_form("2024-01-01", "", "  ")));

    let valid = env.api().validate_form("productionForm").expect("校验失败");
    assert!(!valid);

    env.with_page(|page| {
        let form = page.form("productionForm").unwrap();
        assert!(!form.control("date").unwrap().is_marked_invalid());
        assert!(form.control("machine_id").unwrap().is_marked_invalid());
        assert!(form.control("quantity").unwrap().is_marked_invalid());
        assert!(!form.control("defects").unwrap().is_marked_invalid());
    });
}

#[test]
fn test_validate_form_全部填写() {
    let env = ApiTestEnv::new();
    env.with_page(|page| page.add_form(production_form("2024-01-01", "1", "12000")));
    assert!(env.api().validate_form("productionForm").unwrap());
}

#[test]
fn test_validate_form_表单不存在() {
    let env = ApiTestEnv::new();
    let result = env.api().validate_form("inventoryForm");
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

// ==========================================
// 通知
// ==========================================

#[tokio::test(start_paused = true)]
async fn test_show_notification_自动移除() {
    let env = ApiTestEnv::new();
    let first = env.api().show_notification("Data tersimpan", "success").unwrap();
    let second = env.api().show_notification("Gagal", "error").unwrap();

    env.with_page(|page| {
        let notifications = page.notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].id, second);
        assert_eq!(notifications[0].kind, NotificationKind::Error);
        assert!(notifications[0].class_name().starts_with("alert alert-danger"));
        assert_eq!(notifications[1].id, first);
    });

    tokio::time::sleep(Duration::from_secs(4)).await;
    env.with_page(|page| assert_eq!(page.notifications().len(), 2));

    tokio::time::sleep(Duration::from_millis(1001)).await;
    env.with_page(|page| {
        assert!(!page.contains(first));
        assert!(!page.contains(second));
    });
}

#[tokio::test(start_paused = true)]
async fn test_show_notification_手动关闭() {
    let env = ApiTestEnv::new();
    let id = env.api().show_notification("Stok diperbarui", "warning").unwrap();

    assert!(env.api().dismiss_notification(id).unwrap());
    env.with_page(|page| assert!(page.notifications().is_empty()));

    tokio::time::sleep(Duration::from_secs(10)).await;
    env.with_page(|page| assert!(page.notifications().is_empty()));
}

// ==========================================
// 导出
// ==========================================

#[test]
fn test_export_to_csv_单次下载() {
    let env = ApiTestEnv::new();
    let request = env
        .api()
        .export_to_csv(&[vec!["a", "b"], vec!["1", "2"]], "x.csv")
        .expect("导出失败");

    assert_eq!(env.download_count(), 1);
    assert_eq!(request.decoded_content().unwrap(), "a,b\n1,2");
}

#[test]
fn test_export_inventory_csv() {
    let env = ApiTestEnv::new();
    let request = env
        .api()
        .export_inventory_csv(&paper_mill_inventory(), "inventory.csv")
        .expect("导出失败");

    let content = request.decoded_content().unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "category,name,stock,min_stock,unit");
    assert_eq!(lines[1], "raw_material,Pulp Kayu,15000,5000,kg");
    assert_eq!(lines[6], "finished_product,Kertas Kemasan,20000,5000,rim");
}

#[test]
fn test_export_inventory_csv_校验失败不下载() {
    let env = ApiTestEnv::new();
    let inventory = InventoryBuilder::new().raw("Pulp", -5.0, 10.0, "kg").build();

    let result = env.api().export_inventory_csv(&inventory, "inventory.csv");
    assert!(matches!(result, Err(ApiError::ValidationError(_))));
    assert_eq!(env.download_count(), 0);
}

// ==========================================
// 提示框
// ==========================================

#[test]
fn test_init_tooltips() {
    let env = ApiTestEnv::new();
    env.with_page(|page| {
        page.add_element(PageElement::new("oee-info").with_attribute("data-bs-toggle", "tooltip"));
        page.add_element(PageElement::new("nav").with_attribute("data-bs-toggle", "collapse"));
    });

    let mut tooltips = RecordingTooltips::default();
    assert_eq!(env.api().init_tooltips(&mut tooltips).unwrap(), 1);
    assert_eq!(tooltips.activated, vec!["oee-info"]);
}
