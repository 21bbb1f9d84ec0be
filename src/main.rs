// ==========================================
// 制造驾驶舱 - 命令行入口
// ==========================================
// 用法:
//   manufacturing-dashboard <inventory.json> [export.csv]
//
// 读取库存快照，输出低库存预警；指定文件名时导出库存 CSV 到下载目录
// ==========================================

use anyhow::{bail, Context};

use manufacturing_dashboard::app::AppState;
use manufacturing_dashboard::config::DashboardConfig;
use manufacturing_dashboard::domain::InventorySnapshot;
use manufacturing_dashboard::logging;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init_from_env();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", manufacturing_dashboard::APP_NAME, manufacturing_dashboard::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let inventory_path = match args.next() {
        Some(path) => path,
        None => bail!("用法: manufacturing-dashboard <inventory.json> [export.csv]"),
    };
    let export_filename = args.next();

    let config = DashboardConfig::load().context("配置加载失败")?;
    let state = AppState::new(config).context("AppState初始化失败")?;
    let api = &state.dashboard_api;

    let raw = std::fs::read_to_string(&inventory_path)
        .with_context(|| format!("无法读取库存文件: {}", inventory_path))?;
    let inventory: InventorySnapshot =
        serde_json::from_str(&raw).with_context(|| format!("库存文件格式错误: {}", inventory_path))?;

    let alerts = api.check_low_stock(&inventory)?;
    if alerts.is_empty() {
        tracing::info!("库存正常: {}项", inventory.len());
    }
    for alert in &alerts {
        println!("{}", alert);
    }

    if let Some(filename) = export_filename {
        let request = api.export_inventory_csv(&inventory, &filename)?;
        println!("exported={}", request.filename);
    }

    Ok(())
}
