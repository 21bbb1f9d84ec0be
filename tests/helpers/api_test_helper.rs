// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用环境
// ==========================================

use std::sync::{Arc, Mutex};

use manufacturing_dashboard::api::DashboardApi;
use manufacturing_dashboard::app::AppState;
use manufacturing_dashboard::config::DashboardConfig;
use manufacturing_dashboard::export::MemoryDownloadSink;
use manufacturing_dashboard::logging;
use manufacturing_dashboard::ui::{Page, PageElement, TooltipActivator};

/// API 测试环境
pub struct ApiTestEnv {
    pub state: AppState,
    pub sink: Arc<Mutex<MemoryDownloadSink>>,
}

impl ApiTestEnv {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        logging::init_test();
        let sink = Arc::new(Mutex::new(MemoryDownloadSink::new()));
        let state = AppState::with_sink(config, sink.clone()).expect("无法创建测试环境");
        Self { state, sink }
    }

    pub fn api(&self) -> &DashboardApi {
        &self.state.dashboard_api
    }

    /// 修改页面
    pub fn with_page<T>(&self, f: impl FnOnce(&mut Page) -> T) -> T {
        let mut page = self.state.page.lock().expect("页面锁获取失败");
        f(&mut page)
    }

    pub fn download_count(&self) -> usize {
        self.sink.lock().expect("下载目标锁获取失败").downloads().len()
    }
}

/// 记录激活的提示框元素
#[derive(Default)]
pub struct RecordingTooltips {
    pub activated: Vec<String>,
}

impl TooltipActivator for RecordingTooltips {
    fn activate(&mut self, element: &PageElement) {
        self.activated.push(element.id.clone());
    }
}
