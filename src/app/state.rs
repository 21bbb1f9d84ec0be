// ==========================================
// 制造驾驶舱 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{ApiResult, DashboardApi};
use crate::config::DashboardConfig;
use crate::export::{DownloadSink, FileDownloadSink};
use crate::ui::Page;

/// 应用状态
///
/// 包含API实例和共享页面
pub struct AppState {
    /// 页面（通知容器、表单、提示框元素）
    pub page: Arc<Mutex<Page>>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 创建应用状态（导出写入配置的下载目录）
    pub fn new(config: DashboardConfig) -> ApiResult<Self> {
        let sink = FileDownloadSink::from_config(&config);
        tracing::info!("下载目录: {}", sink.dir().display());
        Self::with_sink(config, Arc::new(Mutex::new(sink)))
    }

    /// 使用指定下载目标创建应用状态
    pub fn with_sink(
        config: DashboardConfig,
        download_sink: Arc<Mutex<dyn DownloadSink>>,
    ) -> ApiResult<Self> {
        let page = Arc::new(Mutex::new(Page::new(&config.notification.container_selector)));
        let dashboard_api = DashboardApi::new(config, Arc::clone(&page), download_sink)?;

        Ok(Self {
            page,
            dashboard_api: Arc::new(dashboard_api),
        })
    }
}
