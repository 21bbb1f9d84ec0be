// ==========================================
// 制造驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 汇总格式化/指标/页面操作/导出，向页面标记提供统一入口
// 架构: API 层 → engine / format（纯函数） + ui / export（副作用）
// 边界: 在此处校验外部输入（库存快照、文件名）
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::inventory::InventorySnapshot;
use crate::domain::metrics::{OeeAssessment, OeeComponents, StatusBadge, YieldOutcome};
use crate::domain::types::{NotificationKind, Severity};
use crate::engine;
use crate::export::{self, DownloadRequest, DownloadSink};
use crate::format;
use crate::ui::{self, NotificationCenter, NotificationId, Page, TooltipActivator};

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责：
/// 1. 纯函数辅助（格式化、OEE、良率、徽章、低库存预警），阈值与语言取自配置
/// 2. 页面副作用（通知、表单校验、提示框）
/// 3. CSV 导出（经由 DownloadSink）
pub struct DashboardApi {
    config: DashboardConfig,
    page: Arc<Mutex<Page>>,
    notifications: NotificationCenter<Page>,
    download_sink: Arc<Mutex<dyn DownloadSink>>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - config: 驾驶舱配置（创建时校验）
    /// - page: 页面（通知容器与表单）
    /// - download_sink: 下载目标
    pub fn new(
        config: DashboardConfig,
        page: Arc<Mutex<Page>>,
        download_sink: Arc<Mutex<dyn DownloadSink>>,
    ) -> ApiResult<Self> {
        config.validate()?;
        let notifications = NotificationCenter::from_config(Arc::clone(&page), &config);

        tracing::info!(
            "DashboardApi 初始化: locale={}, auto_dismiss_ms={}",
            config.locale,
            config.notification.auto_dismiss_ms
        );

        Ok(Self {
            config,
            page,
            notifications,
            download_sink,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn page(&self) -> &Arc<Mutex<Page>> {
        &self.page
    }

    // ==========================================
    // 格式化
    // ==========================================

    pub fn format_number(&self, value: f64) -> String {
        format::format_number(value)
    }

    /// 格式化数字文本（页面标记传入字符串时使用）
    pub fn format_number_str(&self, raw: &str) -> ApiResult<String> {
        Ok(format::format_number_str(raw)?)
    }

    /// 格式化日期（无法解析时返回错误）
    pub fn format_date(&self, raw: &str) -> ApiResult<String> {
        Ok(format::format_date(raw)?)
    }

    /// 格式化日期（无法解析时返回占位文本）
    pub fn format_date_lenient(&self, raw: &str) -> String {
        format::format_date_or_placeholder(raw, &self.config.locale)
    }

    pub fn current_date(&self) -> String {
        format::current_date()
    }

    // ==========================================
    // 指标
    // ==========================================

    pub fn calculate_oee_components(
        &self,
        availability: f64,
        performance: f64,
        quality: f64,
    ) -> OeeComponents {
        engine::calculate_oee_components(availability, performance, quality)
    }

    pub fn oee_assessment(&self, oee_percent: f64) -> OeeAssessment {
        engine::assess_oee(oee_percent, &self.config.oee_thresholds)
    }

    pub fn calculate_production_yield(&self, quantity: u64, defects: u64) -> YieldOutcome {
        engine::calculate_production_yield(quantity, defects)
    }

    pub fn yield_badge(&self, yield_percent: f64) -> Severity {
        engine::yield_badge_with(yield_percent, &self.config.yield_thresholds)
    }

    pub fn machine_status_badge(&self, status: &str) -> StatusBadge {
        engine::machine_status_badge_in(status, &self.config.locale)
    }

    /// 低库存预警（先校验快照）
    pub fn check_low_stock(&self, inventory: &InventorySnapshot) -> ApiResult<Vec<String>> {
        inventory.validate().map_err(|e| {
            tracing::warn!("库存快照校验失败: {}", e);
            ApiError::from(e)
        })?;
        Ok(engine::check_low_stock_in(inventory, &self.config.locale))
    }

    // ==========================================
    // 页面操作
    // ==========================================

    /// 校验表单必填项
    pub fn validate_form(&self, form_id: &str) -> ApiResult<bool> {
        if form_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("表单ID不能为空".to_string()));
        }
        let mut page = self
            .page
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(ui::validate_form(&mut *page, form_id)?)
    }

    /// 显示通知（需在 tokio 运行时内调用）
    pub fn show_notification(&self, message: &str, kind: &str) -> ApiResult<NotificationId> {
        Ok(self.notifications.show(message, kind)?)
    }

    pub fn show_notification_kind(
        &self,
        message: &str,
        kind: NotificationKind,
    ) -> ApiResult<NotificationId> {
        Ok(self.notifications.show_kind(message, kind)?)
    }

    pub fn dismiss_notification(&self, id: NotificationId) -> ApiResult<bool> {
        Ok(self.notifications.dismiss(id)?)
    }

    /// 页面加载完成: 初始化提示框
    pub fn init_tooltips(&self, activator: &mut dyn TooltipActivator) -> ApiResult<usize> {
        let page = self
            .page
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(ui::init_tooltips(&page, activator))
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出 CSV 并触发下载
    pub fn export_to_csv<R, F>(&self, rows: &[R], filename: &str) -> ApiResult<DownloadRequest>
    where
        R: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut sink = self
            .download_sink
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;
        Ok(export::export_to_csv(rows, filename, &mut *sink)?)
    }

    /// 导出库存快照（含表头）
    pub fn export_inventory_csv(
        &self,
        inventory: &InventorySnapshot,
        filename: &str,
    ) -> ApiResult<DownloadRequest> {
        inventory.validate()?;
        self.export_to_csv(&export::inventory_rows(inventory), filename)
    }
}
