// ==========================================
// 制造驾驶舱 - 下载目标
// ==========================================
// DownloadSink: 触发客户端下载的抽象（浏览器中为临时锚点元素）
// 实现:
// - MemoryDownloadSink: 记录下载请求（测试/无头页面）
// - FileDownloadSink: 解码数据 URI 并写入下载目录
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::DashboardConfig;
use crate::export::data_uri::parse_data_uri;
use crate::export::error::{ExportError, ExportResult};

// ==========================================
// DownloadRequest - 下载请求
// ==========================================

/// 下载请求（对应锚点的 href 与 download 属性）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub href: String,
    pub filename: String,
}

impl DownloadRequest {
    /// 解码 href 中的内容
    pub fn decoded_content(&self) -> ExportResult<String> {
        parse_data_uri(&self.href).map(|(_, content)| content)
    }
}

// ==========================================
// DownloadSink Trait
// ==========================================
pub trait DownloadSink: Send {
    /// 触发一次下载
    fn trigger_download(&mut self, request: &DownloadRequest) -> ExportResult<()>;
}

// ==========================================
// MemoryDownloadSink
// ==========================================
#[derive(Debug, Default)]
pub struct MemoryDownloadSink {
    downloads: Vec<DownloadRequest>,
}

impl MemoryDownloadSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> &[DownloadRequest] {
        &self.downloads
    }

    pub fn take(&mut self) -> Vec<DownloadRequest> {
        std::mem::take(&mut self.downloads)
    }
}

impl DownloadSink for MemoryDownloadSink {
    fn trigger_download(&mut self, request: &DownloadRequest) -> ExportResult<()> {
        self.downloads.push(request.clone());
        Ok(())
    }
}

// ==========================================
// FileDownloadSink
// ==========================================
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileDownloadSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// 使用配置中的下载目录
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.resolve_download_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 已写入的文件
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// 目标路径（仅取文件名部分，防止目录穿越）
    fn target_path(&self, filename: &str) -> ExportResult<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| ExportError::InvalidFilename(filename.to_string()))?;
        Ok(self.dir.join(name))
    }
}

impl DownloadSink for FileDownloadSink {
    fn trigger_download(&mut self, request: &DownloadRequest) -> ExportResult<()> {
        let content = request.decoded_content()?;
        let path = self.target_path(&request.filename)?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, content)?;

        tracing::info!("导出文件已写入: {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
