// ==========================================
// 制造驾驶舱 - CSV 导出
// ==========================================
// 行以 "\n" 连接（末尾不带换行），字段以 "," 连接
// 含分隔符/引号/换行的字段加引号，内部引号加倍
// 不做 schema 校验（允许行长度不一致）
// ==========================================

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::inventory::InventorySnapshot;
use crate::export::data_uri::csv_data_uri;
use crate::export::error::{ExportError, ExportResult};
use crate::export::sink::{DownloadRequest, DownloadSink};

/// 行序列转 CSV 文本
pub fn to_csv_string<R, F>(rows: &[R]) -> ExportResult<String>
where
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let lines = rows
        .iter()
        .map(|row| encode_row(row.as_ref()))
        .collect::<ExportResult<Vec<String>>>()?;
    Ok(lines.join("\n"))
}

/// 单行编码（不含终止符）
///
/// 空行与单个空字段的行写作空串；csv 写入器对这两种记录会输出 `""`
fn encode_row<F: AsRef<str>>(fields: &[F]) -> ExportResult<String> {
    match fields {
        [] => return Ok(String::new()),
        [only] if only.as_ref().is_empty() => return Ok(String::new()),
        _ => {}
    }

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields.iter().map(|f| f.as_ref()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    let mut line =
        String::from_utf8(bytes).map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// 导出 CSV 并触发一次下载
///
/// # 参数
/// - rows: 行序列（每行为字段序列）
/// - filename: 下载文件名（非空白）
/// - sink: 下载目标
///
/// # 返回
/// - Ok(DownloadRequest): 已触发的下载请求
/// - Err(ExportError): 文件名为空 / 写入失败 / 下载失败
pub fn export_to_csv<R, F>(
    rows: &[R],
    filename: &str,
    sink: &mut dyn DownloadSink,
) -> ExportResult<DownloadRequest>
where
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    if filename.trim().is_empty() {
        return Err(ExportError::EmptyFilename);
    }

    let content = to_csv_string(rows)?;
    let request = DownloadRequest {
        href: csv_data_uri(&content),
        filename: filename.to_string(),
    };

    sink.trigger_download(&request)?;
    tracing::info!("CSV 导出: filename={}, rows={}", filename, rows.len());
    Ok(request)
}

/// 库存快照转表格行（含表头）
pub fn inventory_rows(inventory: &InventorySnapshot) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "category".to_string(),
        "name".to_string(),
        "stock".to_string(),
        "min_stock".to_string(),
        "unit".to_string(),
    ]];

    let groups = [
        ("raw_material", &inventory.raw_materials),
        ("finished_product", &inventory.finished_products),
    ];
    for (category, items) in groups {
        for item in items.iter() {
            rows.push(vec![
                category.to_string(),
                item.name.clone(),
                item.stock.to_string(),
                item.min_stock.to_string(),
                item.unit.clone(),
            ]);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::InventoryItem;
    use crate::export::sink::MemoryDownloadSink;

    #[test]
    fn test_plain_rows_join() {
        let rows = vec![vec!["a", "b"], vec!["1", "2"]];
        assert_eq!(to_csv_string(&rows).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_quoting() {
        let rows = vec![
            vec!["Kertas, A4", "say \"hi\""],
            vec!["line\nbreak", "ok"],
        ];
        assert_eq!(
            to_csv_string(&rows).unwrap(),
            "\"Kertas, A4\",\"say \"\"hi\"\"\"\n\"line\nbreak\",ok"
        );
    }

    #[test]
    fn test_ragged_rows_allowed() {
        let rows = vec![vec!["a", "b", "c"], vec!["1"]];
        assert_eq!(to_csv_string(&rows).unwrap(), "a,b,c\n1");
    }

    #[test]
    fn test_empty_rows_become_blank_lines() {
        let single_blank = vec![vec![""]];
        assert_eq!(to_csv_string(&single_blank).unwrap(), "");

        let rows: Vec<Vec<&str>> = vec![vec!["a"], vec![], vec!["b"]];
        assert_eq!(to_csv_string(&rows).unwrap(), "a\n\nb");

        let rows = vec![vec!["a"], vec![""], vec!["b"]];
        assert_eq!(to_csv_string(&rows).unwrap(), "a\n\nb");

        let rows: Vec<Vec<&str>> = vec![vec!["a", "b"], vec![]];
        assert_eq!(to_csv_string(&rows).unwrap(), "a,b\n");

        let rows = vec![vec!["", ""]];
        assert_eq!(to_csv_string(&rows).unwrap(), ",");
    }

    #[test]
    fn test_empty_payload() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(to_csv_string(&rows).unwrap(), "");
    }

    #[test]
    fn test_export_triggers_single_download() {
        let mut sink = MemoryDownloadSink::new();
        let rows = vec![vec!["a", "b"], vec!["1", "2"]];

        let request = export_to_csv(&rows, "x.csv", &mut sink).unwrap();

        assert_eq!(sink.downloads().len(), 1);
        assert_eq!(sink.downloads()[0], request);
        assert_eq!(request.filename, "x.csv");
        assert_eq!(request.decoded_content().unwrap(), "a,b\n1,2");
        assert!(request.href.starts_with("data:text/csv;charset=utf-8,"));
    }

    #[test]
    fn test_export_rejects_empty_filename() {
        let mut sink = MemoryDownloadSink::new();
        let rows = vec![vec!["a"]];
        let result = export_to_csv(&rows, "  ", &mut sink);
        assert!(matches!(result, Err(ExportError::EmptyFilename)));
        assert!(sink.downloads().is_empty());
    }

    #[test]
    fn test_inventory_rows() {
        let inventory = InventorySnapshot::new(
            vec![InventoryItem::new("Pulp Kayu", 15000.0, 5000.0, "kg")],
            vec![InventoryItem::new("Kertas HVS A4", 50000.0, 10000.0, "rim")],
        );
        let rows = inventory_rows(&inventory);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["raw_material", "Pulp Kayu", "15000", "5000", "kg"]);
        assert_eq!(rows[2][0], "finished_product");
    }
}
