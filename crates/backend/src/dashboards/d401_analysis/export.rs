use anyhow::Context;
use chrono::NaiveDateTime;
use contracts::dashboards::d401_analysis::ExportRequest;
use contracts::shared::analytics::TransactionRecord;

use super::service::filtered_sorted;
use crate::dashboards::DashboardError;

const UTF8_BOM: &[u8] = "\u{feff}".as_bytes();
const HEADER: [&str; 5] = ["날짜", "카테고리", "지역", "매출", "이익"];

pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Render the filtered and sorted records as CSV (UTF-8 with BOM for Excel)
pub fn export_csv(
    records: &[TransactionRecord],
    request: &ExportRequest,
    now: NaiveDateTime,
) -> Result<CsvExport, DashboardError> {
    let rows = filtered_sorted(records, &request.filter, request.sort_by, request.sort_order);

    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;
    for row in &rows {
        writer
            .write_record([
                row.date.format("%Y-%m-%d").to_string(),
                row.category.label().to_string(),
                row.region.label().to_string(),
                row.sales.to_string(),
                row.profit.to_string(),
            ])
            .context("Failed to write CSV row")?;
    }
    let content = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("{}", e.error()))
        .context("Failed to flush CSV export")?;

    Ok(CsvExport {
        filename: format!("data_export_{}.csv", now.format("%Y%m%d_%H%M%S")),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, sample};
    use contracts::enums::Category;
    use contracts::shared::analytics::{FilterSet, SortField, SortOrder};

    #[test]
    fn test_export_csv() {
        let request = ExportRequest {
            filter: FilterSet {
                categories: vec![Category::ProductA],
                ..Default::default()
            },
            sort_by: SortField::Date,
            sort_order: SortOrder::Asc,
        };
        let now = date(2024, 5, 6).and_hms_opt(7, 8, 9).unwrap();
        let export = export_csv(&sample(), &request, now).unwrap();

        assert_eq!(export.filename, "data_export_20240506_070809.csv");
        assert!(export.content.starts_with(UTF8_BOM));

        let text = String::from_utf8(export.content[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "날짜,카테고리,지역,매출,이익");
        assert_eq!(lines[1], "2023-01-01,제품A,북부,1000,100");
        assert_eq!(lines[3], "2023-03-31,제품A,중부,6000,1800");
    }
}
