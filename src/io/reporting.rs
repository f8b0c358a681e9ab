// src/io/reporting.rs

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::dashboard::tiles::KpiTile;
use crate::error::Result;
use crate::policy::curve::{CostPoint, TotalCostCurve};

/// Writes serializable records to a CSV file, header row first.
///
/// # Arguments
/// * `file_path` - Destination, e.g. "reports/curve.csv".
/// * `records` - Anything iterable whose items serialize to flat rows.
pub fn write_csv<I, T>(file_path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_path(file_path)?;
    let mut rows = 0;
    for record in records {
        wtr.serialize(record)?;
        rows += 1;
    }
    wtr.flush()?;

    info!(rows, path = %file_path.display(), "exported CSV");
    Ok(rows)
}

/// Same as [`write_csv`] but into a string, for printing.
pub fn csv_string<I, T>(records: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let data = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Exports the what-if curve as `quantity,total_cost` rows.
pub fn write_cost_curve(file_path: &Path, curve: &TotalCostCurve) -> Result<usize> {
    write_csv::<_, CostPoint>(file_path, curve)
}

/// Exports KPI tiles as `label,value,display` rows.
pub fn write_kpis(file_path: &Path, tiles: &[KpiTile]) -> Result<usize> {
    write_csv(file_path, tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tiles::kpi_row;
    use crate::model::inputs::PolicyInputs;
    use crate::policy::calculator::calculate;
    use std::fs;

    #[test]
    fn test_curve_export_has_header_and_sixty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        let outputs = calculate(&PolicyInputs::default());

        let rows = write_cost_curve(&path, &outputs.total_cost_curve).unwrap();
        assert_eq!(rows, 60);

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("quantity,total_cost"));
        assert_eq!(lines.count(), 60);
    }

    #[test]
    fn test_kpi_csv_string() {
        let outputs = calculate(&PolicyInputs::default());
        let csv = csv_string(kpi_row(&outputs)).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "label,value,display");
        assert!(lines[1].starts_with("EOQ (Q*),447.21"));
        assert!(lines[1].ends_with(",447"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_write_kpis_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kpis.csv");
        let outputs = calculate(&PolicyInputs::default());

        assert_eq!(write_kpis(&path, &kpi_row(&outputs)).unwrap(), 5);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let outputs = calculate(&PolicyInputs::default());
        let result = write_cost_curve(
            Path::new("/definitely/not/here/curve.csv"),
            &outputs.total_cost_curve,
        );
        assert!(result.is_err());
    }
}
