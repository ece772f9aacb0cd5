use crate::error::Result;
use polars::prelude::*;
use std::io::Cursor;
use super::types::DataPreview;

pub struct CsvConnector;

impl CsvConnector {
    /// Parse CSV bytes (header row required) into a DataFrame
    pub fn read_bytes(bytes: &[u8]) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
            .finish()?;

        log::debug!("Read CSV: {} rows x {} columns", df.height(), df.width());
        Ok(df)
    }

    /// Stringify every row of `df` for a preview grid
    pub fn create_preview(df: &DataFrame, decimals: usize) -> Result<DataPreview> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let mut row = Vec::with_capacity(df.width());
            for series in df.get_columns() {
                let value = match series.dtype() {
                    DataType::Float64 | DataType::Float32 => {
                        let s_f64 = series.cast(&DataType::Float64)?;
                        let f64_series = s_f64.f64()?;
                        f64_series.get(i).map(|v| format!("{:.*}", decimals, v)).unwrap_or_else(|| "null".to_string())
                    }
                    DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
                        let s_i64 = series.cast(&DataType::Int64)?;
                        let i64_series = s_i64.i64()?;
                        i64_series.get(i).map(|v| v.to_string()).unwrap_or_else(|| "null".to_string())
                    }
                    DataType::String => {
                        series.str()?.get(i).unwrap_or("null").to_string()
                    }
                    _ => {
                        let s_str = series.cast(&DataType::String)?;
                        s_str.str()?.get(i).unwrap_or("null").to_string()
                    }
                };
                row.push(value);
            }
            rows.push(row);
        }

        Ok(DataPreview { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataValidator;
    use crate::error::StockcastError;
    use polars::df;

    #[test]
    fn test_read_bytes_with_gaps() {
        let csv = b"Date,Open,Close\n2024-01-01,99,100.0\n2024-01-02,101,\n2024-01-03,102,103.5\n";
        let df = CsvConnector::read_bytes(csv).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.column("Close").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_then_validate_missing_date() {
        let csv = b"Day,Close\n2024-01-01,100.0\n";
        let df = CsvConnector::read_bytes(csv).unwrap();
        let result = DataValidator::validate(&df);
        assert!(matches!(result, Err(StockcastError::MissingColumns { .. })));
    }

    #[test]
    fn test_read_then_validate_numeric_dates() {
        let csv = b"Date,Close\n20240102,101\n20240101,100\n";
        let df = CsvConnector::read_bytes(csv).unwrap();
        let series = DataValidator::validate(&df).unwrap();
        assert_eq!(series.records[0].date.as_deref(), Some("20240102"));
        assert_eq!(series.records[1].close, Some(100.0));
    }

    #[test]
    fn test_create_preview() {
        let df = df! {
            "Date" => &["2024-01-02", "2024-01-03"],
            "Close" => &[102.0, 103.456],
            "Volume" => &[1500i64, 1200],
        }
        .unwrap();

        let preview = CsvConnector::create_preview(&df, 2).unwrap();
        assert_eq!(preview.columns, vec!["Date", "Close", "Volume"]);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[1], vec!["2024-01-03", "103.46", "1200"]);
    }
}
