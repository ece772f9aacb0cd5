use crate::error::{Result, StockcastError};
use crate::types::{PriceRecord, RawSeries};
use polars::prelude::*;
use super::types::RequiredColumn;

/// Cell texts pandas-style readers treat as missing
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none", "-"];

pub struct DataValidator;

impl DataValidator {
    /// Check for `Date` and `Close` and extract them in file order.
    pub fn validate(df: &DataFrame) -> Result<RawSeries> {
        let missing = Self::missing_columns(df);
        if !missing.is_empty() {
            return Err(StockcastError::MissingColumns { missing });
        }

        let dates = Self::date_cells(df)?;
        let closes = Self::close_values(df)?;

        let records = dates
            .into_iter()
            .zip(closes)
            .enumerate()
            .map(|(i, (date, close))| PriceRecord { row: i + 1, date, close })
            .collect();

        Ok(RawSeries { records })
    }

    /// Names of required columns absent from `df`
    pub fn missing_columns(df: &DataFrame) -> Vec<String> {
        let columns = df.get_column_names();
        RequiredColumn::all()
            .into_iter()
            .filter(|required| !columns.iter().any(|col| col.as_str() == required.as_str()))
            .map(|required| required.as_str().to_string())
            .collect()
    }

    fn date_cells(df: &DataFrame) -> Result<Vec<Option<String>>> {
        let dates = df
            .column(RequiredColumn::Date.as_str())?
            .cast(&DataType::String)?;
        let dates = dates.str()?;
        Ok(dates.into_iter().map(|v| v.map(str::to_string)).collect())
    }

    fn close_values(df: &DataFrame) -> Result<Vec<Option<f64>>> {
        let column = df.column(RequiredColumn::Close.as_str())?;

        if matches!(
            column.dtype(),
            DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32
        ) {
            let closes = column.cast(&DataType::Float64)?;
            let closes = closes.f64()?;
            return Ok(closes
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect());
        }

        // Text (or anything else): parse cell by cell so junk is reported, not nulled
        let closes = column.cast(&DataType::String)?;
        let closes = closes.str()?;
        closes
            .into_iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                None => Ok(None),
                Some(text) => Self::parse_close(i + 1, text),
            })
            .collect()
    }

    fn parse_close(row: usize, text: &str) -> Result<Option<f64>> {
        let trimmed = text.trim();
        if MISSING_MARKERS.contains(&trimmed.to_ascii_lowercase().as_str()) {
            return Ok(None);
        }
        let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
        match cleaned.parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(None),
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(StockcastError::CloseParse {
                row,
                value: text.to_string(),
            }),
        }
    }

    /// Check for null values in every column
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_validate_good_data() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
            "Open" => &[99.0, 101.0, 102.0],
            "Close" => &[100.5, 102.0, 103.0],
        }
        .unwrap();

        let series = DataValidator::validate(&df).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.records[0].date.as_deref(), Some("2024-01-01"));
        assert_eq!(series.records[2].close, Some(103.0));
        assert_eq!(series.records[2].row, 3);
    }

    #[test]
    fn test_validate_missing_close() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "Open" => &[100.0, 101.0],
        }
        .unwrap();

        match DataValidator::validate(&df) {
            Err(StockcastError::MissingColumns { missing }) => assert_eq!(missing, vec!["Close"]),
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let df = df! {
            "date" => &["2024-01-01"],
            "close" => &[100.0],
        }
        .unwrap();

        match DataValidator::validate(&df) {
            Err(StockcastError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["Date", "Close"])
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_close_and_nulls() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
            "Close" => &[Some(100i64), None, Some(102)],
        }
        .unwrap();

        let series = DataValidator::validate(&df).unwrap();
        let closes: Vec<_> = series.records.iter().map(|r| r.close).collect();
        assert_eq!(closes, vec![Some(100.0), None, Some(102.0)]);
        assert_eq!(DataValidator::check_nulls(&df), vec![("Close".to_string(), 1)]);
    }

    #[test]
    fn test_text_close_markers_and_thousands() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
            "Close" => &["1,234.5", "N/A", "", "99"],
        }
        .unwrap();

        let series = DataValidator::validate(&df).unwrap();
        let closes: Vec<_> = series.records.iter().map(|r| r.close).collect();
        assert_eq!(closes, vec![Some(1234.5), None, None, Some(99.0)]);
    }

    #[test]
    fn test_text_close_junk_is_reported() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "Close" => &["100.0", "abc"],
        }
        .unwrap();

        match DataValidator::validate(&df) {
            Err(StockcastError::CloseParse { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected CloseParse, got {:?}", other),
        }
    }
}
