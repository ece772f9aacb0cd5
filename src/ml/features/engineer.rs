use crate::data::dates::parse_date;
use crate::error::{Result, StockcastError};
use crate::types::{FeaturizedRow, RawSeries};
use chrono::NaiveDateTime;
use polars::df;
use polars::prelude::*;

/// Replace each missing value with the latest preceding present one.
/// Leading gaps stay missing.
pub fn forward_fill(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut last = None;
    values
        .iter()
        .map(|v| {
            if v.is_some() {
                last = *v;
            }
            last
        })
        .collect()
}

/// Date-ordered lag rows ready for splitting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedSeries {
    pub rows: Vec<FeaturizedRow>,
}

impl PreparedSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn prev_closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.prev_close).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close).collect()
    }

    /// Most recent close, the natural default for the next prediction
    pub fn latest_close(&self) -> Option<f64> {
        self.rows.last().map(|r| r.close)
    }

    /// `Date`, `Close`, `PrevClose` as a DataFrame
    pub fn to_frame(&self) -> Result<DataFrame> {
        let dates: Vec<String> = self.rows.iter().map(|r| format_date(&r.date)).collect();
        let df = df! {
            "Date" => dates,
            "Close" => self.closes(),
            "PrevClose" => self.prev_closes(),
        }?;
        Ok(df)
    }

    /// Last `n` rows as a DataFrame, for previews
    pub fn tail_frame(&self, n: usize) -> Result<DataFrame> {
        Ok(self.to_frame()?.tail(Some(n)))
    }
}

fn format_date(date: &NaiveDateTime) -> String {
    if date.time() == chrono::NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub struct FeatureEngineer {
    min_usable_rows: usize,
}

impl Default for FeatureEngineer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl FeatureEngineer {
    pub fn new(min_usable_rows: usize) -> Self {
        Self { min_usable_rows }
    }

    /// Parse dates, sort, forward-fill `Close`, then build `PrevClose`.
    pub fn prepare(&self, raw: RawSeries) -> Result<PreparedSeries> {
        let mut dated = Vec::with_capacity(raw.len());
        for record in raw.records {
            let date = record
                .date
                .as_deref()
                .and_then(parse_date)
                .ok_or_else(|| StockcastError::DateParse {
                    row: record.row,
                    value: record.date.clone().unwrap_or_default(),
                })?;
            dated.push((date, record.row, record.close));
        }

        // Stable: equal dates keep file order
        dated.sort_by_key(|(date, _, _)| *date);

        let closes: Vec<Option<f64>> = dated.iter().map(|(_, _, close)| *close).collect();
        let filled = forward_fill(&closes);

        // NO LOOKAHEAD: each row only sees the close before it
        let rows = Self::lag_rows(&dated, &filled);

        let dropped = dated.len().saturating_sub(rows.len() + 1);
        if dropped > 0 {
            log::warn!("Dropped {} rows with no close price to fill from", dropped);
        }

        if rows.len() < self.min_usable_rows {
            return Err(StockcastError::EmptySeries {
                usable: rows.len(),
                required: self.min_usable_rows,
            });
        }

        log::debug!("Prepared {} lag rows from {} records", rows.len(), dated.len());
        Ok(PreparedSeries { rows })
    }

    fn lag_rows(
        dated: &[(NaiveDateTime, usize, Option<f64>)],
        filled: &[Option<f64>],
    ) -> Vec<FeaturizedRow> {
        (1..dated.len())
            .filter_map(|i| match (filled[i - 1], filled[i]) {
                (Some(prev_close), Some(close)) => Some(FeaturizedRow {
                    source_row: dated[i].1,
                    date: dated[i].0,
                    prev_close,
                    close,
                }),
                _ => None,
            })
            .collect()
    }
}
