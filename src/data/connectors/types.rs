/// Columns the pipeline needs, matched by exact name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Date,
    Close,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Close => "Close",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Date, Self::Close]
    }
}

/// Tabular preview for UI display
#[derive(Debug, Clone, Default)]
pub struct DataPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataPreview {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
