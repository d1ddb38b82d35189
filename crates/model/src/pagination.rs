use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Query for paging items from newest to oldest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize, IntoParams)]
pub struct PageQuery {
    /// Return only items with ID smaller than this.
    pub max_id: Option<i64>,
    /// Maximum item count. Default is 10.
    pub count: Option<i64>,
}

/// Validated [PageQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub max_id: Option<i64>,
    pub count: i64,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PageQueryError {
    #[error("Count must be between 1 and {max}, count: {count}")]
    InvalidCount { count: i64, max: i64 },
}

impl PageQuery {
    pub const DEFAULT_COUNT: i64 = 10;

    pub fn new(max_id: Option<i64>, count: Option<i64>) -> Self {
        Self { max_id, count }
    }

    pub fn validate(&self, max_count: i64) -> Result<Page, PageQueryError> {
        let count = self.count.unwrap_or(Self::DEFAULT_COUNT.min(max_count));
        if count < 1 || count > max_count {
            return Err(PageQueryError::InvalidCount {
                count,
                max: max_count,
            });
        }

        Ok(Page {
            max_id: self.max_id,
            count,
        })
    }
}
