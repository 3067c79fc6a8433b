use crate::error::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Repositories must have strictly more stars than this
pub const MIN_STARS: u32 = 10;

/// Repositories must have strictly more forks than this
pub const MIN_FORKS: u32 = 2;

/// Structural search qualifiers that bias results toward active, recent projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendFilter {
    pub min_stars: u32,
    pub min_forks: u32,
    pub created_after: NaiveDate,
}

impl TrendFilter {
    /// Filter for repositories created within `days` calendar days before `today`
    pub fn for_window(days: i64, today: NaiveDate) -> Result<Self> {
        let created_after = Duration::try_days(days)
            .and_then(|lookback| today.checked_sub_signed(lookback))
            .ok_or_else(|| Error::InputCoercion {
                msg: format!("days is out of range: {days}"),
            })?;

        Ok(Self {
            min_stars: MIN_STARS,
            min_forks: MIN_FORKS,
            created_after,
        })
    }

    /// The `q` parameter: free text followed by the qualifiers, matched in name or description
    pub fn search_expression(&self, query: &str) -> String {
        format!(
            "{query} stars:>{} forks:>{} created:>{} in:name,description",
            self.min_stars,
            self.min_forks,
            self.created_after.format("%Y-%m-%d"),
        )
    }
}
