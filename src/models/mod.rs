pub mod filter;
pub mod lookback;
pub mod report;
pub mod repository;

pub use filter::TrendFilter;
pub use lookback::{LookbackDays, LookbackWindow};
pub use report::{ReportRequest, ReportResponse};
pub use repository::{RepositoryRecord, SearchResponse};
