pub mod client;
pub mod controller;
pub mod notice;
pub mod page;
pub mod print;
pub mod render;

pub use crate::domain::language::Language;
pub use crate::domain::model::{AnalysisReport, AnalyzeRequest, AnalyzeResponse};
pub use crate::domain::ports::{AnalysisService, ConfigProvider, Storage};
pub use crate::utils::error::Result;
