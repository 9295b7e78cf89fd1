pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::dataset_analyzer::DatasetAnalyzer;
pub use application::use_cases::upload_session::{UploadOutcome, UploadSession, UploadTicket};
pub use domain::dataset::{DatasetReport, ParsedTable};
pub use domain::error::{AppError, Result};
pub use infrastructure::api::{FraudApi, FraudApiClient};
pub use infrastructure::config::AppConfig;
