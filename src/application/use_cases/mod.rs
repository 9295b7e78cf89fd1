pub mod dataset_analyzer;
pub mod upload_session;

pub use dataset_analyzer::DatasetAnalyzer;
pub use upload_session::{UploadOutcome, UploadSession, UploadTicket};
