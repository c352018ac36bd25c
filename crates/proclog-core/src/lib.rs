pub mod aggregation;
pub mod classifier;
pub mod error;
pub mod ingestion;
pub mod pipelines;
pub mod report;
pub mod types;
pub mod validation;

pub use aggregation::{aggregate, ProcessMap};
pub use classifier::{classify, ProcessFlag, Thresholds};
pub use error::{PipelineError, RecordError, Result};
pub use pipelines::{execute_pipeline, PipelineConfig, PipelineSummary};
pub use types::{LogRecord, Marker, ProcessState, RawRecord};
