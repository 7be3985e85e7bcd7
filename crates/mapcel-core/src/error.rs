use mapcel_ingest::IngestError;
use mapcel_model::ModelError;
use thiserror::Error;

/// Terminal failure for one input file. No dataset is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("error parsing CSV: {0}")]
    Parse(#[from] IngestError),

    #[error("error processing CSV: {0}")]
    Process(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
