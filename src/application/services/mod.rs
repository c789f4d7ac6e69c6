mod extraction_prompt;
mod extraction_service;
mod persistence_service;
mod response_parser;
mod submission_service;
mod transcription_service;

pub use extraction_prompt::{EXTRACTION_SYSTEM_INSTRUCTION, build_extraction_prompt};
pub use extraction_service::ExtractionService;
pub use persistence_service::{FeaturePersistenceService, rows_for_extraction};
pub use response_parser::{
    BalancedBraceLocator, GreedyBraceLocator, JsonSpanLocator, ParseError, ParsedExtraction,
    parse_extraction,
};
pub use submission_service::{AudioSubmissionService, AudioUpload, SubmissionOutcome};
pub use transcription_service::{AudioAnalysis, TranscriptionService};
