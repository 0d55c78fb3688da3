// CipherWrite Core Services
// Text processing, detection engine, configuration and presentation

pub mod text_processor;
pub mod config_store;
pub mod detection;
pub mod input;
pub mod report;

pub use text_processor::*;
pub use config_store::*;
pub use input::{read_input_file, InputError};
pub use report::{Report, Suggestion};

// Re-export detection entry points
pub use detection::{
    analyze,
    AnalysisError,
    Analyzer,
    EXAMPLE_TEXT,
};
