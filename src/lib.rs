pub mod csv_processor;
pub mod input;
pub mod translation;
pub mod utils;

pub use csv_processor::{LabelFileReader, PairWriter, PairWriterOptions};
pub use input::{InputSource, TranslateInput};
pub use translation::{
    BatchExporter, ExportReport, GoogleTranslateClient, ItemFailure, TranslationClientConfig,
    TranslationRequest, TranslationResult, Translator,
};
pub use utils::{AppConfig, ErrorKind, FailurePolicy, OutputQuoting, Result, TranslatorError};
