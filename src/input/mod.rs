pub mod labels;
pub mod prompt;

pub use labels::{ui_labels, UI_LABELS};
pub use prompt::{is_language_code, prompt_record, PromptField, Prompted, TranslateInput};

use crate::csv_processor::LabelFileReader;
use crate::utils::Result;
use std::path::PathBuf;

/// Where the strings to translate come from.
#[derive(Debug, Clone, Default)]
pub enum InputSource {
    /// The built-in UI label list.
    #[default]
    UiLabels,
    /// First column of a headerless file.
    File(PathBuf),
    Items(Vec<String>),
}

impl InputSource {
    /// Materializes the ordered sequence of strings; each is translated once.
    pub fn load(self) -> Result<Vec<String>> {
        match self {
            InputSource::UiLabels => Ok(ui_labels()),
            InputSource::File(path) => LabelFileReader::new(path).read_labels(),
            InputSource::Items(items) => Ok(items),
        }
    }
}

