use crate::utils::{Result, TranslatorError};
use csv::StringRecord;
use std::path::PathBuf;

/// Reads the strings to translate from a headerless file, taking the first
/// field of every record. Plain one-label-per-line text files read the same way.
pub struct LabelFileReader {
    path: PathBuf,
}

impl LabelFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_labels(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Err(TranslatorError::InputError(format!(
                "input file not found: {}",
                self.path.display()
            )));
        }

        let file = std::fs::File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut labels = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(label) = first_field(&record) {
                labels.push(label);
            }
        }

        tracing::debug!(path = %self.path.display(), count = labels.len(), "Read input labels");
        Ok(labels)
    }
}

fn first_field(record: &StringRecord) -> Option<String> {
    record
        .get(0)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_first_column_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Settings").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Shift  ,ignored").unwrap();
        writeln!(file, "\"Start, End\"").unwrap();

        let labels = LabelFileReader::new(file.path()).read_labels().unwrap();
        assert_eq!(labels, vec!["Settings", "Shift", "Start, End"]);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = LabelFileReader::new("/no/such/labels.txt")
            .read_labels()
            .unwrap_err();
        assert!(matches!(err, TranslatorError::InputError(_)));
    }
}
