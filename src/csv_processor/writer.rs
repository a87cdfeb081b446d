use crate::utils::{sanitize_cell, OutputQuoting, Result, TranslatorError};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct PairWriterOptions {
    pub quoting: OutputQuoting,
    pub sanitize_cells: bool,
}

/// Writes `source,translated` lines, one per segment, without a header row.
pub struct PairWriter {
    path: PathBuf,
    options: PairWriterOptions,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl PairWriter {
    pub fn new(path: impl Into<PathBuf>, options: PairWriterOptions) -> Self {
        Self {
            path: path.into(),
            options,
            writer: None,
            rows_written: 0,
        }
    }

    /// Creates the output file, truncating anything left by an earlier run.
    pub fn initialize(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let quote_style = match self.options.quoting {
            OutputQuoting::Raw => QuoteStyle::Never,
            OutputQuoting::Quoted => QuoteStyle::Necessary,
        };
        let writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(false)
            .quote_style(quote_style)
            .terminator(platform_terminator())
            .from_writer(file);
        self.writer = Some(writer);
        self.rows_written = 0;
        Ok(())
    }

    pub fn write_pair(&mut self, source_text: &str, translated_text: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or(TranslatorError::WriterNotInitialized)?;

        if self.options.sanitize_cells {
            writer.write_record([sanitize_cell(source_text), sanitize_cell(translated_text)])?;
        } else {
            writer.write_record([source_text, translated_text])?;
        }
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flushes and closes the file, returning the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(self.rows_written)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(windows)]
fn platform_terminator() -> Terminator {
    Terminator::CRLF
}

#[cfg(not(windows))]
fn platform_terminator() -> Terminator {
    Terminator::Any(b'\n')
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    fn write_and_read(options: PairWriterOptions, pairs: &[(&str, &str)]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut writer = PairWriter::new(&path, options);
        writer.initialize().unwrap();
        for (source, translated) in pairs {
            writer.write_pair(source, translated).unwrap();
        }
        assert_eq!(writer.finish().unwrap(), pairs.len());
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn raw_mode_joins_fields_without_escaping() {
        let content = write_and_read(
            PairWriterOptions::default(),
            &[("Settings", "Configurações"), ("Start, End", "Início, Fim")],
        );
        assert_eq!(content, "Settings,Configurações\nStart, End,Início, Fim\n");
    }

    #[test]
    fn quoted_mode_escapes_only_when_needed() {
        let content = write_and_read(
            PairWriterOptions {
                quoting: OutputQuoting::Quoted,
                sanitize_cells: false,
            },
            &[("Settings", "Configurações"), ("Start, End", "Início, Fim")],
        );
        assert_eq!(
            content,
            "Settings,Configurações\n\"Start, End\",\"Início, Fim\"\n"
        );
    }

    #[test]
    fn sanitizing_prefixes_formula_cells() {
        let content = write_and_read(
            PairWriterOptions {
                quoting: OutputQuoting::Raw,
                sanitize_cells: true,
            },
            &[("=1+1", "-2")],
        );
        assert_eq!(content, "'=1+1,'-2\n");
    }

    #[test]
    fn writing_before_initialize_fails() {
        let mut writer = PairWriter::new("unused.csv", PairWriterOptions::default());
        let err = writer.write_pair("a", "b").unwrap_err();
        assert!(matches!(err, TranslatorError::WriterNotInitialized));
    }

    #[test]
    fn initialize_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,line\nanother,line\n").unwrap();

        let mut writer = PairWriter::new(&path, PairWriterOptions::default());
        writer.initialize().unwrap();
        writer.write_pair("OK", "OK").unwrap();
        writer.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "OK,OK\n");
    }
}
