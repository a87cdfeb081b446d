use crate::csv_processor::PairWriter;
use crate::translation::Translator;
use crate::utils::{FailurePolicy, Result, TranslatorError};
use std::path::PathBuf;
use uuid::Uuid;

/// A single item that could not be translated.
#[derive(Debug)]
pub struct ItemFailure {
    /// 1-based position of the item in the input sequence.
    pub index: usize,
    pub source_text: String,
    pub error: TranslatorError,
}

#[derive(Debug)]
pub struct ExportReport {
    pub run_id: String,
    pub output_path: PathBuf,
    pub items_total: usize,
    pub items_submitted: usize,
    pub lines_written: usize,
    pub failures: Vec<ItemFailure>,
    /// Write or flush failure on the output file after it was opened. Ends the run.
    pub output_error: Option<TranslatorError>,
    pub aborted: bool,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.output_error.is_none()
    }

    pub fn items_translated(&self) -> usize {
        self.items_submitted - self.failures.len()
    }

    /// One-line outcome for the console.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Wrote {} lines to {}",
                self.lines_written,
                self.output_path.display()
            )
        } else {
            format!(
                "Translated {} of {} items, wrote {} lines to {}",
                self.items_translated(),
                self.items_total,
                self.lines_written,
                self.output_path.display()
            )
        }
    }

    /// Every failure of the run in the order it happened: item failures
    /// first, then the output error that ended the run, if any.
    pub fn into_errors(self) -> Vec<TranslatorError> {
        let run_id = self.run_id;
        let mut errors: Vec<TranslatorError> = self
            .failures
            .into_iter()
            .map(|failure| {
                tracing::debug!(
                    run_id = %run_id,
                    index = failure.index,
                    source = %failure.source_text,
                    "Reporting failure"
                );
                failure.error
            })
            .collect();
        errors.extend(self.output_error);
        errors
    }
}

/// Translates an ordered list of strings one at a time and writes every
/// returned segment as a `source,translated` line.
pub struct BatchExporter<'a> {
    translator: &'a dyn Translator,
    target_language: String,
    policy: FailurePolicy,
    run_id: String,
}

impl<'a> BatchExporter<'a> {
    pub fn new(translator: &'a dyn Translator, target_language: impl Into<String>) -> Self {
        Self {
            translator,
            target_language: target_language.into(),
            policy: FailurePolicy::default(),
            run_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Only a failure to create the output file ends with `Err`. Translation
    /// failures are collected per the failure policy; a later write failure
    /// stops the run and is kept alongside them in the report.
    pub async fn run(&self, inputs: &[String], mut writer: PairWriter) -> Result<ExportReport> {
        writer.initialize()?;

        let run_id = self.run_id.as_str();
        let output_path = writer.path().to_path_buf();
        let mut failures = Vec::new();
        let mut output_error = None;
        let mut items_submitted = 0;
        let mut aborted = false;

        tracing::info!(
            run_id = %run_id,
            provider = self.translator.provider_name(),
            target = %self.target_language,
            items = inputs.len(),
            output = %output_path.display(),
            "Starting batch translation"
        );

        for (i, source_text) in inputs.iter().enumerate() {
            let index = i + 1;
            items_submitted += 1;

            match self
                .translator
                .translate(std::slice::from_ref(source_text), &self.target_language)
                .await
            {
                Ok(segments) => {
                    if segments.is_empty() {
                        tracing::warn!(run_id = %run_id, index, "Service returned no translation");
                    }

                    let written = segments
                        .iter()
                        .try_for_each(|s| writer.write_pair(source_text, &s.translated_text))
                        .and_then(|()| writer.flush());

                    if let Err(e) = written {
                        tracing::error!(
                            run_id = %run_id,
                            index,
                            error = %e,
                            "Failed to write output, stopping"
                        );
                        output_error = Some(e);
                        aborted = true;
                        break;
                    }

                    tracing::debug!(
                        run_id = %run_id,
                        index,
                        segments = segments.len(),
                        "Item translated"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        run_id = %run_id,
                        index,
                        source = %source_text,
                        error = %e,
                        "Failed to translate item"
                    );
                    failures.push(ItemFailure {
                        index,
                        source_text: source_text.clone(),
                        error: e,
                    });

                    if self.policy == FailurePolicy::Abort {
                        aborted = true;
                        break;
                    }
                }
            }
        }

        let lines_written = writer.rows_written();
        if let Err(e) = writer.finish() {
            if output_error.is_none() {
                output_error = Some(e);
            }
        }

        tracing::info!(
            run_id = %run_id,
            items_submitted,
            lines_written,
            failures = failures.len(),
            aborted,
            "Batch translation finished"
        );

        Ok(ExportReport {
            run_id: self.run_id.clone(),
            output_path,
            items_total: inputs.len(),
            items_submitted,
            lines_written,
            failures,
            output_error,
            aborted,
        })
    }
}
