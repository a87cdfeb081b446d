//! Shared helpers for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use csv_label_translator::{
    PairWriter, PairWriterOptions, Result, TranslationResult, Translator, TranslatorError,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

/// Deterministic in-memory translator that records every call it receives.
#[derive(Default)]
pub struct StubTranslator {
    calls: Mutex<Vec<(Vec<String>, String)>>,
    extra_segments: HashMap<String, Vec<String>>,
    empty_for: HashSet<String>,
    fail_on_call: Option<usize>,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the n-th call (1-based) fail with a service error.
    pub fn failing_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    /// Returns these segments instead of the default one for `text`.
    pub fn with_segments(mut self, text: &str, segments: &[&str]) -> Self {
        self.extra_segments.insert(
            text.to_string(),
            segments.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_no_segments_for(mut self, text: &str) -> Self {
        self.empty_for.insert(text.to_string());
        self
    }

    pub fn translation_of(text: &str, target: &str) -> String {
        format!("{} [{}]", text.to_uppercase(), target)
    }

    pub fn calls(&self) -> Vec<(Vec<String>, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<TranslationResult>> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((texts.to_vec(), target_language.to_string()));
            calls.len()
        };

        if self.fail_on_call == Some(call_number) {
            return Err(TranslatorError::service(403, "Daily Limit Exceeded"));
        }

        let mut results = Vec::new();
        for text in texts {
            if self.empty_for.contains(text) {
                continue;
            }
            match self.extra_segments.get(text) {
                Some(segments) => {
                    for segment in segments {
                        results.push(TranslationResult::new(text.clone(), segment.clone()));
                    }
                }
                None => results.push(TranslationResult::new(
                    text.clone(),
                    Self::translation_of(text, target_language),
                )),
            }
        }
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn raw_writer(path: &Path) -> PairWriter {
    PairWriter::new(path, PairWriterOptions::default())
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
