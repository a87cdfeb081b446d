use crate::translation::TranslationRequest;
use crate::utils::Result;
use std::io::{BufRead, Write};

/// One prompted attribute of a record: a field name, the label shown to the
/// user and a parser that stores the typed value. The record's `Default`
/// supplies the value kept when the user enters an empty line.
pub struct PromptField<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub parse: fn(&mut T, &str) -> std::result::Result<(), String>,
}

/// A record that can be filled in from the console.
pub trait Prompted: Default + 'static {
    const DESCRIPTION: &'static str;

    fn fields() -> &'static [PromptField<Self>];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateInput {
    pub source_text: String,
    pub target_language: String,
}

impl Default for TranslateInput {
    fn default() -> Self {
        Self {
            source_text: "Who ate my candy?".to_string(),
            target_language: "fr".to_string(),
        }
    }
}

impl TranslateInput {
    pub fn into_request(self) -> TranslationRequest {
        TranslationRequest::new(self.source_text, self.target_language)
    }
}

const TRANSLATE_INPUT_FIELDS: &[PromptField<TranslateInput>] = &[
    PromptField {
        name: "source_text",
        label: "text to translate",
        parse: parse_source_text,
    },
    PromptField {
        name: "target_language",
        label: "target language",
        parse: parse_target_language,
    },
];

impl Prompted for TranslateInput {
    const DESCRIPTION: &'static str = "input";

    fn fields() -> &'static [PromptField<Self>] {
        TRANSLATE_INPUT_FIELDS
    }
}

fn parse_source_text(input: &mut TranslateInput, raw: &str) -> std::result::Result<(), String> {
    input.source_text = raw.to_string();
    Ok(())
}

fn parse_target_language(
    input: &mut TranslateInput,
    raw: &str,
) -> std::result::Result<(), String> {
    let code = raw.trim();
    if !is_language_code(code) {
        return Err(format!("'{}' is not a language code", code));
    }
    input.target_language = code.to_string();
    Ok(())
}

/// Accepts `fr`, `haw`, `zh-CN`, `mni-Mtei` style codes.
pub fn is_language_code(code: &str) -> bool {
    let mut parts = code.splitn(2, '-');
    let primary = parts.next().unwrap_or_default();
    let primary_ok =
        (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());

    let suffix_ok = match parts.next() {
        None => true,
        Some(suffix) => {
            (2..=4).contains(&suffix.len()) && suffix.chars().all(|c| c.is_ascii_alphanumeric())
        }
    };

    primary_ok && suffix_ok
}

/// Builds a `T` by asking for every field in turn. An empty line, or end of
/// input, keeps the default; an unparsable value is asked for again.
pub fn prompt_record<T, R, W>(reader: &mut R, writer: &mut W) -> Result<T>
where
    T: Prompted,
    R: BufRead,
    W: Write,
{
    let mut record = T::default();

    writeln!(writer, "Please enter values for the {}:", T::DESCRIPTION)?;
    for field in T::fields() {
        request_user_input(field, &mut record, reader, writer)?;
    }
    writeln!(writer)?;

    Ok(record)
}

fn request_user_input<T, R, W>(
    field: &PromptField<T>,
    record: &mut T,
    reader: &mut R,
    writer: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "\t{}: ", field.label)?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        let input = line.trim_end_matches(['\r', '\n']);

        if read == 0 || input.is_empty() {
            return Ok(());
        }

        match (field.parse)(record, input) {
            Ok(()) => return Ok(()),
            Err(reason) => {
                tracing::debug!(field = field.name, %reason, "Rejected console input");
                writeln!(writer, "Please enter a valid value!")?;
            }
        }
    }
}
