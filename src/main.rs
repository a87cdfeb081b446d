use clap::{Args, Parser, Subcommand};
use csv_label_translator::input::{is_language_code, prompt_record};
use csv_label_translator::utils::{exit_code_for, ConfigOverrides, LoggingConfig};
use csv_label_translator::{
    AppConfig, BatchExporter, FailurePolicy, GoogleTranslateClient, InputSource, PairWriter,
    PairWriterOptions, TranslateInput, TranslationClientConfig, Translator, TranslatorError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "csv-label-translator", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Exit without waiting for Enter
    #[arg(long, global = true)]
    no_pause: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate a list of labels and export `source,translated` lines (default)
    Batch(BatchArgs),
    /// Prompt for one text and target language, then translate it and back to English
    Interactive,
}

#[derive(Debug, Default, Args)]
struct BatchArgs {
    /// Read labels from the first column of this file instead of the built-in list
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long)]
    output: Option<PathBuf>,

    /// Target language code, e.g. `pt`
    #[arg(long)]
    target: Option<String>,

    /// Source language code; detected by the service when omitted
    #[arg(long)]
    source: Option<String>,

    /// What to do when one label fails: `abort` or `skip`
    #[arg(long = "on-error")]
    on_error: Option<FailurePolicy>,

    /// Quote fields that contain commas, quotes or line breaks
    #[arg(long)]
    quoted: bool,

    /// Prefix cells starting with `=`, `+`, `-` or `@` with a quote
    #[arg(long)]
    sanitize: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = AppConfig::load(&cli.config);
    let mut config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };

    init_logging(&config.logging)?;
    match loaded {
        Ok(Some(_)) => tracing::info!(path = %cli.config, "Loaded configuration"),
        Ok(None) => tracing::debug!(path = %cli.config, "No config file, using defaults"),
        Err(e) => tracing::warn!(path = %cli.config, error = %e, "Ignoring unreadable config file"),
    }

    println!("Translate Sample");
    println!("================");

    let errors = match cli.command {
        Some(Command::Interactive) => match run_interactive(&config).await {
            Ok(()) => Vec::new(),
            Err(e) => vec![e],
        },
        Some(Command::Batch(args)) => run_batch(&mut config, args).await,
        None => run_batch(&mut config, BatchArgs::default()).await,
    };

    for e in &errors {
        println!("ERROR: {}", e);
    }

    if !cli.no_pause {
        wait_for_enter();
    }

    Ok(ExitCode::from(exit_code_for(&errors) as u8))
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("csv_label_translator={}", logging.level).parse()?);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

impl BatchArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output: self.output.clone(),
            target_lang: self.target.clone(),
            source_lang: self.source.clone(),
            failure_policy: self.on_error,
            quoted: self.quoted,
            sanitize_cells: self.sanitize,
        }
    }
}

fn build_client(config: &AppConfig) -> Result<GoogleTranslateClient, TranslatorError> {
    GoogleTranslateClient::new(TranslationClientConfig::from_app_config(config)?)
}

/// Returns every failure to render; an empty list means success.
async fn run_batch(config: &mut AppConfig, args: BatchArgs) -> Vec<TranslatorError> {
    config.apply_overrides(args.overrides());

    let target = config.translation.target_lang.clone();
    if !is_language_code(&target) {
        return vec![TranslatorError::InputError(format!(
            "'{}' is not a language code",
            target
        ))];
    }

    let source = args
        .input
        .map(InputSource::File)
        .unwrap_or(InputSource::UiLabels);
    let inputs = match source.load() {
        Ok(inputs) => inputs,
        Err(e) => return vec![e],
    };

    let client = match build_client(config) {
        Ok(client) => client,
        Err(e) => return vec![e],
    };

    let writer = PairWriter::new(
        config.output.path.clone(),
        PairWriterOptions {
            quoting: config.output.quoting,
            sanitize_cells: config.output.sanitize_cells,
        },
    );
    let exporter =
        BatchExporter::new(&client, target).with_policy(config.translation.failure_policy);

    match exporter.run(&inputs, writer).await {
        Ok(report) => {
            println!("{}", report.summary());
            report.into_errors()
        }
        Err(e) => vec![e],
    }
}

async fn run_interactive(config: &AppConfig) -> Result<(), TranslatorError> {
    let client = build_client(config)?;

    let input: TranslateInput = {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut writer = std::io::stdout();
        prompt_record(&mut reader, &mut writer)?
    };

    println!("Translating to '{}' ...", input.target_language);
    let results = client.translate_request(&input.into_request()).await?;
    for result in &results {
        println!("translation :{}", result.translated_text);
    }

    println!("Translating to English ...");
    let translations: Vec<String> = results.into_iter().map(|r| r.translated_text).collect();
    for result in client.translate(&translations, "en").await? {
        println!("translation :{}", result.translated_text);
    }

    Ok(())
}

fn wait_for_enter() {
    println!("Press Enter to continue...");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
