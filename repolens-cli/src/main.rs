//! RepoLens command-line entry point
//!
//! Reads a repository snapshot JSON file, runs the extraction pipeline and
//! either prints the analysis record or writes the perspective documents.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use repolens_core::{parse_timestamp, AnalysisResult, Analyzer, RawSnapshot, UserContext};
use repolens_render::{DocumentRenderer, PageKey};
use repolens_utils::logging::{init_logging, LogLevel, LoggerConfig};
use std::path::{Path, PathBuf};

use crate::config::RepolensConfig;

const ANALYSIS_FILE: &str = "analysis.json";

#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "RepoLens - Five perspectives on one repository")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a snapshot and emit the analysis record as JSON
    Analyze {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Configuration file (TOML, JSON or YAML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Render the perspective documents for a snapshot
    Generate {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Output directory for the HTML files
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        /// Render a single document instead of all five
        #[arg(short = 'p', long)]
        page: Option<PageKey>,

        /// Configuration file (TOML, JSON or YAML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Also write analysis.json next to the documents
        #[arg(long)]
        write_analysis: bool,

        /// Link hosted web fonts instead of using system fonts
        #[arg(long)]
        web_fonts: bool,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// List the documents and their audiences
    Pages,
}

/// User context supplied on the command line
#[derive(Args, Debug, Default)]
struct ContextArgs {
    /// Industry the project serves
    #[arg(long)]
    industry: Option<String>,

    /// Use cases (newline, comma or semicolon separated)
    #[arg(long)]
    use_cases: Option<String>,

    /// Headline metric line, quoted on the executive document
    #[arg(long)]
    metrics: Option<String>,

    /// Personas (newline, comma or semicolon separated)
    #[arg(long)]
    personas: Option<String>,

    /// Context file (TOML, JSON or YAML) filling fields not given as flags
    #[arg(long = "context")]
    context_file: Option<PathBuf>,

    /// Measure recency against this date instead of now (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<String>,
}

impl ContextArgs {
    /// Flags first, then the context file, then the config defaults
    fn resolve(&self, defaults: &UserContext) -> Result<UserContext> {
        let from_file = match &self.context_file {
            Some(path) => UserContext::from_path(path)
                .with_context(|| format!("failed to load context file {}", path.display()))?,
            None => UserContext::default(),
        };

        let from_flags = UserContext::new()
            .with_industry(self.industry.clone().unwrap_or_default())
            .with_use_cases(self.use_cases.clone().unwrap_or_default())
            .with_metrics(self.metrics.clone().unwrap_or_default())
            .with_personas(self.personas.clone().unwrap_or_default());

        Ok(from_flags.or_defaults(&from_file).or_defaults(defaults))
    }

    fn analyzer(&self) -> Result<Analyzer> {
        match &self.as_of {
            Some(value) => match parse_timestamp(value) {
                Some(instant) => Ok(Analyzer::at(instant)),
                None => bail!("invalid --as-of date '{value}', expected RFC 3339 or YYYY-MM-DD"),
            },
            None => Ok(Analyzer::new()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { snapshot, output, config, context } => {
            let settings = load_settings(config.as_deref(), cli.log_level)?;
            let analysis = run_analysis(&snapshot, &context, &settings)?;
            let json = serde_json::to_string_pretty(&analysis)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Analysis saved to: {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Generate {
            snapshot,
            output_dir,
            page,
            config,
            write_analysis,
            web_fonts,
            context,
        } => {
            let settings = load_settings(config.as_deref(), cli.log_level)?;
            let analysis = run_analysis(&snapshot, &context, &settings)?;
            let out_dir = output_dir.unwrap_or_else(|| settings.output_dir.clone());
            let renderer = DocumentRenderer::new()
                .with_web_fonts(settings.web_fonts || web_fonts)
                .with_copy_buttons(settings.copy_buttons);

            let written = match page {
                Some(key) => {
                    let html = renderer.generate(key, &analysis);
                    vec![repolens_utils::write_text_file(&out_dir, &key.file_name(), &html)
                        .with_context(|| format!("failed to write {} document", key))?]
                }
                None => renderer
                    .generate_all(&analysis)
                    .write_to_dir(&out_dir)
                    .with_context(|| format!("failed to write documents to {}", out_dir.display()))?,
            };

            if write_analysis || settings.write_analysis {
                let json = serde_json::to_string_pretty(&analysis)?;
                repolens_utils::write_text_file(&out_dir, ANALYSIS_FILE, &json)
                    .with_context(|| format!("failed to write {ANALYSIS_FILE}"))?;
            }

            println!("Generated {} document(s) for {}", written.len(), analysis.meta.full_name);
            for path in &written {
                println!("  {}", path.display());
            }
        }

        Commands::Pages => {
            for key in PageKey::all() {
                println!("{:<12} {:<12} {}", key.as_str(), key.label(), key.audience());
            }
        }
    }

    Ok(())
}

/// Load the config file and install the tracing subscriber
fn load_settings(path: Option<&Path>, log_level: Option<LogLevel>) -> Result<RepolensConfig> {
    let settings = RepolensConfig::load(path).context("failed to load configuration")?;

    init_logging(LoggerConfig {
        level: log_level.unwrap_or(settings.log_level),
        colored_output: false,
        ..Default::default()
    })?;
    if let Some(path) = path {
        tracing::debug!("loaded configuration from {}", path.display());
    }

    Ok(settings)
}

fn run_analysis(snapshot: &Path, context: &ContextArgs, settings: &RepolensConfig) -> Result<AnalysisResult> {
    let raw = RawSnapshot::from_path(snapshot)
        .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;
    let user_context = context.resolve(&settings.context)?;
    let analysis = context.analyzer()?.analyze(&raw, &user_context);
    tracing::info!("analyzed {} ({})", analysis.meta.full_name, analysis.maturity.level);
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_context_file_and_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("context.json");
        std::fs::write(&path, r#"{"industry": "Retail", "personas": "Buyer"}"#).unwrap();

        let args = ContextArgs {
            industry: Some("Aviation".to_string()),
            context_file: Some(path),
            ..Default::default()
        };
        let defaults = UserContext::new().with_metrics("2x faster").with_personas("Ignored");
        let context = args.resolve(&defaults).unwrap();

        assert_eq!(context.industry, "Aviation");
        assert_eq!(context.personas, "Buyer");
        assert_eq!(context.metrics, "2x faster");
    }

    #[test]
    fn test_as_of_pins_the_analyzer() {
        let args = ContextArgs { as_of: Some("2024-06-15".to_string()), ..Default::default() };
        let analyzer = args.analyzer().unwrap();
        assert_eq!(analyzer.reference_time(), parse_timestamp("2024-06-15").unwrap());

        let invalid = ContextArgs { as_of: Some("someday".to_string()), ..Default::default() };
        assert!(invalid.analyzer().is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
