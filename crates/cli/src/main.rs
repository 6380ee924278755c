use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use restyle_core::{
    FetchConfig, GenerationClient, GenerationConfig, Model, RestyleError, SourceDocument,
    StyleRequest, build_request, export_filename, extract, normalize, word_count,
};

mod echo;

use echo::{format_size, print_banner, print_error, print_metric, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rewrite an article in a requested style
#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(author = "Restyle Contributors")]
#[command(version = VERSION)]
#[command(about = "Rewrite articles in a requested style", long_about = None)]
struct Args {
    /// File to rewrite (.txt, .md, .docx, .pdf) or article URL
    #[arg(value_name = "INPUT")]
    input: String,

    /// Description of the desired writing style
    #[arg(short, long, value_name = "STYLE")]
    style: String,

    /// Backend API key (default: OPENAI_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Generation model
    #[arg(short, long, default_value = "gpt-3.5-turbo", value_name = "MODEL")]
    model: Model,

    /// Maximum generated tokens (100-4000)
    #[arg(long, default_value = "2000", value_name = "NUM")]
    max_tokens: u32,

    /// Sampling temperature (0.0-1.0)
    #[arg(long, default_value = "0.7", value_name = "NUM")]
    temperature: f32,

    /// Ask the model to keep the original length (advisory, not enforced)
    #[arg(long)]
    preserve_length: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the rewrite to the current directory under its export name
    /// (rewritten_<stem>.txt)
    #[arg(long, conflicts_with = "output")]
    export: bool,

    /// HTTP timeout in seconds for URL fetching
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for URL fetching
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable progress output
    #[arg(short, long)]
    verbose: bool,
}

/// Renders a pipeline error as a user-facing message.
///
/// Backend messages are additionally classified by substring when the
/// structured kind is the generic one, mirroring how authentication and
/// rate-limit failures show up as raw text from some backends.
fn user_message(err: &RestyleError) -> String {
    const AUTH_MESSAGE: &str = "The API key was rejected. Check the key and try again.";
    const RATE_MESSAGE: &str = "The API rate limit was exceeded. Try again later.";

    match err {
        RestyleError::Authentication(_) => AUTH_MESSAGE.to_string(),
        RestyleError::RateLimit(_) => RATE_MESSAGE.to_string(),
        RestyleError::Generation(message) => {
            let lower = message.to_lowercase();
            if lower.contains("authentication") || lower.contains("api key") || lower.contains("invalid") {
                AUTH_MESSAGE.to_string()
            } else if lower.contains("rate limit") {
                RATE_MESSAGE.to_string()
            } else {
                err.to_string()
            }
        }
        _ => err.to_string(),
    }
}

/// Builds the source document from the CLI input argument.
fn load_document(input: &str) -> anyhow::Result<SourceDocument> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return SourceDocument::from_url(input).map_err(|e| anyhow::anyhow!(user_message(&e)));
    }

    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let name = Path::new(input)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(input);

    SourceDocument::from_file(name, bytes).map_err(|e| anyhow::anyhow!(user_message(&e)))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
    }

    let api_key = match args.api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok()) {
        Some(key) if !key.trim().is_empty() => key,
        _ => anyhow::bail!("An API key is required (use --api-key or set OPENAI_API_KEY)"),
    };

    if args.verbose {
        if args.input.starts_with("http://") || args.input.starts_with("https://") {
            print_step(1, 4, &format!("Fetching {}", args.input.bright_white().underline()));
        } else {
            print_step(1, 4, &format!("Reading {}", args.input.bright_white()));
        }
    }

    let doc = load_document(&args.input)?;

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    if args.verbose {
        print_step(2, 4, "Extracting and normalizing text");
    }

    let extraction = extract(&doc, &fetch_config)
        .await
        .map_err(|e| anyhow::anyhow!(user_message(&e)))?;

    for warning in &extraction.warnings {
        print_warning(warning);
    }

    let source_text = normalize(&extraction.text);

    if args.verbose {
        print_metric("Size", &format_size(source_text.len()));
        let preview: String = source_text.chars().take(120).collect();
        if !preview.is_empty() {
            print_metric("Preview", &preview);
        }
        eprintln!();
        print_step(3, 4, "Generating rewrite");
    }

    let style = StyleRequest {
        style_description: args.style,
        config: GenerationConfig {
            model: args.model,
            max_output_tokens: args.max_tokens,
            temperature: args.temperature,
            preserve_length: args.preserve_length,
        },
    };

    let request = build_request(&source_text, &style).map_err(|e| anyhow::anyhow!(user_message(&e)))?;

    let client = GenerationClient::new(api_key);
    let result = client
        .generate(&request, &style.config)
        .await
        .map_err(|e| anyhow::anyhow!(user_message(&e)))?;

    if args.verbose {
        print_step(4, 4, "Writing output");
        eprintln!();
    }

    print_metric("Source words", &word_count(&source_text).to_string());
    print_metric("Rewritten words", &word_count(&result.rewritten_text).to_string());
    print_metric("Tokens used", &result.token_usage.to_string());

    let output_path = if args.export {
        Some(PathBuf::from(export_filename(Some(&doc.origin))))
    } else {
        args.output
    };

    match output_path {
        Some(path) => {
            fs::write(&path, &result.rewritten_text)
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Rewrite written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", result.rewritten_text);
        }
    }

    Ok(())
}
