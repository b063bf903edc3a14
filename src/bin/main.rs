//! Signer Resolver CLI
//!
//! Reads a PKCS#7 or PKCS#1 signature response from disk and prints who signed it.

use base64::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use miette::{Context, IntoDiagnostic, Result};
use serde::Serialize;
use signer_resolver::{
    config::{ConfigManager, ExportFormat, InputEncoding, OutputFormat, ResolverConfiguration},
    Pkcs1Signature, Pkcs1Value, Pkcs7Signature, ResolvedSigner, SignerSummary,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "signer-resolver")]
#[command(about = "Identify the signer of PKCS#7 and PKCS#1 signature responses")]
#[command(long_about = "
Signer Resolver - finds the certificate that produced a signature and prints its identity

EXAMPLES:
    # Resolve the signer of a DER or base64 PKCS#7 response
    signer-resolver pkcs7 response.p7s

    # Resolve a PKCS#1 response delivered as signature + certificate
    signer-resolver pkcs1 --signature sig.b64 --certificate signer.der

    # Machine-readable output
    signer-resolver --format json pkcs7 response.p7s

ENVIRONMENT VARIABLES:
    RUST_LOG        Logging filter (overrides the configured log level)
")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Input encoding (overrides config)
    #[arg(long, global = true, value_enum)]
    encoding: Option<EncodingArg>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the signer of a PKCS#7 SignedData response
    Pkcs7 {
        /// File holding the ContentInfo
        #[arg(value_name = "SIGNATURE_FILE")]
        file: PathBuf,
    },

    /// Resolve the signer of a PKCS#1 response
    Pkcs1 {
        /// File holding the raw signature value
        #[arg(short, long, value_name = "FILE")]
        signature: PathBuf,

        /// File holding the signer's X.509 certificate
        #[arg(short, long, value_name = "FILE")]
        certificate: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Create default configuration file
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Export configuration
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ExportFormatArg,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum EncodingArg {
    Auto,
    Der,
    Base64,
}

impl From<EncodingArg> for InputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Auto => InputEncoding::Auto,
            EncodingArg::Der => InputEncoding::Der,
            EncodingArg::Base64 => InputEncoding::Base64,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Clone)]
enum ExportFormatArg {
    Toml,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Toml => ExportFormat::Toml,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// What gets printed for a resolved signature.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    signer: SignerSummary,
    signature_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest_algorithm: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new().into_diagnostic()?,
    };
    let mut config = config_manager
        .load_or_default()
        .into_diagnostic()
        .wrap_err("Failed to load configuration")?;
    if let Some(encoding) = cli.encoding {
        config.input_encoding = encoding.into();
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    }

    let level = match cli.verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Pkcs7 { file } => handle_pkcs7_command(&file, &config)?,
        Commands::Pkcs1 {
            signature,
            certificate,
        } => handle_pkcs1_command(&signature, &certificate, &config)?,
        Commands::Config(config_cmd) => handle_config_command(config_cmd, &config_manager)?,
    }

    Ok(())
}

fn handle_pkcs7_command(file: &Path, config: &ResolverConfiguration) -> Result<()> {
    let bytes = read_input(file, config.input_encoding)?;
    log::info!("Resolving PKCS#7 signer from {}", file.display());

    let signature = Pkcs7Signature::new(&bytes)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", file.display()))?;
    let resolved = signature.resolve().into_diagnostic()?;

    let oid = signature.signer_descriptor().digest_algorithm();
    let digest_algorithm = match const_oid::db::DB.by_oid(&oid) {
        Some(name) => format!("{name} ({oid})"),
        None => oid.to_string(),
    };

    print_report(
        &resolved,
        signature.signature_value_base64(),
        Some(digest_algorithm),
        config,
    )
}

fn handle_pkcs1_command(
    signature_file: &Path,
    certificate_file: &Path,
    config: &ResolverConfiguration,
) -> Result<()> {
    let value = Pkcs1Value::new(
        read_input(signature_file, config.input_encoding)?,
        read_input(certificate_file, config.input_encoding)?,
    );
    log::info!(
        "Resolving PKCS#1 signer from {}",
        certificate_file.display()
    );

    let signature = Pkcs1Signature::new(Some(value)).into_diagnostic()?;
    let resolved = signature.resolve().into_diagnostic()?;

    print_report(&resolved, signature.signature_value_base64(), None, config)
}

fn handle_config_command(config_cmd: ConfigCommands, config_manager: &ConfigManager) -> Result<()> {
    match config_cmd {
        ConfigCommands::Show => match config_manager.load() {
            Ok(config) => {
                println!("Current Configuration:");
                println!("  Input encoding: {}", config.input_encoding);
                println!("  Output format: {}", config.output_format);
                println!("  Log level: {}", config.log_level);
                println!(
                    "  Show certificate details: {}",
                    config.show_certificate_details
                );
                println!(
                    "  Configuration file: {}",
                    config_manager.config_path().display()
                );
            }
            Err(_) => {
                println!("No configuration file found. Use 'config init' to create one.");
            }
        },

        ConfigCommands::Init => {
            let _config = config_manager.load_or_create_default().into_diagnostic()?;
            println!(
                "Configuration initialized: {}",
                config_manager.config_path().display()
            );
        }

        ConfigCommands::Set { key, value } => {
            config_manager
                .update_value(&key, &value)
                .into_diagnostic()?;
            println!("Configuration updated: {key} = {value}");
        }

        ConfigCommands::Export { format, output } => {
            let content = config_manager
                .export_config(format.into())
                .into_diagnostic()?;

            if let Some(output_path) = output {
                std::fs::write(&output_path, content).into_diagnostic()?;
                println!("Configuration exported to: {}", output_path.display());
            } else {
                println!("{content}");
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path, encoding: InputEncoding) -> Result<Vec<u8>> {
    let raw = std::fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    match encoding {
        InputEncoding::Der => Ok(raw),
        InputEncoding::Base64 => decode_base64(&raw)
            .into_diagnostic()
            .wrap_err_with(|| format!("{} is not valid base64", path.display())),
        // DER containers and certificates start with a SEQUENCE tag; anything
        // else is base64 text if it decodes and raw bytes (a bare signature
        // value) if it does not
        InputEncoding::Auto if raw.first() == Some(&0x30) => Ok(raw),
        InputEncoding::Auto => match decode_base64(&raw) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                log::debug!("{} is not base64 ({e}), using raw bytes", path.display());
                Ok(raw)
            }
        },
    }
}

fn decode_base64(raw: &[u8]) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let text: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    BASE64_STANDARD.decode(text)
}

fn print_report(
    resolved: &ResolvedSigner,
    signature_value: String,
    digest_algorithm: Option<String>,
    config: &ResolverConfiguration,
) -> Result<()> {
    let report = Report {
        signer: resolved.summary(),
        signature_value,
        digest_algorithm,
    };

    match config.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
            println!("{json}");
        }
        OutputFormat::Text => {
            let cn = report.signer.common_name.as_deref().unwrap_or("<no CN>");
            println!("Signer: {cn}");
            if config.show_certificate_details {
                println!("  Subject: {}", report.signer.subject);
                println!("  Issuer: {}", report.signer.issuer);
                println!(
                    "  Serial: {} (0x{})",
                    report.signer.serial_decimal, report.signer.serial_hex
                );
                if let Some(digest) = &report.digest_algorithm {
                    println!("  Digest algorithm: {digest}");
                }
                println!("  Signature value: {}", report.signature_value);
            }
        }
    }

    Ok(())
}
