mod cli;

use autocaption::caption::{self, CaptionRenderer, SubstitutionMode};
use autocaption::config;
use autocaption_common::{paths, FileDescriptor, MediaMetadata, MetadataField};
use autocaption_parser::Field;
use autocaption_probe::{extract_or_default, get_tool_path, FfprobeExtractor, MetadataExtractor};

use anyhow::Result;
use chrono::Timelike;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "autocaption=trace,autocaption_probe=debug".to_string()
        } else {
            "autocaption=info,autocaption_probe=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            template,
            name,
            size,
            caption: original_caption,
            mime_type,
            duration,
            width,
            height,
            resolution,
            title,
            artist,
            hour,
            single_pass,
        } => {
            let file = FileDescriptor {
                name,
                size,
                original_caption,
                mime_type,
            };
            let metadata = MediaMetadata {
                duration,
                width,
                height,
                resolution,
                title,
                artist,
            };
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let mode = if single_pass {
                SubstitutionMode::SinglePass
            } else {
                config.caption.substitution
            };
            let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
            println!(
                "{}",
                caption::render_with(&template, &file, &metadata, hour, mode)
            );
            Ok(())
        }
        Commands::Caption {
            file,
            template,
            caption,
            json,
        } => caption_file(&file, template, caption, json, cli.config.as_deref()),
        Commands::Analyze { filename, json } => analyze_filename(&filename, json),
        Commands::Probe { file, json } => probe_file(&file, json, cli.config.as_deref()),
        Commands::Variables => {
            for (token, description) in caption::placeholders() {
                println!("{:<14} {}", token, description);
            }
            Ok(())
        }
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("autocaption {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn caption_file(
    input: &Path,
    template: Option<String>,
    original_caption: String,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let file = FileDescriptor {
        name: input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        size: std::fs::metadata(input)?.len(),
        original_caption,
        mime_type: paths::guess_mime_type(input).to_string(),
    };

    tracing::info!("Captioning file: {:?}", input);
    let extractor = config::metadata_extractor(&config.probe);
    let metadata = extract_or_default(extractor.as_ref(), input);
    tracing::debug!("Metadata: {:?}", metadata);

    let template = template.unwrap_or(config.caption.default_template);
    let rendered =
        CaptionRenderer::new(config.caption.substitution).render(&template, &file, &metadata);

    if json {
        let out = serde_json::json!({
            "file": file,
            "metadata": metadata,
            "caption": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn analyze_filename(filename: &str, json: bool) -> Result<()> {
    let attrs = autocaption_parser::analyze(filename);

    if json {
        println!("{}", serde_json::to_string_pretty(&attrs)?);
    } else {
        for field in Field::ALL {
            println!("{:<10} {}", format!("{}:", field), attrs.get(field));
        }
    }

    Ok(())
}

fn probe_file(file: &Path, json: bool, config_path: Option<&Path>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let config = config::load_config_or_default(config_path)?;
    let program = get_tool_path("ffprobe", config.probe.ffprobe_path.as_deref())?;
    let metadata = FfprobeExtractor::with_path(program).extract(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!("File: {}", file.display());
        for field in MetadataField::ALL {
            println!("{:<11} {}", format!("{}:", field), metadata.get(field));
        }
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    println!("Checking external tools...\n");

    let tools = autocaption_probe::check_tools_with(config.probe.ffprobe_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version.lines().next().unwrap_or(""));
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Captions will be rendered without media metadata.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Substitution: {:?}", config.caption.substitution);
            println!(
                "  Max channels per user: {}",
                config.store.max_channels_per_user
            );
            println!("  Metadata probing: {}", config.probe.enabled);
            println!("  Bot token set: {}", config.bot.bot_token.is_some());
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default caption template:");
            println!("{}", config.caption.default_template);
        }
    }

    Ok(())
}
