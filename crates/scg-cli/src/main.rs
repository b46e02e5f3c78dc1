use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use scg_core::config::{self, CONFIG_FILE_NAME, ScgConfig};
use scg_core::ir::IrSpec;
use scg_core::load;
use scg_core::output::route_file;
use scg_core::transform::{PipelineOptions, post_process};
use scg_core::{CodeGenerator, GeneratedFile};
use scg_spring::SpringServerGenerator;

#[derive(Parser)]
#[command(name = "scg", about = "Spring controller/service generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Spring sources from an IR document
    Generate {
        /// Path to the IR document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append "Dto" to model class names
        #[arg(long)]
        use_dto: bool,
    },

    /// Print the post-processed IR
    Inspect {
        /// Path to the IR document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new scg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            use_dto,
        } => cmd_generate(input, output, use_dto),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "scg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load `.scg.yaml` from the current directory, falling back to defaults.
fn load_project_config() -> Result<ScgConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path)?;
    if cfg.is_none() {
        log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
    }
    Ok(cfg.unwrap_or_default())
}

/// Load the IR document and run the post-processing pipeline over it.
fn load_ir(path: &Path, cfg: &ScgConfig) -> Result<IrSpec> {
    let mut ir =
        load::from_path(path).with_context(|| format!("failed to load {}", path.display()))?;

    post_process(
        &mut ir,
        &PipelineOptions {
            generator: cfg.options,
            group_by: cfg.group_by,
        },
    );
    Ok(ir)
}

/// Write generated files under `base`, then move each into the directory its role calls for.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        match route_file(&path, file.role)
            .with_context(|| format!("failed to relocate {}", path.display()))?
        {
            Some(dest) => eprintln!("  wrote {}", dest.display()),
            None => eprintln!("  wrote {}", path.display()),
        }
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, use_dto: bool) -> Result<()> {
    let mut cfg = load_project_config()?;
    if use_dto {
        cfg.options.use_dto = true;
    }
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let ir = load_ir(&input, &cfg)?;

    eprintln!("Generating {} → {}", input.display(), output_dir.display());
    let files = SpringServerGenerator
        .generate(&ir, &cfg)
        .context("failed to render sources")?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files in {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = load_project_config()?;
    let ir = load_ir(&input, &cfg)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&ir)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&ir)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
