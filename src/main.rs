use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tmplconf::{
    find_settings_file, generate_init_file, load_config, load_config_entries, load_settings,
    merge_render_config, print_config, run, CliRenderOptions, ColorMode, ConfigError,
    OutputContext, OutputMode, SubstitutionPlan, TmplconfToml,
};

#[derive(Parser)]
#[command(name = "tmplconf")]
#[command(version, about = "Typed INI configuration loading and template rendering")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Specify settings file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Output only file names
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Force colored output
    #[arg(long, global = true)]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Load an INI file and print its typed values
    Show {
        /// INI file to load
        path: PathBuf,

        /// Print the values as a TOML table
        #[arg(long)]
        toml: bool,
    },
    /// Render a template file or directory, substituting variables
    Render(RenderArgs),
    /// Generate a template tmplconf.toml settings file
    Init,
}

#[derive(Args)]
struct RenderArgs {
    /// Template file or directory
    input: PathBuf,

    /// Output file, or output directory for a directory input
    output: PathBuf,

    /// Variable to substitute, applied in the order given
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// INI file whose keys are used as variable names
    #[arg(long = "vars", value_name = "INI")]
    vars: Vec<PathBuf>,

    /// Show changes in diff format
    #[arg(short, long)]
    diff: bool,

    /// Render without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let colors = ColorMode::from_flags(cli.color, cli.no_color);
    let ctx = OutputContext::new(mode, colors.enabled());

    let outcome = match &cli.command {
        Command::Init => handle_init(),
        Command::Show { path, toml } => handle_show(path, *toml, &ctx),
        Command::Render(args) => handle_render(args, &cli, &ctx),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            report_error(e.as_ref());
            ExitCode::from(1)
        }
    }
}

fn report_error(e: &dyn Error) {
    eprintln!("Error: {e}");
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn handle_init() -> Result<ExitCode, Box<dyn Error>> {
    let path = generate_init_file()?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn handle_show(
    path: &Path,
    as_toml: bool,
    ctx: &OutputContext,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = load_config(path)?;
    if as_toml {
        print!("{}", toml::to_string(&config)?);
    } else {
        print_config(&config, ctx);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_render(
    args: &RenderArgs,
    cli: &Cli,
    ctx: &OutputContext,
) -> Result<ExitCode, Box<dyn Error>> {
    let settings = load_settings_file(&cli.config, cli.quiet)?;

    let mut plan = SubstitutionPlan::default();
    for vars in &args.vars {
        plan.extend_from_entries(&load_config_entries(vars)?);
    }
    for (name, value) in &args.set {
        plan.push(name.as_str(), value.as_str());
    }

    // Boolean flags in clap are always present (default false), so false
    // means "not set" for merging with the settings file.
    let cli_options = CliRenderOptions {
        diff: args.diff.then_some(true),
        no_progress: args.no_progress.then_some(true),
        dry_run: args.dry_run,
        plan,
    };
    let config = merge_render_config(&cli_options, settings.as_ref().map(|s| &s.render));

    let result = run(&args.input, &args.output, &config, ctx)?;
    if result.has_failures() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn load_settings_file(
    explicit_path: &Option<PathBuf>,
    quiet: bool,
) -> Result<Option<TmplconfToml>, ConfigError> {
    let settings_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_settings_file(&d))
    });

    let Some(path) = settings_path else {
        return Ok(None);
    };

    let settings = load_settings(&path)?;
    if !quiet {
        eprintln!("Using settings: {}", path.display());
    }
    Ok(Some(settings))
}
