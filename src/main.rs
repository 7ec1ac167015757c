use bytesize_fmt::config::{Config, DEFAULT_CONFIG_FILE};
use bytesize_fmt::culture::Culture;
use bytesize_fmt::size::{ByteSize, Unit};
use bytesize_fmt::text;
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bytesize")]
#[command(about = "Parse, format and convert byte sizes", long_about = None)]
struct Cli {
    /// Config file (default: ./bytesize.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a number of units as a human readable size
    Format {
        /// Numeric value (e.g. "1536", "-512")
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of the value (e.g. "KiB")
        #[arg(short, long, default_value = "B")]
        unit: String,

        /// Numeric template (e.g. "0.0", "#.# MB")
        #[arg(short, long)]
        template: Option<String>,

        /// Culture name (e.g. "de-DE")
        #[arg(long)]
        culture: Option<String>,

        /// Display binary units (KiB, MiB, ...)
        #[arg(short, long)]
        binary: bool,
    },

    /// Parse a size string and show its exact value
    Parse {
        /// Size string (e.g. "1.5 GiB")
        text: String,

        /// Culture name (e.g. "de-DE")
        #[arg(long)]
        culture: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a size string into another unit
    Convert {
        /// Size string (e.g. "1.5 GiB")
        text: String,

        /// Target unit (e.g. "MB")
        unit: String,

        /// Culture name (e.g. "de-DE")
        #[arg(long)]
        culture: Option<String>,
    },

    /// Add up several size strings
    Sum {
        /// Size strings (e.g. "1 GB" "512 MiB")
        #[arg(required = true)]
        texts: Vec<String>,

        /// Culture name (e.g. "de-DE")
        #[arg(long)]
        culture: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init also bridges records from the `log` macros
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            value,
            unit,
            template,
            culture,
            binary,
        } => format_size(&config, value, &unit, template, culture.as_deref(), binary),
        Commands::Parse {
            text,
            culture,
            json,
        } => parse_size(&config, &text, culture.as_deref(), json),
        Commands::Convert {
            text,
            unit,
            culture,
        } => convert_size(&config, &text, &unit, culture.as_deref()),
        Commands::Sum { texts, culture } => sum_sizes(&config, &texts, culture.as_deref()),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => {
            let default_path = std::path::Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                debug!("Loading config from {}", default_path.display());
                Config::load_from_file(default_path)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

fn parse_unit(symbol: &str) -> Result<Unit, Box<dyn std::error::Error>> {
    Unit::from_symbol(symbol).ok_or_else(|| format!("Unknown unit: {}", symbol).into())
}

fn format_size(
    config: &Config,
    value: f64,
    unit: &str,
    template: Option<String>,
    culture: Option<&str>,
    binary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let culture = config.resolve_culture(culture)?;
    let size = ByteSize::from_unit(parse_unit(unit)?, value);
    let template = template.unwrap_or_else(|| config.template.clone());
    let system = if binary {
        bytesize_fmt::UnitSystem::Binary
    } else {
        config.unit_system()
    };

    println!("{}", size.format(&template, &culture, system));
    Ok(())
}

fn parse_size(
    config: &Config,
    input: &str,
    culture: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let culture = config.resolve_culture(culture)?;
    let size = text::parse(input, &culture)?;
    let display = size.format(&config.template, &culture, config.unit_system());

    if json {
        let result_obj = serde_json::json!({
            "input": input,
            "bits": size.bits(),
            "bytes": size.bytes(),
            "display": display,
        });
        println!("{}", serde_json::to_string_pretty(&result_obj)?);
    } else {
        println!("Bits: {}", size.bits());
        println!("Bytes: {}", size.bytes());
        println!("Display: {}", display);
    }

    Ok(())
}

fn convert_size(
    config: &Config,
    input: &str,
    unit: &str,
    culture: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let culture: Culture = config.resolve_culture(culture)?;
    let size = text::parse(input, &culture)?;
    let unit = parse_unit(unit)?;

    println!(
        "{}",
        text::format_in_unit(&size, unit, &config.template, &culture)
    );
    Ok(())
}

fn sum_sizes(
    config: &Config,
    inputs: &[String],
    culture: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let culture = config.resolve_culture(culture)?;
    let sizes = inputs
        .iter()
        .map(|input| text::parse(input, &culture))
        .collect::<Result<Vec<_>, _>>()?;

    let total = ByteSize::sum(sizes).ok_or("No sizes given")?;
    println!(
        "{}",
        total.format(&config.template, &culture, config.unit_system())
    );
    Ok(())
}
