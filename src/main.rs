//! Command-line Enigma I.
//!
//! Encrypting and decrypting are the same operation: pass the message and
//! the day's key, get the other text back.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use enigma::{load_config, type_message, EnigmaError, MachineConfig, Registry};

#[derive(Parser, Debug)]
#[command(
    name = "enigma",
    version,
    about = "A German Army Enigma I, circa December 1938",
    arg_required_else_help = true
)]
struct Cli {
    /// Debug output on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt or decrypt a message.
    Crypt(CryptArgs),
    /// List the available rotors and reflectors.
    List,
}

#[derive(Args, Debug)]
struct CryptArgs {
    /// JSON file with the day's key; flags override its fields.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reflector called for by the code book [default: B].
    #[arg(long)]
    reflector: Option<String>,

    /// The 3 rotors, left to right [default: I,II,III].
    #[arg(long, value_delimiter = ',')]
    rotors: Option<Vec<String>>,

    /// Ring settings, left to right, as letters or numbers 1-26 [default: A,A,A].
    #[arg(long, value_delimiter = ',')]
    ring_settings: Option<Vec<String>>,

    /// Plug pairs, e.g. AB,CD connects A<->B and C<->D.
    #[arg(long, value_delimiter = ',')]
    plug_pairs: Option<Vec<String>>,

    /// Rotor starting positions (the message key), left to right [default: A,A,A].
    #[arg(long, value_delimiter = ',')]
    positions: Option<Vec<String>>,

    /// Message words; uppercase letters only.
    #[arg(required = true)]
    message: Vec<String>,
}

impl CryptArgs {
    fn machine_config(&self) -> Result<MachineConfig, EnigmaError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MachineConfig::default(),
        };
        if let Some(reflector) = &self.reflector {
            config.reflector = reflector.clone();
        }
        if let Some(rotors) = &self.rotors {
            config.rotors = rotors.clone();
        }
        if let Some(ring_settings) = &self.ring_settings {
            config.ring_settings = ring_settings.clone();
        }
        if let Some(plug_pairs) = &self.plug_pairs {
            config.plug_pairs = plug_pairs.clone();
        }
        if let Some(positions) = &self.positions {
            config.positions = positions.clone();
        }
        Ok(config)
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn crypt(args: &CryptArgs, registry: &Registry) -> Result<String, EnigmaError> {
    let config = args.machine_config()?;
    let mut machine = config.build(registry)?;
    let input = args.message.join(" ");
    let output = type_message(&mut machine, &input)?;
    info!("{input} = {output}");
    Ok(output)
}

fn list(registry: &Registry) -> String {
    format!(
        "rotors: {}\nreflectors: {}",
        registry.rotor_names().join(", "),
        registry.reflector_names().join(", ")
    )
}

fn run(cli: &Cli) -> Result<String, EnigmaError> {
    let registry = Registry::enigma_i()?;
    match &cli.command {
        Commands::Crypt(args) => crypt(args, &registry),
        Commands::List => Ok(list(&registry)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
