use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info, LevelFilter};
use rotorcrypt::breaker::{all_positions, complete_plugboards, rewired_reflectors};
use rotorcrypt::config::parse_position;
use rotorcrypt::{CribMatch, CribSearch, Engine, SearchSpace, Variant};

/// Rotor cipher machine: encode messages and search for settings.
#[derive(Parser, Debug)]
#[command(name = "rotorcrypt", author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode (or decode) a message
    Encode {
        /// Setup string, e.g. "I-II-III B 01-01-01 A-A-Z HL-MO"
        #[arg(long)]
        setup: String,
        /// Print the machine state after encoding
        #[arg(long)]
        show_state: bool,
        /// Message to encode; letters and spaces only
        text: Vec<String>,
    },
    /// Search candidate settings for a known plaintext fragment
    Search {
        /// Ciphertext to decrypt
        #[arg(long)]
        code: String,
        /// Cribs, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        crib: Vec<String>,
        /// Rotor orders, comma-separated, e.g. "I-II-III,BETA-I-III"
        #[arg(long, value_delimiter = ',', required = true)]
        rotors: Vec<String>,
        /// Reflectors, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "A,B,C")]
        reflectors: Vec<String>,
        /// Ring settings, comma-separated, e.g. "01-01-01,23-02-10"
        #[arg(long, value_delimiter = ',', required = true)]
        rings: Vec<String>,
        /// Start positions, comma-separated, or "*" for all of them
        #[arg(long, value_delimiter = ',', default_value = "*")]
        positions: Vec<String>,
        /// Plugboard; "?" marks an unknown letter, e.g. "WP-RJ-A?"
        #[arg(long, default_value = "")]
        plugs: String,
        /// Also try reflectors with this many pairs of wires swapped
        #[arg(long)]
        rewire: Option<usize>,
        /// Worker threads (defaults to available parallelism)
        #[arg(long)]
        workers: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("{:?}", cli);

    match cli.command {
        Commands::Encode {
            setup,
            show_state,
            text,
        } => cmd_encode(&setup, show_state, &text.join(" ")),
        Commands::Search {
            code,
            crib,
            rotors,
            reflectors,
            rings,
            positions,
            plugs,
            rewire,
            workers,
        } => {
            let space = build_space(&rotors, &reflectors, &rings, &positions, &plugs)?;
            let mut search = CribSearch::new(&code, &crib).context("invalid ciphertext")?;
            if let Some(n) = workers {
                search = search.with_workers(n);
            }
            cmd_search(&search, &space, rewire)
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn cmd_encode(setup: &str, show_state: bool, text: &str) -> Result<()> {
    let mut engine =
        Engine::from_setup(setup).with_context(|| format!("invalid setup '{}'", setup))?;
    let out = engine
        .encode_message(text, false)
        .context("message cannot be encoded")?;
    println!("{}", out);
    if show_state {
        println!("{}", engine);
    }
    Ok(())
}

fn cmd_search(search: &CribSearch, space: &SearchSpace, rewire: Option<usize>) -> Result<()> {
    let hits: Vec<CribMatch> = match rewire {
        None => search.run(space),
        Some(swaps) => {
            let mut hits = Vec::new();
            for configuration in space.candidates() {
                let tables = rewired_reflectors(&configuration.reflector.wiring().forward, swaps);
                hits.extend(
                    search
                        .run_with_reflectors(&configuration, &tables)
                        .with_context(|| format!("invalid candidate {}", configuration))?,
                );
            }
            hits
        }
    };

    if hits.is_empty() {
        info!("no candidate matched");
    }
    for hit in &hits {
        println!("{}", hit);
    }
    Ok(())
}

fn build_space(
    rotors: &[String],
    reflectors: &[String],
    rings: &[String],
    positions: &[String],
    plugs: &str,
) -> Result<SearchSpace> {
    let rotor_orders = rotors
        .iter()
        .map(|order| {
            order
                .split('-')
                .map(|name| name.parse::<Variant>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("invalid rotor order '{}'", order))
        })
        .collect::<Result<Vec<_>>>()?;
    let Some(width) = rotor_orders.first().map(Vec::len) else {
        bail!("at least one rotor order is required");
    };
    if rotor_orders.iter().any(|order| order.len() != width) {
        bail!("all rotor orders must have the same number of rotors");
    }

    let reflectors = reflectors
        .iter()
        .map(|name| name.parse::<Variant>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid reflector")?;

    let ring_settings = rings
        .iter()
        .map(|setting| {
            setting
                .split('-')
                .map(str::parse::<u8>)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("invalid ring settings '{}'", setting))
        })
        .collect::<Result<Vec<_>>>()?;

    let positions = if positions.iter().any(|p| p == "*") {
        all_positions(width)
    } else {
        positions
            .iter()
            .map(|p| {
                p.split('-')
                    .map(parse_position)
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("invalid start positions '{}'", p))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let plugboards = complete_plugboards(plugs).context("invalid plugboard")?;

    Ok(SearchSpace {
        rotor_orders,
        reflectors,
        ring_settings,
        positions,
        plugboards,
    })
}
