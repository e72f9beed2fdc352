mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::Path;

use roastscope::compose::{compose_result, ComposeOptions};
use roastscope::config::AppConfig;
use roastscope::official::OfficialProvider;
use roastscope::roast::{generate_roast, RoastOptions};
use roastscope::seed::{generate_deterministic_seed, generate_random_seed};
use roastscope::{CringeLevel, Day, Mode, OfficialHoroscope, ZodiacSign};

#[derive(Parser)]
#[command(name = "roastscope", about = "Cringe horoscope generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long, default_value = "aries")]
    sign: String,
    #[arg(long, default_value = "today")]
    day: String,
    #[arg(long, default_value = "roast")]
    mode: String,
    #[arg(long, default_value_t = 1)]
    cringe: u8,
    #[arg(long)]
    seed: Option<u32>,
    #[arg(long, conflicts_with = "seed")]
    random: bool,
    #[arg(long)]
    details: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            sign: "aries".to_string(),
            day: "today".to_string(),
            mode: "roast".to_string(),
            cringe: 1,
            seed: None,
            random: false,
            details: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Generate(GenerateArgs::default()));

    match command {
        Command::Generate(args) => run_generate(args).await,
        Command::Serve(args) => server::serve(args).await,
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;

    let sign = ZodiacSign::from_str(&args.sign)
        .ok_or_else(|| format!("invalid zodiac sign: {}", args.sign))?;
    let day = Day::from_str(&args.day)
        .ok_or_else(|| format!("invalid day (yesterday/today/tomorrow): {}", args.day))?;
    let mode = Mode::from_str(&args.mode)
        .ok_or_else(|| format!("invalid mode (official/roast/mix): {}", args.mode))?;
    let cringe = CringeLevel::from_u8(args.cringe)?;

    let date = day.resolve_date();
    let seed = match args.seed {
        Some(seed) => seed,
        None if args.random => generate_random_seed(),
        None => generate_deterministic_seed(sign, &date, cringe)?,
    };

    let roast = generate_roast(&RoastOptions {
        sign,
        day,
        cringe,
        seed,
    });

    let mut warnings = Vec::new();
    let official = if mode.needs_official() {
        let provider = OfficialProvider::from_config(&config.provider)?;
        let (official, warning) = provider.fetch_or_fallback(sign, day).await;
        if let Some(warning) = warning {
            warnings.push(warning);
        }
        official
    } else {
        OfficialHoroscope::default()
    };

    let result = compose_result(ComposeOptions {
        mode,
        official: official.clone(),
        roast: roast.clone(),
        cringe,
        seed,
    });

    println!(
        "{} | {} | cringe {} ({})",
        sign.label(),
        date,
        cringe.index(),
        cringe.label()
    );
    println!("Seed: {}", seed);
    println!("Source: {}", result.source.label());
    println!();
    println!("{}", result.text);

    if let Some(color) = &result.lucky_color {
        println!("\nLucky color: {}", color);
    }
    if let Some(number) = result.lucky_number {
        println!("Lucky number: {}", number);
    }

    if args.details {
        println!("\nRoast text: {}", roast.text);
        if mode.needs_official() {
            println!("Official text: {}", official.text);
        }
    }

    for warning in warnings {
        println!("\nWarning: {}", warning);
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roastscope=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
