use clap::{Args, Parser, Subcommand};
use jataka_engine::{ChartEngine, ChartRequest};
use jataka_vedic::{
    AyanamshaSystem, BhavaSystem, Varga, deg_to_dms, nakshatra_from_longitude,
    rashi_from_longitude, varga_longitude,
};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka birth-chart and matching CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct BirthArgs {
    /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    date: String,
    /// Geographic latitude in degrees (north positive)
    #[arg(long)]
    lat: f64,
    /// Geographic longitude in degrees (east positive)
    #[arg(long)]
    lon: f64,
    /// Altitude in metres
    #[arg(long, default_value = "0")]
    altitude: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full birth chart as JSON
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Ayanamsha identifier (LAHIRI, RAMAN, KRISHNAMURTI, ...)
        #[arg(long, default_value = "LAHIRI")]
        ayanamsha: String,
        /// House system (PLACIDUS, KOCH, EQUAL, WHOLE_SIGN)
        #[arg(long, default_value = "WHOLE_SIGN")]
        house_system: String,
        /// Divisional charts to include, by division count
        #[arg(long, value_delimiter = ',', default_value = "1")]
        divisions: Vec<u16>,
    },
    /// Ashtakoot match between two birth charts, as JSON
    Match {
        /// Groom's UTC datetime
        #[arg(long)]
        groom_date: String,
        /// Groom's latitude
        #[arg(long)]
        groom_lat: f64,
        /// Groom's longitude
        #[arg(long)]
        groom_lon: f64,
        /// Bride's UTC datetime
        #[arg(long)]
        bride_date: String,
        /// Bride's latitude
        #[arg(long)]
        bride_lat: f64,
        /// Bride's longitude
        #[arg(long)]
        bride_lon: f64,
        /// Ayanamsha identifier
        #[arg(long, default_value = "LAHIRI")]
        ayanamsha: String,
    },
    /// Rashi from a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Varga-transformed position of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Division count (1, 2, 3, 4, 7, 9, 10, 12, ...)
        #[arg(long, default_value = "9")]
        division: u16,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

fn parse_ayanamsha(name: &str) -> Result<AyanamshaSystem, String> {
    AyanamshaSystem::from_wire(name).ok_or_else(|| format!("unknown ayanamsha '{name}'"))
}

fn parse_house_system(name: &str) -> Result<BhavaSystem, String> {
    BhavaSystem::from_wire(name).ok_or_else(|| format!("unknown house system '{name}'"))
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Chart {
            birth,
            ayanamsha,
            house_system,
            divisions,
        } => {
            let request = ChartRequest {
                instant: birth.date,
                latitude: birth.lat,
                longitude: birth.lon,
                altitude: birth.altitude,
                ayanamsha: parse_ayanamsha(&ayanamsha)?,
                house_system: parse_house_system(&house_system)?,
                divisions,
            };
            let engine = ChartEngine::new().map_err(|e| e.to_string())?;
            let chart = engine.compute_chart(&request).map_err(|e| e.to_string())?;
            let json = serde_json::to_string_pretty(&chart).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Commands::Match {
            groom_date,
            groom_lat,
            groom_lon,
            bride_date,
            bride_lat,
            bride_lon,
            ayanamsha,
        } => {
            let system = parse_ayanamsha(&ayanamsha)?;
            let engine = ChartEngine::new().map_err(|e| e.to_string())?;
            let groom = engine
                .compute_chart(&ChartRequest::new(
                    groom_date,
                    groom_lat,
                    groom_lon,
                    system,
                    BhavaSystem::WholeSign,
                ))
                .map_err(|e| e.to_string())?;
            let bride = engine
                .compute_chart(&ChartRequest::new(
                    bride_date,
                    bride_lat,
                    bride_lon,
                    system,
                    BhavaSystem::WholeSign,
                ))
                .map_err(|e| e.to_string())?;
            let result = engine.match_charts(&groom, &bride);
            let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) {} deg {}' {:.2}\"",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms.degrees,
                info.dms.minutes,
                info.dms.seconds
            );
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} pada {} ({:.4} deg within)",
                info.nakshatra.name(),
                info.pada,
                info.degrees_in_nakshatra
            );
        }
        Commands::Varga { lon, division } => {
            let varga = Varga::from_code(division)
                .ok_or_else(|| format!("unsupported division D{division}"))?;
            let out = varga_longitude(lon, varga);
            let info = rashi_from_longitude(out);
            println!(
                "{}: {:.4} deg -> {} {:.4} deg",
                varga.name(),
                out,
                info.rashi.name(),
                info.degrees_in_rashi
            );
        }
        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!("{} deg {}' {:.4}\"", dms.degrees, dms.minutes, dms.seconds);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(msg) = run() {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}
