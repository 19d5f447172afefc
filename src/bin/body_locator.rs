//! Celestial Body Locator
//!
//! This binary locates a planet, dwarf planet, or the Sun in the sky for
//! an observer at a given longitude and latitude, printing equatorial
//! RA/Dec and local azimuth/elevation/distance.
//!
//! Usage:
//!   cargo run --bin body_locator -- Mars --lon -0.1 --lat 51.5
//!   cargo run --bin body_locator -- Venus --date 2021-06-30T22:00:00Z --json

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};

use skytrack::time::julian_date;
use skytrack::Ephemeris;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Celestial Body Locator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes the sky position of a solar-system body for a ground observer",
    long_about = None
)]
struct Args {
    /// Name of the body to locate (e.g. "Mars", "Sun", "Ceres")
    body: String,

    /// Julian date of the observation; overrides --date
    #[arg(short, long)]
    jd: Option<f64>,

    /// UTC date and time of the observation, RFC 3339 (default: now)
    #[arg(short, long)]
    date: Option<DateTime<Utc>>,

    /// Observer's longitude in degrees east of Greenwich
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lon: f64,

    /// Observer's latitude in degrees north of the equator
    #[arg(long, default_value_t = 51.48, allow_hyphen_values = true)]
    lat: f64,

    /// Emit the location record as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// List the bodies in the catalog and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,
}

/// Resolve the observation instant from the date arguments.
fn observation_jd(args: &Args) -> f64 {
    match (args.jd, args.date) {
        (Some(jd), _) => jd,
        (None, Some(date)) => julian_date(date),
        (None, None) => julian_date(Utc::now()),
    }
}

fn list_bodies(ephemeris: &Ephemeris) {
    for body in ephemeris.catalog().bodies() {
        println!("{}", body);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let ephemeris = Ephemeris::standard();

    if args.list {
        list_bodies(&ephemeris);
        return Ok(());
    }

    let jd = observation_jd(&args);
    let location = ephemeris.find(&args.body, jd, args.lon, args.lat)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        println!("{}", location);
    }

    Ok(())
}
