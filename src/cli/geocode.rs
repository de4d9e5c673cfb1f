//! Geocode command handler

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{geocode_location, get_geocoder};
use clap::Args;

/// Geocode command arguments
#[derive(Args)]
pub struct GeocodeArgs {
    /// Place name or address
    pub query: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the geocode command
pub async fn run(args: GeocodeArgs) -> Result<()> {
    let config = Config::load()?;
    let geocoder = get_geocoder(&config)?;

    let location = geocode_location(&geocoder, &args.query)
        .await
        .ok_or_else(|| Error::NotFound(args.query.clone()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        println!("{}", location.name);
        println!("{:.6}, {:.6}", location.lat, location.lng);
    }

    Ok(())
}
