//! Assess command handler
//!
//! Resolves a location and prints its safety report.

use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::url::UrlFormatter;
use crate::format::{available_formats, get_formatter, Assessment, OutputFormatter};
use crate::geo::{describe_position, geocode_location, get_geocoder, get_ip_locator, Coordinates};
use crate::random::get_source;
use crate::safety::{generate_alerts, SafetyService};
use clap::Args;
use std::sync::Arc;

/// Assess command arguments
#[derive(Args)]
pub struct AssessArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lng: Option<f64>,

    /// Display name for --lat/--lng (reverse geocoded when omitted)
    #[arg(long, requires = "lat")]
    pub name: Option<String>,

    /// Named location (geocoded)
    #[arg(long, conflicts_with_all = ["lat", "lng", "here"])]
    pub location: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lng", "location"])]
    pub here: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Map provider for url output (implies --format url)
    #[arg(long)]
    pub provider: Option<String>,

    /// Include the alert feed
    #[arg(long, short = 'a')]
    pub alerts: bool,

    /// Seed for reproducible fallbacks, zones and alerts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Where the report should be computed
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Here,
    Named(String),
    Position { lat: f64, lng: f64, name: Option<String> },
}

impl Target {
    fn from_args(args: &AssessArgs, config: &Config) -> Result<Self> {
        if args.here {
            Ok(Self::Here)
        } else if let Some(location) = &args.location {
            Ok(Self::Named(location.clone()))
        } else if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
            Ok(Self::Position {
                lat,
                lng,
                name: args.name.clone(),
            })
        } else if config.location.default_here {
            Ok(Self::Here)
        } else {
            Err(Error::Config(
                "No location specified. Use --lat/--lng, --location, or --here".to_string(),
            ))
        }
    }

    async fn resolve(self, config: &Config) -> Result<Coordinates> {
        match self {
            Self::Here => {
                let location = get_ip_locator(config)?.locate().await?;
                eprintln!("Using IP location: {}", location.name);
                Ok(location)
            }
            Self::Named(query) => {
                let geocoder = get_geocoder(config)?;
                let location = geocode_location(&geocoder, &query)
                    .await
                    .ok_or_else(|| Error::NotFound(query.clone()))?;
                eprintln!("Geocoded to: {}", location.name);
                Ok(location)
            }
            Self::Position {
                lat,
                lng,
                name: Some(name),
            } => Ok(Coordinates::new(lat, lng, name)),
            Self::Position { lat, lng, name: None } => {
                Coordinates::unnamed(lat, lng).validate()?;
                let geocoder = get_geocoder(config)?;
                Ok(describe_position(&geocoder, lat, lng).await)
            }
        }
    }
}

/// Run the assess command
pub async fn run(args: AssessArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let format = output_format(&args, &config);
    let formatter =
        get_formatter(&format).ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    if args.provider.is_some() && formatter.name() != "url" {
        return Err(Error::Config(format!(
            "--provider only applies to url output, not {}",
            formatter.name()
        )));
    }

    let coordinates = Target::from_args(&args, &config)?.resolve(&config).await?;
    coordinates.validate()?;

    let service = SafetyService::from_config(&config, Arc::new(SystemClock), get_source(args.seed))?;
    let safety = service.fetch_safety_data(&coordinates).await;
    let alerts = args
        .alerts
        .then(|| generate_alerts(&coordinates.name, service.rng()));

    let assessment = Assessment {
        coordinates,
        safety,
        alerts,
    };
    let output = render(formatter.as_ref(), args.provider.as_deref(), &assessment, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Requested format; a provider alone selects url output
fn output_format(args: &AssessArgs, config: &Config) -> String {
    match (&args.format, &args.provider) {
        (Some(format), _) => format.clone(),
        (None, Some(_)) => "url".to_string(),
        (None, None) => config.defaults.format.clone(),
    }
}

/// Format the assessment, honouring a map provider override
fn render(
    formatter: &dyn OutputFormatter,
    provider: Option<&str>,
    assessment: &Assessment,
    config: &Config,
) -> Result<String> {
    match provider {
        Some(provider) => UrlFormatter.format_with_provider(assessment, config, Some(provider)),
        None => formatter.format(assessment, config),
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_assessment;

    fn args() -> AssessArgs {
        AssessArgs {
            lat: None,
            lng: None,
            name: None,
            location: None,
            here: false,
            format: None,
            provider: None,
            alerts: false,
            seed: None,
            output: None,
            list_formats: false,
        }
    }

    #[test]
    fn test_target_position() {
        let mut a = args();
        a.lat = Some(1.0);
        a.lng = Some(2.0);
        a.name = Some("Somewhere".to_string());

        let target = Target::from_args(&a, &Config::default()).unwrap();
        assert_eq!(
            target,
            Target::Position {
                lat: 1.0,
                lng: 2.0,
                name: Some("Somewhere".to_string())
            }
        );
    }

    #[test]
    fn test_target_named() {
        let mut a = args();
        a.location = Some("Paris".to_string());
        let target = Target::from_args(&a, &Config::default()).unwrap();
        assert_eq!(target, Target::Named("Paris".to_string()));
    }

    #[test]
    fn test_target_missing() {
        assert!(Target::from_args(&args(), &Config::default()).is_err());
    }

    #[test]
    fn test_target_default_here() {
        let mut config = Config::default();
        config.location.default_here = true;
        assert_eq!(Target::from_args(&args(), &config).unwrap(), Target::Here);
    }

    #[test]
    fn test_provider_selects_url_output() {
        let mut a = args();
        assert_eq!(output_format(&a, &Config::default()), "text");

        a.provider = Some("openstreetmap".to_string());
        assert_eq!(output_format(&a, &Config::default()), "url");

        a.format = Some("json".to_string());
        assert_eq!(output_format(&a, &Config::default()), "json");
    }

    #[test]
    fn test_render_with_provider() {
        let assessment = sample_assessment(false);
        let config = Config::default();

        let default = render(&UrlFormatter, None, &assessment, &config).unwrap();
        assert!(default.contains("google.com/maps"));

        let osm = render(&UrlFormatter, Some("openstreetmap"), &assessment, &config).unwrap();
        assert_eq!(osm, "https://www.openstreetmap.org/#map=15/40.7128/-74.006");

        assert!(render(&UrlFormatter, Some("nowhere"), &assessment, &config).is_err());
    }

    #[tokio::test]
    async fn test_resolve_named_position() {
        let target = Target::Position {
            lat: 40.7128,
            lng: -74.006,
            name: Some("New York".to_string()),
        };
        let coords = target.resolve(&Config::default()).await.unwrap();
        assert_eq!(coords, Coordinates::new(40.7128, -74.006, "New York"));
    }

    #[tokio::test]
    async fn test_resolve_unnamed_without_token() {
        // no mapbox token: reverse lookup fails and the coordinate label is used
        let target = Target::Position {
            lat: 10.0,
            lng: 20.0,
            name: None,
        };
        let coords = target.resolve(&Config::default()).await.unwrap();
        assert_eq!(coords.name, "Location (10.0000, 20.0000)");
    }

    #[tokio::test]
    async fn test_resolve_invalid_position() {
        let target = Target::Position {
            lat: 95.0,
            lng: 0.0,
            name: None,
        };
        assert!(target.resolve(&Config::default()).await.is_err());
    }
}
