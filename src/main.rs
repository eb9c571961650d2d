#[cfg(test)]
#[path = "tests/main_test.rs"]
mod tests;
//
use clap::Parser;
use mob_locator::{
    zone_classifier::zone_classifier_conf::{CORRIDOR_FACTOR, DEPTH_THRESHOLD},
    Point, VesselProfile, VesselProfileConf, ZoneClassifier, ZoneClassifierConf,
};
use sal_sync::services::entity::{dbg_id::DbgId, error::str_err::StrErr};
use std::process::ExitCode;
/// Locates a point against the hull and prints the alert text.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Overall length of the vessel.
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    length: f64,
    /// Overall beam of the vessel.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    width: f64,
    /// Points with `z` below are reported at extreme depth.
    #[arg(long, default_value_t = DEPTH_THRESHOLD, allow_negative_numbers = true)]
    depth_threshold: f64,
    /// Share of the local hull half-width forming the safe corridor at the bow.
    #[arg(long, default_value_t = CORRIDOR_FACTOR)]
    corridor: f64,
    /// Transverse coordinate, port is negative.
    #[arg(allow_negative_numbers = true)]
    x: f64,
    /// Longitudinal coordinate, stern is negative.
    #[arg(allow_negative_numbers = true)]
    y: f64,
    /// Vertical coordinate, below deck is negative.
    #[arg(allow_negative_numbers = true)]
    z: f64,
}
//
//
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match locate(&cli) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
///
/// Returns the text of the verdict for the point given by `cli`.
fn locate(cli: &Cli) -> Result<String, StrErr> {
    let dbgid = DbgId("mob-locator".to_owned());
    let profile = VesselProfile::new(&dbgid, VesselProfileConf::new(cli.length, cli.width))
        .map_err(|err| StrErr(format!("{} | {}", dbgid, err)))?;
    let classifier = ZoneClassifier::new(
        &dbgid,
        &profile,
        ZoneClassifierConf {
            depth_threshold: cli.depth_threshold,
            corridor_factor: cli.corridor,
        },
    );
    let point = Point::new(cli.x, cli.y, cli.z);
    let zone = classifier.classify(point);
    log::info!("{} | {:?} => {:?}", dbgid, point, zone);
    Ok(zone.to_string())
}
