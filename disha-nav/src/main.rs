//! DishaNav - Indoor Wayfinding CLI for MargaMap
//!
//! Loads a floor-plan document, computes routes between named
//! locations (or to the nearest amenity of a category), and follows
//! them interactively: feed compass headings or move/turn commands and
//! get turn-by-turn instructions back.
//!
//! ## Usage
//!
//! ```bash
//! # interactive shell
//! disha-nav --plan stitched.json
//!
//! # one-shot: print the full narration for a route and exit
//! disha-nav --plan stitched.json --from Lab_1 --to lift
//! ```

mod config;
mod error;
mod repl;

use std::io::BufReader;
use std::path::Path;

use clap::Parser;
use tracing::info;

use marga_map::{
    DirectionPolicy, Facing, FloorPlan, FloorPlanDocument, InstructionGenerator, Navigator,
    Route, ARRIVAL_MESSAGE,
};

use config::DishaConfig;
use error::{DishaError, Result};
use repl::Repl;

#[derive(Parser)]
#[command(name = "disha-nav")]
#[command(about = "Indoor wayfinding over a floor-plan document")]
struct Args {
    /// Floor-plan JSON document (overrides config)
    #[arg(short, long)]
    plan: Option<String>,

    /// Floor identifier to load (overrides config)
    #[arg(short, long)]
    floor: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, default_value = "disha.toml")]
    config: String,

    /// Instruction policy: absolute_offset or relative_turn
    #[arg(long)]
    policy: Option<String>,

    /// One-shot start location (requires --to)
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// One-shot end location or amenity category
    #[arg(long, requires = "from")]
    to: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("disha_nav=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = if Path::new(&args.config).exists() {
        info!("Loading configuration from {}", args.config);
        DishaConfig::load(Path::new(&args.config))?
    } else {
        info!("Using default configuration");
        DishaConfig::default()
    };
    if let Some(plan) = args.plan {
        config.plan.path = plan;
    }
    if let Some(floor) = args.floor {
        config.plan.floor = floor;
    }
    if let Some(policy) = args.policy.as_deref() {
        config.tracker.policy = parse_policy(policy)?;
    }

    info!("DishaNav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Loading {} (floor {})",
        config.plan.path, config.plan.floor
    );
    let text = std::fs::read_to_string(&config.plan.path)?;
    let doc = FloorPlanDocument::from_json(&text)?;

    match (args.from, args.to) {
        (Some(from), Some(to)) => {
            let plan = FloorPlan::from_document(&doc, &config.plan.floor)?;
            let mut navigator = Navigator::new(plan, config.tracker);
            let begun = navigator.request_route(&from, &to)?;
            println!("Route to {}: {}", begun.destination, begun.route);
            for line in narrate(navigator.plan(), &begun.route, config.tracker.policy) {
                println!("  {line}");
            }
            Ok(())
        }
        _ => {
            let mut repl = Repl::new(doc, &config.plan.floor, config.tracker)?;
            let stdin = std::io::stdin();
            repl.run(BufReader::new(stdin.lock()), std::io::stdout())
        }
    }
}

fn parse_policy(token: &str) -> Result<DirectionPolicy> {
    match token {
        "absolute_offset" => Ok(DirectionPolicy::AbsoluteOffset),
        "relative_turn" => Ok(DirectionPolicy::RelativeTurn),
        other => Err(DishaError::Config(format!(
            "unknown policy {other} (absolute_offset or relative_turn)"
        ))),
    }
}

/// Narrate a whole route as one instruction per edge plus the arrival
/// message. For the relative policy the facing evolves along the
/// route, as if the traveler turns as told.
fn narrate(plan: &FloorPlan, route: &Route, policy: DirectionPolicy) -> Vec<String> {
    let generator = InstructionGenerator::new(policy);
    let mut facing = Facing::default();
    let mut lines = Vec::with_capacity(route.len());
    for cursor in 0..route.len() - 1 {
        lines.push(generator.instruction(plan, route, cursor, facing));
        let from = plan.coordinate(&route.names()[cursor]);
        let to = plan.coordinate(&route.names()[cursor + 1]);
        if let (Some(from), Some(to)) = (from, to) {
            facing = Facing::from_offset(to.x - from.x, to.y - from.y);
        }
    }
    lines.push(ARRIVAL_MESSAGE.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use marga_map::Router;

    const DOC: &str = r#"{
        "layout": {
            "Floor_0": [
                [{"type":"room","name":"B"}, {"type":"room","name":"C"}],
                [{"type":"corridor","name":"c1"}, {"type":"empty"}],
                [{"type":"room","name":"A"}, {"type":"empty"}]
            ]
        },
        "nodes": {
            "A": {"type":"room","neighbors":["c1"]},
            "c1": {"type":"corridor","neighbors":["A","B"]},
            "B": {"type":"room","neighbors":["c1","C"]},
            "C": {"type":"room","neighbors":["B"]}
        }
    }"#;

    #[test]
    fn test_narrate_relative_policy_tracks_facing() {
        let plan = FloorPlan::from_json(DOC, "Floor_0").unwrap();
        let route = Router::new(&plan).route("A", "C").unwrap();
        let lines = narrate(&plan, &route, DirectionPolicy::RelativeTurn);
        assert_eq!(
            lines,
            vec![
                // two legs north, then one east: straight, straight, right
                "Go straight towards c1.".to_string(),
                "Go straight towards B.".to_string(),
                "Turn right towards C.".to_string(),
                ARRIVAL_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            parse_policy("relative_turn").unwrap(),
            DirectionPolicy::RelativeTurn
        );
        assert!(parse_policy("sideways").is_err());
    }
}
