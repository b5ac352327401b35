//! Interactive navigation shell.
//!
//! Single-threaded and event-driven: every line read from the terminal
//! is one event, handled to completion before the next is read. Route
//! requests, heading samples, and move commands all funnel into the
//! engine synchronously, in arrival order.

use std::io::{BufRead, Write};
use std::time::Instant;

use marga_map::{
    compass_from_alpha, nearest_amenity, CellKind, FloorPlan, FloorPlanDocument, MoveCommand,
    NavInput, Navigator, TrackerConfig, TrackerEvent, TrackerState,
};
use tracing::debug;

use crate::error::Result;

const HELP: &str = "\
commands:
  route <start> <end>      compute a route (end may be girls_toilet,
                           boys_toilet, lift or stair for the nearest one)
  nearest <start> <cat>    find the nearest amenity of a category
  heading <degrees>        feed one compass sample
  alpha <degrees>          feed one device-orientation sample
                           (counter-clockwise alpha, as sensors report it)
  move | left | right      discrete movement commands
  where                    show tracker state
  rooms                    list selectable locations
  floors                   list floors in the document
  floor <id>               switch to another floor
  help                     this text
  quit                     exit";

/// Interactive session over one floor-plan document.
pub struct Repl {
    doc: FloorPlanDocument,
    navigator: Navigator,
    tracker_config: TrackerConfig,
    /// Epoch for heading-sample timestamps, reset when a route begins
    epoch: Instant,
}

impl Repl {
    /// Load a floor and build the shell around it.
    pub fn new(doc: FloorPlanDocument, floor: &str, tracker_config: TrackerConfig) -> Result<Repl> {
        let plan = FloorPlan::from_document(&doc, floor)?;
        Ok(Repl {
            doc,
            navigator: Navigator::new(plan, tracker_config),
            tracker_config,
            epoch: Instant::now(),
        })
    }

    /// Read lines until EOF or `quit`, writing responses as we go.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed == "quit" || trimmed == "exit" {
                break;
            }
            if !trimmed.is_empty() {
                writeln!(output, "{}", self.handle_line(trimmed))?;
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }

    /// Handle one input line and return the response text.
    pub fn handle_line(&mut self, line: &str) -> String {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        debug!("command: {command} {args:?}");

        match (command, args.as_slice()) {
            ("help", _) => HELP.to_string(),
            ("rooms", _) => self.navigator.plan().selectable_destinations().join("\n"),
            ("floors", _) => self.doc.floors().collect::<Vec<_>>().join("\n"),
            ("floor", [id]) => self.switch_floor(id),
            ("route", [start, end]) => self.route(start, end),
            ("nearest", [start, category]) => self.nearest(start, category),
            ("heading", [degrees]) => match degrees.parse::<f32>() {
                Ok(degrees) => self.advance(NavInput::Heading {
                    degrees,
                    at: self.epoch.elapsed(),
                }),
                Err(_) => format!("not a number: {degrees}"),
            },
            ("alpha", [degrees]) => match degrees.parse::<f32>() {
                Ok(alpha) => self.advance(NavInput::Heading {
                    degrees: compass_from_alpha(alpha),
                    at: self.epoch.elapsed(),
                }),
                Err(_) => format!("not a number: {degrees}"),
            },
            ("move", []) => self.advance(NavInput::Command(MoveCommand::Forward)),
            ("left", []) => self.advance(NavInput::Command(MoveCommand::TurnLeft)),
            ("right", []) => self.advance(NavInput::Command(MoveCommand::TurnRight)),
            ("where", _) => self.whereabouts(),
            _ => format!("unrecognized command: {line} (try \"help\")"),
        }
    }

    fn switch_floor(&mut self, floor: &str) -> String {
        match FloorPlan::from_document(&self.doc, floor) {
            Ok(plan) => {
                // the old session is meaningless on another floor
                self.navigator = Navigator::new(plan, self.tracker_config);
                format!("switched to {floor}")
            }
            Err(e) => format!("warning: {e}"),
        }
    }

    fn route(&mut self, start: &str, end: &str) -> String {
        match self.navigator.request_route(start, end) {
            Ok(begun) => {
                self.epoch = Instant::now();
                format!(
                    "Path found from {start} to {}!\n  {}\n{}",
                    begun.destination, begun.route, begun.instruction
                )
            }
            Err(e) => format!("warning: {e}"),
        }
    }

    fn nearest(&self, start: &str, category: &str) -> String {
        let Some(kind) = CellKind::from_selector(category) else {
            return format!(
                "warning: not an amenity category: {category} \
                 (girls_toilet, boys_toilet, lift, stair)"
            );
        };
        match nearest_amenity(self.navigator.plan(), start, kind) {
            Ok((name, route)) => format!("nearest {}: {name} ({} hops)", kind.label(), route.len() - 1),
            Err(e) => format!("warning: {e}"),
        }
    }

    fn advance(&mut self, input: NavInput) -> String {
        match self.navigator.advance(input) {
            Ok(TrackerEvent::Instruction(text)) => text,
            Ok(TrackerEvent::Advanced { instruction }) => {
                format!("Following path... {instruction}")
            }
            Ok(TrackerEvent::Arrived) => "You have arrived at your destination!".to_string(),
            Ok(TrackerEvent::Ignored) => "no active route (use \"route\" first)".to_string(),
            Err(e) => format!("warning: {e}"),
        }
    }

    fn whereabouts(&self) -> String {
        let tracker = self.navigator.tracker();
        match tracker.state() {
            TrackerState::Idle => "idle: no active route".to_string(),
            TrackerState::Following | TrackerState::Arrived => {
                let session = tracker.session().expect("state implies session");
                let position = session.position();
                format!(
                    "at {} ({} of {}), position ({}, {}), facing {}, heading {:.0}°",
                    session.current_node(),
                    session.cursor() + 1,
                    session.route().len(),
                    position.x,
                    position.y,
                    session.facing().label(),
                    session.heading_deg()
                )
            }
        }
    }
}
