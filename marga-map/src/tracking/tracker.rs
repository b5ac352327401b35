//! Route progress state machine.
//!
//! One state machine with two interchangeable advance strategies: a
//! continuous-heading strategy (compass samples with a dwell-time
//! confirmation) and a discrete-command strategy (move/turn commands
//! stepping a grid position). Both feed through the single
//! [`ProgressTracker::advance`] entry point.

use log::{debug, trace};
use std::time::Duration;

use crate::core::{within_tolerance, CellKind, Facing, GridCoord};
use crate::error::{MargaError, Result};
use crate::guidance::{required_bearing, InstructionGenerator, DirectionPolicy};
use crate::plan::FloorPlan;
use crate::routing::Route;
use crate::tracking::config::TrackerConfig;
use crate::tracking::session::NavigationSession;

/// Tracker lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerState {
    /// No active route
    Idle,
    /// Cursor somewhere before the final route node
    Following,
    /// Cursor on the final node; terminal until a new route request
    Arrived,
}

/// One unit of live input, whichever deployment variant produces it.
#[derive(Clone, Copy, Debug)]
pub enum NavInput {
    /// Continuous compass sample. `at` is time since the session began;
    /// the dwell timer compares consecutive sample times, so tests can
    /// drive it synthetically.
    Heading { degrees: f32, at: Duration },
    /// Discrete movement command
    Command(MoveCommand),
}

/// Discrete-variant commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCommand {
    /// Step one cell along the current facing
    Forward,
    /// Rotate facing 90° counter-clockwise
    TurnLeft,
    /// Rotate facing 90° clockwise
    TurnRight,
}

/// What one advance step produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Instruction refreshed, cursor unchanged
    Instruction(String),
    /// Cursor advanced; here is the next instruction
    Advanced { instruction: String },
    /// Cursor reached the final route node
    Arrived,
    /// Input received while no route is active (or after arrival)
    Ignored,
}

/// Progress tracker: advances a session cursor from live input.
///
/// Owns the [`NavigationSession`] exclusively. All user-correctable
/// failures leave the session untouched.
pub struct ProgressTracker {
    config: TrackerConfig,
    generator: InstructionGenerator,
    session: Option<NavigationSession>,
}

impl ProgressTracker {
    /// Create an idle tracker.
    pub fn new(config: TrackerConfig) -> Self {
        let generator = InstructionGenerator::new(config.policy);
        ProgressTracker {
            config,
            generator,
            session: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> TrackerState {
        match &self.session {
            None => TrackerState::Idle,
            Some(s) if s.is_arrived() => TrackerState::Arrived,
            Some(_) => TrackerState::Following,
        }
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&NavigationSession> {
        self.session.as_ref()
    }

    /// The configured instruction policy
    pub fn policy(&self) -> DirectionPolicy {
        self.generator.policy()
    }

    /// Install a freshly computed route, replacing any prior session,
    /// and return the first instruction.
    ///
    /// The caller has already rejected identical start/end pairs, so
    /// the route has at least two nodes.
    pub fn start_route(&mut self, plan: &FloorPlan, route: Route) -> String {
        debug_assert!(route.len() >= 2);
        let start_position = plan.coordinate(route.start()).unwrap_or_default();
        debug!("following route {route} from {start_position:?}");
        let session = NavigationSession::new(route, start_position);
        let instruction = self.generator.instruction(
            plan,
            session.route(),
            session.cursor(),
            session.facing(),
        );
        self.session = Some(session);
        instruction
    }

    /// Drop the active session and return to `Idle`.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Instruction for the current cursor position, if a route is active.
    pub fn current_instruction(&self, plan: &FloorPlan) -> Option<String> {
        let session = self.session.as_ref()?;
        Some(
            self.generator
                .instruction(plan, session.route(), session.cursor(), session.facing()),
        )
    }

    /// Feed one input event and advance the state machine.
    ///
    /// Input while `Idle` or `Arrived` is ignored. `InvalidMove` is the
    /// only error and changes nothing.
    pub fn advance(&mut self, plan: &FloorPlan, input: NavInput) -> Result<TrackerEvent> {
        match self.state() {
            TrackerState::Idle | TrackerState::Arrived => return Ok(TrackerEvent::Ignored),
            TrackerState::Following => {}
        }
        match input {
            NavInput::Heading { degrees, at } => Ok(self.advance_heading(plan, degrees, at)),
            NavInput::Command(command) => self.advance_command(plan, command),
        }
    }

    /// Continuous-heading strategy: require the heading to sit within
    /// tolerance of the bearing to the next node, continuously, for the
    /// dwell threshold. Any excursion resets the timer outright.
    fn advance_heading(&mut self, plan: &FloorPlan, degrees: f32, at: Duration) -> TrackerEvent {
        let session = self.session.as_mut().expect("checked Following");
        session.set_heading(degrees);

        let cursor = session.cursor();
        let from = plan.coordinate(session.route().names()[cursor].as_str());
        let to = plan.coordinate(session.route().names()[cursor + 1].as_str());
        let needed = required_bearing(from, to);

        if !within_tolerance(needed, degrees, self.config.heading_tolerance_deg) {
            trace!("heading {degrees:.0}° off bearing {needed:.0}°, dwell reset");
            session.set_dwell_start(None);
            return self.refresh_instruction(plan);
        }

        let started = match session.dwell_start() {
            Some(started) => started,
            None => {
                session.set_dwell_start(Some(at));
                at
            }
        };
        if at.saturating_sub(started) < self.config.dwell_threshold() {
            return self.refresh_instruction(plan);
        }

        session.set_dwell_start(None);
        session.advance_to(cursor + 1);
        debug!("heading held {needed:.0}°, advanced to {}", session.current_node());
        if session.is_arrived() {
            TrackerEvent::Arrived
        } else {
            let session = self.session.as_ref().expect("session active");
            TrackerEvent::Advanced {
                instruction: self.generator.instruction(
                    plan,
                    session.route(),
                    session.cursor(),
                    session.facing(),
                ),
            }
        }
    }

    /// Discrete-command strategy: turns rotate the facing, forward
    /// steps the grid position and pulls the cursor along when the
    /// landing cell names a later route node.
    fn advance_command(&mut self, plan: &FloorPlan, command: MoveCommand) -> Result<TrackerEvent> {
        let session = self.session.as_mut().expect("checked Following");
        match command {
            MoveCommand::TurnLeft => {
                let facing = session.facing().turned_left();
                session.set_facing(facing);
                trace!("turned left, now facing {}", facing.label());
                Ok(self.refresh_instruction(plan))
            }
            MoveCommand::TurnRight => {
                let facing = session.facing().turned_right();
                session.set_facing(facing);
                trace!("turned right, now facing {}", facing.label());
                Ok(self.refresh_instruction(plan))
            }
            MoveCommand::Forward => self.step_forward(plan),
        }
    }

    fn step_forward(&mut self, plan: &FloorPlan) -> Result<TrackerEvent> {
        let session = self.session.as_mut().expect("checked Following");
        let facing = session.facing();
        let (dx, dy) = facing.step();
        let target = session.position().offset(dx, dy);

        let cell = plan.grid().cell(target);
        if !plan.grid().in_bounds(target) || cell.kind == CellKind::Empty {
            return Err(MargaError::InvalidMove(format!(
                "cannot walk {} from ({}, {})",
                facing.label(),
                session.position().x,
                session.position().y
            )));
        }

        session.set_position(target);
        let landed = cell.name.clone();
        trace!("stepped {} to ({}, {})", facing.label(), target.x, target.y);

        if let Some(name) = landed {
            let next = session.route().position_from(&name, session.cursor() + 1);
            if let Some(index) = next {
                session.advance_to(index);
                debug!("reached route node {name}");
                if session.is_arrived() {
                    return Ok(TrackerEvent::Arrived);
                }
                let session = self.session.as_ref().expect("session active");
                return Ok(TrackerEvent::Advanced {
                    instruction: self.generator.instruction(
                        plan,
                        session.route(),
                        session.cursor(),
                        session.facing(),
                    ),
                });
            }
        }
        Ok(self.refresh_instruction(plan))
    }

    fn refresh_instruction(&self, plan: &FloorPlan) -> TrackerEvent {
        let session = self.session.as_ref().expect("session active");
        TrackerEvent::Instruction(self.generator.instruction(
            plan,
            session.route(),
            session.cursor(),
            session.facing(),
        ))
    }

    /// Convenience accessor for the grid position marker.
    pub fn position(&self) -> Option<GridCoord> {
        self.session.as_ref().map(NavigationSession::position)
    }

    /// Convenience accessor for the facing marker.
    pub fn facing(&self) -> Option<Facing> {
        self.session.as_ref().map(NavigationSession::facing)
    }
}
