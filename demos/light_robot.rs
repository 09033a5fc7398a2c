//! Light Robot State Machine
//!
//! This example models a pedestrian-crossing robot: the light opens, the
//! robot walks when it reports ready, stops, and the light closes again.
//!
//! Key concepts:
//! - Declaring states and payload-carrying events with macros
//! - A tabular transition declaration with a guarded row
//! - Feeding events and inspecting the active state
//!
//! Run with: RUST_LOG=switchyard=trace cargo run --example light_robot

use std::error::Error;
use switchyard::{event_enum, state_enum, transition_table};

state_enum! {
    enum Robot {
        Closed,
        Opened,
        Walking,
    }
}

event_enum! {
    #[derive(Debug)]
    enum RobotEvent: RobotEventKind {
        Open,
        Close,
        Walk { ready: bool, distance: u32 },
        Stop,
    }
}

fn do_open(_: &RobotEvent) {
    println!("open");
}

fn do_close(_: &RobotEvent) {
    println!("close");
}

fn do_stop(_: &RobotEvent) {
    println!("stop");
}

fn do_walk(event: &RobotEvent) {
    if let RobotEvent::Walk { distance, .. } = event {
        println!("walking {distance}m");
    }
}

fn is_ready(event: &RobotEvent) -> bool {
    println!("robot is ready?");
    matches!(event, RobotEvent::Walk { ready: true, .. })
}

fn init_log() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_log();
    println!("=== Light Robot State Machine ===\n");

    let table = transition_table! {
        initial: Robot::Closed;
        Robot::Closed,  RobotEventKind::Open  => Robot::Opened,  do_open;
        Robot::Opened,  RobotEventKind::Close => Robot::Closed,  do_close;
        Robot::Opened,  RobotEventKind::Walk  => Robot::Walking, do_walk, if is_ready;
        Robot::Walking, RobotEventKind::Stop  => Robot::Opened,  do_stop;
        Robot::Walking, RobotEventKind::Close => Robot::Closed,  do_close;
    }?;

    let mut robot = std::sync::Arc::new(table).machine();
    println!("Initial state: {:?}\n", robot.current_state());

    let events = [
        RobotEvent::Open,
        RobotEvent::Close,
        RobotEvent::Open,
        RobotEvent::Walk {
            ready: false,
            distance: 3,
        },
        RobotEvent::Walk {
            ready: true,
            distance: 5,
        },
        RobotEvent::Stop,
        RobotEvent::Close,
        RobotEvent::Stop,
    ];

    for event in &events {
        let fired = robot.on(event);
        println!(
            "  {:?} -> {} (now {:?})",
            event,
            if fired { "fired" } else { "ignored" },
            robot.current_state()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
