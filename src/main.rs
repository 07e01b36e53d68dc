//! Ball Pit headless demo driver
//!
//! Steps the simulation at a fixed timestep for a number of frames and logs
//! a summary. Stands in for the window/render loop, which consumes the body
//! list once per frame through [`SimState::bodies`].

use glam::Vec2;

use ball_pit::config::{BoundaryPolicy, SimConfig};
use ball_pit::sim::{SimState, TickInput, tick};

struct Args {
    seed: u64,
    frames: u64,
    bounce: bool,
    wrap: bool,
    dump: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 0xBA11,
        frames: 600,
        bounce: false,
        wrap: false,
        dump: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => args.seed = parse_value(it.next(), "--seed"),
            "--frames" => args.frames = parse_value(it.next(), "--frames"),
            "--bounce" => args.bounce = true,
            "--wrap" => args.wrap = true,
            "--dump" => args.dump = true,
            other => {
                log::error!("unknown argument: {other}");
                eprintln!(
                    "usage: ball-pit [--seed N] [--frames N] [--bounce] [--wrap] [--dump]"
                );
                std::process::exit(1);
            }
        }
    }
    args
}

fn parse_value(value: Option<String>, flag: &str) -> u64 {
    match value.and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            log::error!("{flag} expects a number");
            std::process::exit(1);
        }
    }
}

fn total_momentum(state: &SimState) -> Vec2 {
    state.bodies().iter().map(|b| b.vel * b.mass).sum()
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let mut config = if args.bounce {
        SimConfig::bounce_demo()
    } else {
        SimConfig::default()
    };
    if args.wrap {
        config.boundary = BoundaryPolicy::Wrap;
    }
    let dt = config.dt();

    let mut state = SimState::new(config, args.seed);
    let input = TickInput::default();

    for _ in 0..args.frames {
        tick(&mut state, &input, dt);
    }

    let momentum = total_momentum(&state);
    log::info!(
        "ran {} frames: momentum=({:.3}, {:.3}) out_of_bounds={}",
        state.frame,
        momentum.x,
        momentum.y,
        state.world.out_of_bounds
    );

    if args.dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("state dump failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
