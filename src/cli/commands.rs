//! Command dispatch: turns parsed arguments into engine calls.

use std::io;
use std::thread;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::bst::Order;
use crate::cli::args::{BstCommands, Cli, Commands, ConfigCommands, GarageCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::garage::{Discipline, Garage};
use crate::hanoi::Hanoi;
use crate::layout::flow_graph;
use crate::playback::Playback;
use crate::tictactoe::{Status, TicTacToe};
use crate::tree_display::TreeDisplay;
use crate::values::ValueLog;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Bst { command }) => match command {
            BstCommands::Show { values } => _bst_show(values),
            BstCommands::Traverse {
                order,
                watch,
                values,
            } => _bst_traverse((*order).into(), *watch, values),
            BstCommands::Layout { values } => _bst_layout(values),
        },
        Some(Commands::Garage { command }) => match command {
            GarageCommands::Fifo { script } => _garage(Discipline::Fifo, script),
            GarageCommands::Lifo { script } => _garage(Discipline::Lifo, script),
        },
        Some(Commands::Tictactoe { squares }) => _tictactoe(squares),
        Some(Commands::Hanoi { disks, moves }) => _hanoi(*disks, moves),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "dsalab", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Replays textual values through the validation boundary.
fn fill_log(settings: &Settings, values: &[String]) -> CliResult<ValueLog> {
    let mut log = ValueLog::new(settings.max_values);
    for raw in values {
        log.push_str(raw)?;
    }
    Ok(log)
}

#[instrument]
fn _bst_show(values: &[String]) -> CliResult<()> {
    let settings = Settings::load()?;
    let log = fill_log(&settings, values)?;
    let tree = log.tree();
    debug!("tree holds {} nodes", tree.len());

    output::header("BST");
    output::info(&tree.to_tree_string());
    if log.is_empty() {
        output::warning("no values inserted yet");
    } else {
        output::action("values", &log.values().iter().join(", "));
    }
    Ok(())
}

#[instrument]
fn _bst_traverse(order: Order, watch: bool, values: &[String]) -> CliResult<()> {
    let settings = Settings::load()?;
    let log = fill_log(&settings, values)?;

    let tree = log.tree();
    let steps = tree.traverse(order);
    if steps.is_empty() {
        output::warning("insert at least one value to build a BST");
        return Ok(());
    }

    output::header(&format!("{order} traversal"));
    if watch {
        let mut playback = Playback::new(steps);
        // Interval cadence: every step, the first included, appears one
        // tick after the previous event
        while let Some(visit) = playback.tick().cloned() {
            thread::sleep(Duration::from_millis(settings.tick_ms));
            output::detail(&format!("{} [{}]", visit.value, visit.path_id));
        }
        output::action("result", &playback.transcript());
    } else {
        output::info(&steps.iter().map(|v| v.value.to_string()).join(" -> "));
    }
    Ok(())
}

#[instrument]
fn _bst_layout(values: &[String]) -> CliResult<()> {
    let settings = Settings::load()?;
    let log = fill_log(&settings, values)?;
    let graph = flow_graph(&log.tree());

    output::header(&format!("nodes ({})", graph.nodes.len()));
    for node in &graph.nodes {
        output::detail(&format!(
            "{:<6} value={:<6} side={:<5} x={:>7.1} y={:>7.1}",
            node.id, node.value, node.side, node.x, node.y
        ));
    }
    output::header(&format!("edges ({})", graph.edges.len()));
    for edge in &graph.edges {
        output::detail(&format!("{:<10} {} -> {}", edge.id, edge.source, edge.target));
    }
    Ok(())
}

#[instrument]
fn _garage(discipline: Discipline, script: &[String]) -> CliResult<()> {
    let settings = Settings::load()?;
    let mut garage = Garage::with_limits(discipline, settings.garage_capacity, settings.plate_max_len);

    for token in script {
        let outcome = if token == "-" {
            garage.depart_next().map(|plate| format!("car {plate} departed"))
        } else if let Some(plate) = token.strip_prefix('+') {
            garage.arrive(plate).map(|_| format!("car {plate} arrived"))
        } else if let Some(plate) = token.strip_prefix('-') {
            garage.depart(plate).map(|plate| format!("car {plate} departed"))
        } else {
            return Err(CliError::InvalidArgs(format!(
                "unknown script token '{token}' (expected +PLATE, -PLATE or -)"
            )));
        };
        // The page surfaces rejected actions as a notice and keeps going
        match outcome {
            Ok(msg) => output::success(&msg),
            Err(e) => output::warning(&e),
        }
    }

    output::header(&format!("{discipline} garage"));
    output::detail(&format!(
        "parked ({}/{}): {}",
        garage.len(),
        garage.capacity(),
        garage.cars().join(", ")
    ));
    output::detail(&format!(
        "arrivals: {}, departures: {}",
        garage.arrivals(),
        garage.departures()
    ));
    Ok(())
}

#[instrument]
fn _tictactoe(squares: &[String]) -> CliResult<()> {
    let mut game = TicTacToe::new();

    for raw in squares {
        let square: usize = raw
            .parse()
            .map_err(|_| CliError::InvalidArgs(format!("not a square index: '{raw}'")))?;
        let player = game.next_player();
        match game.play(square) {
            Ok(_) => debug!("{player} played square {square}"),
            Err(e) => output::warning(&e),
        }
    }

    output::info(&game.render());
    match game.status() {
        Status::Won { mark, line } => {
            output::success(&format!("{mark} wins on line {line:?}"));
        }
        Status::Draw => output::action("result", &"draw"),
        Status::InProgress => output::action("next player", &game.next_player()),
    }
    Ok(())
}

#[instrument]
fn _hanoi(disks: u8, moves: &[String]) -> CliResult<()> {
    let mut game = Hanoi::new(disks).map_err(CliError::Lab)?;

    for raw in moves {
        let (from, to) = parse_move(raw)?;
        match game.move_disk(from, to) {
            Ok(disk) => debug!("moved disk {disk} from peg {from} to peg {to}"),
            Err(e) => output::warning(&e),
        }
    }

    output::info(&game.render());
    output::detail(&format!(
        "moves: {} (minimum {})",
        game.moves(),
        game.min_moves()
    ));
    if game.is_solved() {
        if game.exceeded_min() {
            output::success(&"solved, but not in the minimum number of moves");
        } else {
            output::success(&"solved");
        }
    } else {
        output::action("status", &"unsolved");
    }
    Ok(())
}

fn parse_move(raw: &str) -> CliResult<(usize, usize)> {
    let bad = || CliError::InvalidArgs(format!("invalid move '{raw}' (expected FROM-TO, e.g. 0-2)"));
    let (from, to) = raw.split_once('-').ok_or_else(|| bad())?;
    Ok((
        from.trim().parse().map_err(|_| bad())?,
        to.trim().parse().map_err(|_| bad())?,
    ))
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::header("settings");
    output::detail(&format!("max_values      = {}", settings.max_values));
    output::detail(&format!("garage_capacity = {}", settings.garage_capacity));
    output::detail(&format!("plate_max_len   = {}", settings.plate_max_len));
    output::detail(&format!("tick_ms         = {}", settings.tick_ms));
    if let Some(path) = Settings::config_file() {
        output::action("config file", &path.display());
    }
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let path = Settings::write_default().map_err(CliError::Lab)?;
    output::success(&format!("wrote defaults to {}", path.display()));
    Ok(())
}
