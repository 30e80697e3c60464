//! CLI probe for `focusboard_core`.
//!
//! # Responsibility
//! - Verify core crate linkage without any UI shell.
//! - Print a per-quadrant and per-status summary of a storage file.
//!
//! Usage: `focusboard [db-path]`
//!
//! Set `FOCUSBOARD_LOG_DIR` to an absolute directory to write rolling logs
//! at the build's default level.

use focusboard_core::views::{by_quadrant, by_status, time_report};
use focusboard_core::{
    core_version, default_log_level, init_logging, KeyValueStorage, Quadrant, SqliteStorage,
    TaskStatus, TaskStore,
};
use std::process::ExitCode;
use std::rc::Rc;

fn main() -> ExitCode {
    println!("focusboard_core version={}", core_version());

    if let Ok(log_dir) = std::env::var("FOCUSBOARD_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match summarize(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Rc<dyn KeyValueStorage> = Rc::new(SqliteStorage::open(path)?);
    let store = TaskStore::open(storage)?;
    let tasks = store.tasks();

    println!("tasks={}", tasks.len());
    for quadrant in Quadrant::ALL {
        println!("quadrant {quadrant}={}", by_quadrant(&tasks, quadrant).len());
    }
    for status in TaskStatus::ALL {
        println!("status {status}={}", by_status(&tasks, status).len());
    }
    println!("minutes_tracked={}", time_report(&tasks).total_minutes);
    Ok(())
}
