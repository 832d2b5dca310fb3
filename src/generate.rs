use chrono::Local;
use tracing::{debug, info};

use crate::assembler::assemble_project;
use crate::config::GeneratorConfig;
use crate::emitter::{ModulePlan, emit_item, plan_item};
use crate::error::Result;
use crate::lang::create_dir;
use crate::models::load_exercises;
use crate::report::{Notice, RunState, SkippedItem};

/// One full regeneration pass. Only a missing or unparsable definition file
/// (or an output root that cannot be created) is an `Err`; everything else
/// ends up in the returned [`RunState`].
pub fn run(config: &GeneratorConfig) -> Result<RunState> {
    let started = Local::now();
    let items = load_exercises(&config.input)?;
    info!("Loaded {} exercise definitions from {}", items.len(), config.input.display());

    create_dir(&config.exercises_dir())?;

    let mut state = RunState::default();
    for item in &items {
        let report = emit_item(config, item);
        debug!("{} '{}' -> {:?}", report.id, report.title, report.class());

        for notice in report.notices {
            state.record(notice);
        }
        match report.outcome {
            Ok(module) => state.modules.push(module.module_path),
            Err(_) => state.skipped.push(SkippedItem {
                id: report.id,
                title: report.title,
            }),
        }
    }

    if let Err(e) = assemble_project(config, &state.modules) {
        state.record(Notice::error(format!("Failed to write root pom/README: {}", e)));
    }

    state.elapsed = Some(Local::now() - started);
    Ok(state)
}

/// Plan every item without touching the filesystem.
pub fn check(config: &GeneratorConfig) -> Result<Vec<ModulePlan>> {
    let items = load_exercises(&config.input)?;
    Ok(items.iter().map(|item| plan_item(config, item)).collect())
}
