use std::fmt::Write as _;

use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    AutoFill,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            NoticeLevel::AutoFill => "auto-fill",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "error",
        }
    }

    /// Warnings and errors are listed in the summary; the rest are progress.
    pub fn is_problem(&self) -> bool {
        matches!(self, NoticeLevel::Warning | NoticeLevel::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn auto_fill(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::AutoFill, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn log(&self) {
        match self.level {
            NoticeLevel::AutoFill | NoticeLevel::Info => {
                info!("[{}] {}", self.level.tag(), self.message)
            }
            NoticeLevel::Warning => warn!("[{}] {}", self.level.tag(), self.message),
            NoticeLevel::Error => error!("[{}] {}", self.level.tag(), self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub id: String,
    pub title: String,
}

/// Everything one generation pass produced, in processing order.
#[derive(Debug, Default)]
pub struct RunState {
    pub modules: Vec<String>,
    pub notices: Vec<Notice>,
    pub skipped: Vec<SkippedItem>,
    pub elapsed: Option<chrono::Duration>,
}

impl RunState {
    pub fn record(&mut self, notice: Notice) {
        notice.log();
        self.notices.push(notice);
    }

    pub fn problems(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.level.is_problem())
    }

    pub fn has_problems(&self) -> bool {
        self.problems().next().is_some()
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices.iter().filter(|n| n.level == level).count()
    }
}

pub fn render_summary(state: &RunState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Generation summary ===");
    let _ = writeln!(out, "Modules created: {}", state.modules.len());
    let auto_filled = state.count(NoticeLevel::AutoFill);
    if auto_filled > 0 {
        let _ = writeln!(out, "Values auto-filled: {}", auto_filled);
    }

    if !state.skipped.is_empty() {
        let _ = writeln!(out, "Modules skipped due to errors: {}", state.skipped.len());
        for item in &state.skipped {
            let _ = writeln!(out, " - {}: {}", item.id, item.title);
        }
    }

    if state.has_problems() {
        let _ = writeln!(out, "\nErrors / Warnings:");
        for notice in state.problems() {
            let _ = writeln!(out, " - {}", notice.message);
        }
        let _ = writeln!(out, "\nFix reported issues and re-run the generator if needed.");
    } else {
        let _ = writeln!(out, "No errors reported. Generation completed successfully ✅");
    }

    if let Some(elapsed) = state.elapsed {
        let _ = writeln!(out, "Finished in {}", format_elapsed(elapsed));
    }
    out
}

pub fn print_summary(state: &RunState) {
    print!("{}", render_summary(state));
}

fn format_elapsed(elapsed: chrono::Duration) -> String {
    let total_ms = elapsed.num_milliseconds().max(0);
    let total_secs = total_ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else if total_secs > 0 {
        format!("{}.{:03}s", seconds, total_ms % 1000)
    } else {
        format!("{}ms", total_ms)
    }
}
