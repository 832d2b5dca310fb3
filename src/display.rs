use std::fmt::Write as _;

use crate::emitter::{ModulePlan, TestPlan};

pub fn render_plan_list(plans: &[ModulePlan]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(60));
    let _ = writeln!(out, "  {} exercise module(s)", plans.len());
    let _ = writeln!(out, "{}\n", "=".repeat(60));

    for plan in plans {
        let _ = writeln!(out, "{:>4}  {}  [{}]", plan.id, plan.dir_name, plan.kind.as_str());
        if let Some(code) = &plan.code {
            let tests = match &code.tests {
                TestPlan::Rendered(_) => "tests",
                TestPlan::NoCases => "no tests",
                TestPlan::Failed => "tests skipped",
            };
            let _ = writeln!(
                out,
                "      {}.{}  {}  ({})",
                code.package,
                code.entry.name,
                code.signature.declaration(),
                tests
            );
        }
    }
    out
}

/// Notices every item would record, grouped per item. Items with nothing to
/// report are omitted.
pub fn render_check_report(plans: &[ModulePlan]) -> String {
    let mut out = String::new();
    let mut problems = 0;

    for plan in plans {
        let notices: Vec<_> = plan.kind_notice.iter().chain(&plan.notices).collect();
        if notices.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} '{}':", plan.id, plan.title);
        for notice in notices {
            if notice.level.is_problem() {
                problems += 1;
            }
            let _ = writeln!(out, "  [{}] {}", notice.level.tag(), notice.message);
        }
    }

    let _ = writeln!(out, "\nChecked {} item(s): {} problem(s)", plans.len(), problems);
    out
}
