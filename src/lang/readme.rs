use crate::config::GeneratorConfig;
use crate::models::ExerciseItem;

pub fn render_module_readme(item: &ExerciseItem) -> String {
    let difficulty = item
        .difficulty
        .as_ref()
        .map(|d| d.plain_text())
        .unwrap_or_default();

    let mut content = format!(
        "# {}\n\n**Difficulty:** {}\n\n**Topics:** {}\n\n## Description\n\n{}\n\n## Learning objectives\n\n",
        item.title.as_deref().unwrap_or_default(),
        difficulty,
        item.topics.join(", "),
        item.description.as_deref().unwrap_or_default(),
    );
    for objective in item.objectives() {
        content.push_str(&format!("- {}\n", objective));
    }

    content.push_str("\n## Acceptance criteria\n\n");
    for criterion in item.acceptance() {
        content.push_str(&format!("- {}\n", criterion));
    }

    content.push_str("\n## Hints & pitfalls\n\n- Think about edge cases and JVM concerns.\n\n");
    content.push_str(
        "## How to test\n\nRun `mvn test` in this module. For env tasks run `./verify.sh` if present.\n",
    );
    content
}

pub fn render_project_readme(config: &GeneratorConfig) -> String {
    format!(
        "# {}\n\nRun `exgen` to re-generate modules from `{}`.\n\nBuild and test: `mvn -DskipTests=false test`\n",
        config.project_title,
        config
            .input
            .file_name()
            .unwrap_or(config.input.as_os_str())
            .to_string_lossy(),
    )
}

pub const VERIFY_SCRIPT: &str = r#"#!/usr/bin/env bash

# Verification script for environment task
# Implement checks here, e.g., run a server, call endpoints, assert outputs

echo "No automated checks implemented. Follow README instructions."
"#;
