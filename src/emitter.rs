//! Per-item pipeline: resolve the item into a [`ModulePlan`] (pure, no I/O),
//! then write the plan's files. Problems are returned as notices for the
//! caller to record; only filesystem failures make an item fail outright.

use std::path::PathBuf;

use tracing::info;

use crate::config::{EXERCISES_DIR, GeneratorConfig};
use crate::error::EmitError;
use crate::lang::java::{render_solution_class, render_test_class};
use crate::lang::maven::render_child_pom;
use crate::lang::readme::{VERIFY_SCRIPT, render_module_readme};
use crate::lang::{create_dir, write_file, write_script};
use crate::models::{EntryClass, ExerciseItem, ExerciseKind, MethodSignature, parse_signature};
use crate::naming::title_to_classname;
use crate::report::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestPlan {
    Rendered(String),
    NoCases,
    Failed,
}

#[derive(Debug, Clone)]
pub struct CodePlan {
    pub package: String,
    pub entry: EntryClass,
    pub signature: MethodSignature,
    pub tests: TestPlan,
}

#[derive(Debug, Clone)]
pub struct ModulePlan {
    pub id: String,
    pub title: String,
    pub dir_name: String,
    pub kind: ExerciseKind,
    pub code: Option<CodePlan>,
    /// Recorded even when the module cannot be written.
    pub kind_notice: Option<Notice>,
    pub notices: Vec<Notice>,
}

#[derive(Debug)]
pub struct ModuleOutcome {
    /// Path relative to the output root, as listed in the aggregate pom.
    pub module_path: String,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    Success,
    PartialSuccess,
    Skipped,
}

#[derive(Debug)]
pub struct ItemReport {
    pub id: String,
    pub title: String,
    pub notices: Vec<Notice>,
    pub outcome: Result<ModuleOutcome, EmitError>,
}

impl ItemReport {
    pub fn class(&self) -> OutcomeClass {
        match &self.outcome {
            Err(_) => OutcomeClass::Skipped,
            Ok(_) if self.notices.iter().any(|n| n.level.is_problem()) => {
                OutcomeClass::PartialSuccess
            }
            Ok(_) => OutcomeClass::Success,
        }
    }
}

// --- Decisions ---

pub fn resolve_kind(item: &ExerciseItem) -> (ExerciseKind, Option<Notice>) {
    match item.kind.as_deref() {
        Some("code") => (ExerciseKind::Code, None),
        Some(other) => (ExerciseKind::NonCode(other.to_string()), None),
        None => {
            let notice = Notice::warning(format!(
                "entry {} ('{}') missing 'type' -> defaulting to '{}'",
                item.id_text(),
                item.title_text(),
                ExerciseKind::DEFAULT_NON_CODE
            ));
            (
                ExerciseKind::NonCode(ExerciseKind::DEFAULT_NON_CODE.to_string()),
                Some(notice),
            )
        }
    }
}

pub fn resolve_entry_class(item: &ExerciseItem) -> (EntryClass, Option<Notice>) {
    if let Some(entry) = item.entry_class.as_deref().and_then(EntryClass::parse) {
        return (entry, None);
    }
    let name = title_to_classname(item.title_text());
    let notice = Notice::auto_fill(format!(
        "entry_class for '{}' -> {}",
        item.title_text(),
        name
    ));
    (
        EntryClass {
            subpackage: None,
            name,
        },
        Some(notice),
    )
}

pub fn resolve_signature_text(item: &ExerciseItem) -> (String, Option<Notice>) {
    match item.method_signature.as_deref().filter(|s| !s.is_empty()) {
        Some(sig) => (sig.to_string(), None),
        None => {
            let notice = Notice::auto_fill(format!(
                "method_signature for '{}' -> {}",
                item.title_text(),
                MethodSignature::DEFAULT_TEXT
            ));
            (MethodSignature::DEFAULT_TEXT.to_string(), Some(notice))
        }
    }
}

/// An unparsable signature still yields a stub, declared as `void run()`.
pub fn parse_or_fallback(text: &str, item: &ExerciseItem) -> (MethodSignature, Option<Notice>) {
    match parse_signature(text) {
        Ok(sig) => (sig, None),
        Err(e) => {
            let notice = Notice::error(format!(
                "Failed to parse signature for {} '{}': {}",
                item.id_text(),
                item.title_text(),
                e
            ));
            (MethodSignature::fallback(), Some(notice))
        }
    }
}

fn plan_tests(
    item: &ExerciseItem,
    package: &str,
    entry: &EntryClass,
    signature: &MethodSignature,
) -> (TestPlan, Notice) {
    if item.test_cases.is_empty() {
        let notice = Notice::info(format!(
            "code module {} ('{}') has no test_cases; generated stub only.",
            item.id_text(),
            item.title_text()
        ));
        return (TestPlan::NoCases, notice);
    }

    match render_test_class(package, &entry.name, signature, &item.test_cases) {
        Ok(src) => {
            let notice = Notice::info(format!(
                "generated {} test case(s) for {} '{}'",
                item.test_cases.len(),
                item.id_text(),
                item.title_text()
            ));
            (TestPlan::Rendered(src), notice)
        }
        Err(e) => {
            let notice = Notice::warning(format!(
                "Skipping tests for {} '{}': {}",
                item.id_text(),
                item.title_text(),
                e
            ));
            (TestPlan::Failed, notice)
        }
    }
}

pub fn plan_item(config: &GeneratorConfig, item: &ExerciseItem) -> ModulePlan {
    let (kind, kind_notice) = resolve_kind(item);
    let mut notices = Vec::new();

    let code = match kind {
        ExerciseKind::Code => {
            let (entry, entry_notice) = resolve_entry_class(item);
            let (text, text_notice) = resolve_signature_text(item);
            let (signature, parse_notice) = parse_or_fallback(&text, item);
            notices.extend(entry_notice);
            notices.extend(text_notice);
            notices.extend(parse_notice);

            let package = entry.package_in(&config.module_package(&item.id_text()));
            let (tests, test_notice) = plan_tests(item, &package, &entry, &signature);
            notices.push(test_notice);

            Some(CodePlan {
                package,
                entry,
                signature,
                tests,
            })
        }
        ExerciseKind::NonCode(_) => None,
    };

    ModulePlan {
        id: item.id_text(),
        title: item.title_text().to_string(),
        dir_name: item.module_dir_name(),
        kind,
        code,
        kind_notice,
        notices,
    }
}

// --- Output ---

fn package_dir(package: &str) -> PathBuf {
    package.split('.').collect()
}

/// Write every file of the plan. Existing files are overwritten, except a
/// hand-authored `verify.sh`.
pub fn write_module(
    config: &GeneratorConfig,
    item: &ExerciseItem,
    plan: &ModulePlan,
) -> Result<ModuleOutcome, EmitError> {
    let module_dir = config.exercises_dir().join(&plan.dir_name);
    create_dir(&module_dir)?;
    let mut files = Vec::new();

    let pom = module_dir.join("pom.xml");
    write_file(&pom, &render_child_pom(config, &plan.dir_name))?;
    files.push(pom);

    let readme = module_dir.join("README.md");
    write_file(&readme, &render_module_readme(item))?;
    files.push(readme);

    match &plan.code {
        Some(code) => {
            let package_path = package_dir(&code.package);

            let main_dir = module_dir.join("src").join("main").join("java").join(&package_path);
            create_dir(&main_dir)?;
            let stub = main_dir.join(format!("{}.java", code.entry.name));
            write_file(
                &stub,
                &render_solution_class(&code.package, &code.entry.name, &code.signature),
            )?;
            files.push(stub);

            if let TestPlan::Rendered(src) = &code.tests {
                let test_dir = module_dir.join("src").join("test").join("java").join(&package_path);
                create_dir(&test_dir)?;
                let test = test_dir.join(format!("{}Test.java", code.entry.name));
                write_file(&test, src)?;
                files.push(test);
            }
        }
        None => {
            let verify = module_dir.join("verify.sh");
            if !verify.exists() {
                write_script(&verify, VERIFY_SCRIPT)?;
                files.push(verify);
            }
        }
    }

    Ok(ModuleOutcome {
        module_path: format!("{}/{}", EXERCISES_DIR, plan.dir_name),
        files,
    })
}

/// Plan and write one item. A write failure drops the plan's notices (those
/// steps never ran) and replaces them with the failure itself.
pub fn emit_item(config: &GeneratorConfig, item: &ExerciseItem) -> ItemReport {
    let plan = plan_item(config, item);
    let outcome = write_module(config, item, &plan);

    let mut notices: Vec<Notice> = plan.kind_notice.iter().cloned().collect();
    match &outcome {
        Ok(module) => {
            info!(
                "[ok] created module: {} ({} files written)",
                module.module_path,
                module.files.len()
            );
            notices.extend(plan.notices);
        }
        Err(e) => notices.push(Notice::error(format!(
            "Failed to create module for {} '{}': {}",
            plan.id, plan.title, e
        ))),
    }

    ItemReport {
        id: plan.id,
        title: plan.title,
        notices,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_exercises;
    use crate::report::NoticeLevel;
    use std::fs;
    use tempfile::TempDir;

    fn item(yaml: &str) -> ExerciseItem {
        parse_exercises(yaml).unwrap().remove(0)
    }

    fn config_in(dir: &TempDir) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_resolve_kind() {
        let (kind, notice) = resolve_kind(&item("- id: 1\n  type: code\n"));
        assert_eq!(kind, ExerciseKind::Code);
        assert!(notice.is_none());

        let (kind, notice) = resolve_kind(&item("- id: 2\n  type: design\n"));
        assert_eq!(kind, ExerciseKind::NonCode("design".to_string()));
        assert!(notice.is_none());

        let (kind, notice) = resolve_kind(&item("- id: 3\n  title: Setup\n"));
        assert_eq!(kind.as_str(), "env");
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "entry 3 ('Setup') missing 'type' -> defaulting to 'env'");
    }

    #[test]
    fn test_auto_fill_everything() {
        let plan = plan_item(
            &GeneratorConfig::default(),
            &item("- id: 7\n  title: Two Sum\n  type: code\n"),
        );
        let code = plan.code.unwrap();
        assert_eq!(code.entry.name, "TwoSum");
        assert_eq!(code.signature, MethodSignature::fallback());
        assert_eq!(code.package, "org.javamastery.ex7");
        assert_eq!(code.tests, TestPlan::NoCases);

        let levels: Vec<NoticeLevel> = plan.notices.iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            [NoticeLevel::AutoFill, NoticeLevel::AutoFill, NoticeLevel::Info]
        );
        assert_eq!(plan.notices[0].message, "entry_class for 'Two Sum' -> TwoSum");
        assert_eq!(plan.notices[1].message, "method_signature for 'Two Sum' -> void run()");
    }

    #[test]
    fn test_bad_signature_falls_back() {
        let plan = plan_item(
            &GeneratorConfig::default(),
            &item("- id: 8\n  title: Bad\n  type: code\n  entry_class: Bad\n  method_signature: \"int broken(\"\n"),
        );
        let code = plan.code.unwrap();
        assert_eq!(code.signature, MethodSignature::fallback());
        assert_eq!(plan.notices[0].level, NoticeLevel::Error);
        assert!(plan.notices[0].message.starts_with("Failed to parse signature for 8 'Bad': "));
    }

    #[test]
    fn test_dotted_entry_class_package() {
        let plan = plan_item(
            &GeneratorConfig::default(),
            &item("- id: 57\n  title: T\n  type: code\n  entry_class: time.TimeUtils\n  method_signature: \"String toUtcIso(String s, String zone)\"\n"),
        );
        let code = plan.code.unwrap();
        assert_eq!(code.package, "org.javamastery.ex57.time");
        assert_eq!(code.entry.name, "TimeUtils");
        assert!(plan.notices.iter().all(|n| n.level != NoticeLevel::AutoFill));
    }

    #[test]
    fn test_write_code_module() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let exercise = item(
            "- id: 1\n  title: Sum Array\n  type: code\n  method_signature: \"int sumArray(int[] arr)\"\n  test_cases:\n    - args: [[1, 2, 3]]\n      expected: 6\n",
        );

        let report = emit_item(&config, &exercise);
        assert_eq!(report.class(), OutcomeClass::Success);
        let outcome = report.outcome.unwrap();
        assert_eq!(outcome.module_path, "exercises/1_sum-array");
        assert_eq!(outcome.files.len(), 4);

        let module = dir.path().join("exercises").join("1_sum-array");
        let test = module.join("src/test/java/org/javamastery/ex1/SumArrayTest.java");
        let src = fs::read_to_string(test).unwrap();
        assert!(src.contains("assertEquals(6, SumArray.sumArray(new int[]{1,2,3}));"));
        assert!(module.join("src/main/java/org/javamastery/ex1/SumArray.java").is_file());
        assert!(!module.join("verify.sh").exists());
    }

    #[test]
    fn test_failed_tests_are_partial_success() {
        let dir = TempDir::new().unwrap();
        let exercise = item(
            "- id: 2\n  title: Add\n  type: code\n  method_signature: \"int add(int a, int b)\"\n  test_cases:\n    - args: [1]\n      expected: 1\n",
        );

        let report = emit_item(&config_in(&dir), &exercise);
        assert_eq!(report.class(), OutcomeClass::PartialSuccess);
        let module = dir.path().join("exercises").join("2_add");
        assert!(module.join("src/main/java/org/javamastery/ex2/Add.java").is_file());
        assert!(!module.join("src/test").exists());
    }

    #[test]
    fn test_verify_script_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let exercise = item("- id: 5\n  title: Docker\n  type: env\n");

        let module = dir.path().join("exercises").join("5_docker");
        fs::create_dir_all(&module).unwrap();
        fs::write(module.join("verify.sh"), "custom\n").unwrap();

        let report = emit_item(&config, &exercise);
        assert_eq!(report.outcome.unwrap().files.len(), 2);
        assert_eq!(fs::read_to_string(module.join("verify.sh")).unwrap(), "custom\n");
    }

    #[test]
    fn test_unwritable_module_is_skipped() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::create_dir_all(config.exercises_dir()).unwrap();
        fs::write(config.exercises_dir().join("9_blocked"), "not a directory").unwrap();

        let report = emit_item(&config, &item("- id: 9\n  title: Blocked\n"));
        assert_eq!(report.class(), OutcomeClass::Skipped);
        let messages: Vec<&str> = report.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("missing 'type'"));
        assert!(messages[1].starts_with("Failed to create module for 9 'Blocked': "));
    }
}
