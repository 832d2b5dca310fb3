use exgen::GeneratorConfig;
use exgen::display::render_check_report;

pub fn check_definitions(config: GeneratorConfig) {
    let plans = match exgen::check(&config) {
        Ok(plans) => plans,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    print!("{}", render_check_report(&plans));

    let has_problems = plans
        .iter()
        .flat_map(|plan| plan.kind_notice.iter().chain(&plan.notices))
        .any(|notice| notice.level.is_problem());
    if has_problems {
        std::process::exit(1);
    }
}
