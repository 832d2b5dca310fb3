use exgen::GeneratorConfig;
use exgen::display::render_plan_list;

pub fn list_modules(config: GeneratorConfig) {
    match exgen::check(&config) {
        Ok(plans) => print!("{}", render_plan_list(&plans)),
        Err(e) => {
            eprintln!("Failed to load exercises: {}", e);
            std::process::exit(1);
        }
    }
}
