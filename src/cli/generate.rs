use exgen::GeneratorConfig;
use exgen::report::print_summary;

pub fn generate(config: GeneratorConfig) {
    let state = match exgen::run(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    print_summary(&state);
}
