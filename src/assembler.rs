use crate::config::GeneratorConfig;
use crate::error::EmitError;
use crate::lang::maven::render_root_pom;
use crate::lang::readme::render_project_readme;
use crate::lang::write_file;

/// Write the aggregate `pom.xml` and top-level `README.md` at the output root.
pub fn assemble_project(config: &GeneratorConfig, modules: &[String]) -> Result<(), EmitError> {
    write_file(
        &config.output_dir.join("pom.xml"),
        &render_root_pom(config, modules),
    )?;
    write_file(
        &config.output_dir.join("README.md"),
        &render_project_readme(config),
    )
}
