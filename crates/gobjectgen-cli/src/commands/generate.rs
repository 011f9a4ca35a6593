// Generate a GObject header/source pair

use std::path::PathBuf;

use gobjectgen_generation::{Configuration, Generator};
use tracing::debug;

use super::Command;
use crate::error::CliResult;
use crate::logging::VerbosityLevel;
use crate::output::{self, OutputStyle};

/// Renders the configured type and writes both files into `target_dir`
pub struct GenerateCommand {
    pub config: Configuration,
    pub target_dir: PathBuf,
    pub verbosity: VerbosityLevel,
}

impl GenerateCommand {
    pub fn new(config: Configuration, target_dir: PathBuf) -> Self {
        Self {
            config,
            target_dir,
            verbosity: VerbosityLevel::Normal,
        }
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Command for GenerateCommand {
    fn execute(&self) -> CliResult<()> {
        let generator = Generator::new(self.config.clone())?;

        debug!(
            "Generating {} type {}/{} into {}",
            self.config.variant,
            self.config.module,
            self.config.object,
            self.target_dir.display()
        );

        let report = generator.generate(&self.target_dir)?;

        if self.verbosity.should_output(VerbosityLevel::Normal) {
            for file in report.files.iter() {
                output::print_success(&format!("Created {}", file.path.display()));
            }
        }

        if self.verbosity.should_output(VerbosityLevel::Verbose) {
            let names = generator.names();
            let style = OutputStyle::default();
            output::print_info("Derived names:");
            println!("{}", style.key_value("type", names.type_name()));
            println!("{}", style.key_value("type macro", names.type_macro()));
            println!("{}", style.key_value("parent", names.parent_type_name()));
            println!("{}", style.key_value("parent macro", names.parent_type_macro()));
            output::print_info("Written files:");
            for file in &report.write.files {
                let path = file.path.display().to_string();
                println!("{}", style.key_value(&path, &format!("{} bytes", file.bytes)));
            }
        }

        Ok(())
    }
}
