// Argument parsing and command dispatch

use std::env;

use clap::{ArgAction, Parser, ValueEnum};
use gobjectgen_generation::{Configuration, ParentType, Variant};

use crate::commands::{Command, GenerateCommand};
use crate::error::{CliError, CliResult};
use crate::logging::VerbosityLevel;

/// gobjectgen - GObject boilerplate generator
#[derive(Parser, Debug)]
#[command(name = "gobjectgen")]
#[command(bin_name = "gobjectgen")]
#[command(about = "Generate GObject header and source boilerplate")]
#[command(
    long_about = "Generate a <module>-<object>.h / .c pair in the current directory for a GObject type.\n\nExamples:\n  gobjectgen --module Gtk --object Button\n  gobjectgen -m Gio -o Stream -p G Object -t derivable"
)]
#[command(version)]
pub struct Cli {
    /// Module name, e.g. Gtk, Gio
    #[arg(short, long, value_name = "NAME")]
    pub module: String,

    /// Object name, e.g. Button, Window
    #[arg(short, long, value_name = "NAME")]
    pub object: String,

    /// Module and class name of the parent class
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["MODULE", "CLASS"],
        default_values = ["G", "Object"],
        action = ArgAction::Set
    )]
    pub parent: Vec<String>,

    /// Kind of type to create
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Final)]
    pub variant: TypeArg,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command-line spelling of [`Variant`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    /// Type that cannot be subclassed
    Final,
    /// Type that can be subclassed, with private data
    Derivable,
}

impl From<TypeArg> for Variant {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Final => Variant::Final,
            TypeArg::Derivable => Variant::Derivable,
        }
    }
}

impl Cli {
    /// Build the generator configuration from parsed arguments
    pub fn to_configuration(&self) -> CliResult<Configuration> {
        let parent = match self.parent.as_slice() {
            [module, class] => ParentType::new(module.as_str(), class.as_str()),
            other => {
                return Err(CliError::InvalidArgument {
                    message: format!(
                        "--parent takes exactly two values (module and class), got {}",
                        other.len()
                    ),
                })
            }
        };

        Ok(Configuration::new(self.module.as_str(), self.object.as_str())
            .with_parent(parent)
            .with_variant(self.variant.into()))
    }
}

/// Dispatches parsed arguments to the command handler
pub struct CommandRouter;

impl CommandRouter {
    /// Execute already-parsed arguments, writing into the current directory
    pub fn execute(cli: &Cli, verbosity: VerbosityLevel) -> CliResult<()> {
        let config = cli.to_configuration()?;
        let target_dir = env::current_dir()?;

        GenerateCommand::new(config, target_dir)
            .with_verbosity(verbosity)
            .execute()
    }
}
