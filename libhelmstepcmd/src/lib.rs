use crate::command_dep_update::CommandDepUpdate;
use crate::command_json_schema::CommandJsonSchema;
use crate::utils::CommandRunner;
use clap::{Parser, Subcommand};
use libhelmstep::Result;

mod command_dep_update;
mod command_json_schema;
pub mod utils;

#[derive(Parser)]
#[command(about = "Helm dependency update as a CI pipeline step", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
    #[clap(flatten)]
    global_options: GlobalConfigArgs,
}

#[derive(Debug, Default, Clone, clap::Args)]
struct GlobalConfigArgs {
    /// Show verbose logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fetches the dependencies of a chart (aka `helm dependency update`)
    DepUpdate {
        /// Chart whose dependencies are updated
        #[arg(long, env = "PLUGIN_CHART")]
        chart: Option<String>,
        /// Kubernetes namespace passed to helm
        #[arg(long, env = "PLUGIN_NAMESPACE")]
        namespace: Option<String>,
        /// Print the generated helm command and pass --debug to helm
        #[arg(long, env = "PLUGIN_DEBUG")]
        debug: bool,
        /// Path to a settings file in YAML format
        #[arg(short, long)]
        file: Option<String>,
        /// Change to DIRECTORY before doing anything
        #[arg(short = 'C', long)]
        directory: Option<String>,
        /// Prepare the helm command but do not run it
        #[arg(long)]
        dry_run: bool,
    },
    /// Prints the JSON schema of the settings file
    JsonSchema {
        /// Write the schema to OUTPUT instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn main_with_args(args: Vec<&str>, logging: bool) -> Result<()> {
        let args = Cli::parse_from(args);

        if logging {
            utils::init_logging(args.global_options.verbose);
        }

        match args.command {
            Command::DepUpdate {
                chart,
                namespace,
                debug,
                file,
                directory,
                dry_run,
            } => utils::with_directory(directory, || {
                let cmd = CommandDepUpdate {
                    file: file.clone(),
                    chart: chart.clone(),
                    namespace: namespace.clone(),
                    debug,
                    dry_run,
                };
                cmd.run()
            }),
            Command::JsonSchema { output } => CommandJsonSchema { output }.run(),
        }
    }
}
