use clap::{ArgAction, Parser, Subcommand, ValueHint};
use ts_cli::commands::create;
use ts_cli::{error, logging, output};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "Scaffold a TypeScript project with optional lint, format and commit tooling")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create new project from => ts-cli create yourProjectName
    Create {
        /// Name of the project directory to create
        #[arg(value_name = "app-name", value_hint = ValueHint::DirPath)]
        name: String,
    },
}

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { name } => {
            log::debug!("create {}", name);
            create::create_project(&name)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::error(&format!("{:#}", e)));
        std::process::exit(error::exit_code_for(&e));
    }
}
