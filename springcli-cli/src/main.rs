use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use springcli_cli::commands::prompt::{DialoguerPrompter, Prompter, ScriptedPrompter};
use springcli_cli::commands::{generate, jwt, welcome};
use springcli_cli::logging;

#[derive(Parser)]
#[command(
    name = "springcli",
    version,
    about = "springcli: scaffold Spring Boot controllers, services, repositories and entities"
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files from templates
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },
}

#[derive(Subcommand)]
enum GenerateKind {
    /// Generate a REST controller
    Controller {
        /// Controller name (e.g. User or UserController)
        name: String,
    },
    /// Generate a service interface
    Service {
        /// Service name (e.g. User or UserService)
        name: String,
    },
    /// Generate a JPA repository interface
    Repository {
        /// Repository name (e.g. User or UserRepository)
        name: String,
    },
    /// Generate a JPA entity, or add fields to an existing one
    Entity {
        /// Entity class name (e.g. User)
        name: String,
        /// Fields as name:type and relations as name:kind:target.
        /// Prompts interactively when omitted.
        fields: Vec<String>,
    },
    /// Generate an RSA key pair for JWT signing in jwt/
    Jwt {
        /// Overwrite existing keys without asking
        #[arg(long)]
        force: bool,
    },
}

fn prompter() -> Box<dyn Prompter> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        Box::new(DialoguerPrompter)
    } else {
        Box::new(ScriptedPrompter::from_reader(stdin.lock()))
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let result = match cli.command {
        None => welcome::run(),
        Some(Commands::Generate { kind }) => match kind {
            GenerateKind::Controller { name } => generate::controller(&name),
            GenerateKind::Service { name } => generate::service(&name),
            GenerateKind::Repository { name } => generate::repository(&name),
            GenerateKind::Entity { name, fields } => {
                generate::entity(&name, &fields, prompter().as_mut())
            }
            GenerateKind::Jwt { force } => jwt::run(force, prompter().as_mut()),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
