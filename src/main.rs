use clap::Parser;

use sealstore::cli::{self, Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.store_dir.as_deref());

    let service = args.service.as_deref();
    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(args.verbose),
        Commands::Set { key, value } => {
            cli::commands::set::execute(key, value.as_deref(), service, args.verbose)
        }
        Commands::Get { key } => cli::commands::get::execute(key, service),
        Commands::Remove { key } => cli::commands::remove::execute(key, service),
        Commands::List => cli::commands::list::execute(service),
        Commands::Status => cli::commands::status::execute(service),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
