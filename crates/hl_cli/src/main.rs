use clap::Parser;
use hl_cli::cli::{Cli, Command, FixturesCmd};
use hl_cli::commands;

fn main() {
    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Extract { source_path } => commands::extract::run_extract(&source_path),
        Command::Map {
            source_path,
            payload_path,
            groups,
            pretty,
        } => commands::map::run_map(&source_path, &payload_path, groups, pretty),
        Command::Verify { mapping_path } => {
            commands::verify::run_verify(&mapping_path).map(|(code, report)| {
                println!(
                    "{}",
                    serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
                );
                if code != 0 {
                    std::process::exit(code as i32);
                }
            })
        }
        Command::Fixtures { cmd } => match cmd {
            FixturesCmd::Generate { out_dir } => {
                commands::fixtures::generate_fixtures(&out_dir).map(|path| {
                    println!("generated fixtures at {}", path.display());
                })
            }
        },
    };

    if let Err(err) = result {
        eprintln!("{}: {}", err.code, err.message);
        std::process::exit(1);
    }
}
