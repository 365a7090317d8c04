use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hl_cli")]
#[command(about = "Hoverlink CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Extract { source_path: String },
    Map {
        source_path: String,
        payload_path: String,
        #[arg(long)]
        groups: bool,
        #[arg(long)]
        pretty: bool,
    },
    Verify { mapping_path: String },
    Fixtures {
        #[command(subcommand)]
        cmd: FixturesCmd,
    },
}

#[derive(Subcommand)]
pub enum FixturesCmd {
    Generate { out_dir: String },
}
