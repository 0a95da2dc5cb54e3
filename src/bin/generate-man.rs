// Writes the stagehand man page to the given directory (default: ./man)

use clap::CommandFactory;
use clap_mangen::Man;
use stagehand::cli::Cli;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("man"));
    std::fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();
    let mut buffer: Vec<u8> = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    std::fs::write(out_dir.join("stagehand.1"), buffer)?;

    for sub in cmd.get_subcommands() {
        let name = format!("stagehand-{}", sub.get_name());
        let mut buffer: Vec<u8> = Vec::new();
        Man::new(sub.clone()).title(name.clone()).render(&mut buffer)?;
        std::fs::write(out_dir.join(format!("{}.1", name)), buffer)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}
