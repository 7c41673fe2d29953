use std::io;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::Shell;

// cli.rs only pulls in clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
mod cli;

/// Shells whose completion scripts ship alongside the man pages.
const SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");
    println!("cargo::rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR is not set"))?,
    );
    let mut ndfc = cli::Cli::command();

    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;
    write_man_pages(&ndfc, &man_dir)?;

    let completion_dir = out_dir.join("completions");
    std::fs::create_dir_all(&completion_dir)?;
    for shell in SHELLS {
        clap_complete::generate_to(shell, &mut ndfc, "ndfc", &completion_dir)?;
    }
    Ok(())
}

/// One page per visible command, named `ndfc-credentials-default-get.1` and
/// so on.
fn write_man_pages(root: &Command, dir: &Path) -> io::Result<()> {
    let mut pending = vec![root.clone()];
    while let Some(cmd) = pending.pop() {
        let page_name = cmd.get_name().to_owned();
        let mut page = Vec::new();
        clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
        std::fs::write(dir.join(format!("{page_name}.1")), page)?;

        pending.extend(
            cmd.get_subcommands()
                .filter(|sub| !sub.is_hide_set())
                .map(|sub| sub.clone().name(format!("{page_name}-{}", sub.get_name()))),
        );
    }
    Ok(())
}
