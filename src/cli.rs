use crate::{
    corpus::{CORPUS_FILE_NAME, CORPUS_URL, DEFAULT_BASE_DIR, TargetFile},
    download::{Outcome, ensure_local_copy},
    logging,
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The directory to place the corpus in.
    #[clap(short = 'd', long = "dir", default_value = DEFAULT_BASE_DIR)]
    pub dir: PathBuf,

    /// The file name to save the corpus as.
    #[clap(short = 'n', long = "name", default_value = CORPUS_FILE_NAME)]
    pub name: String,

    /// The URL to download the corpus from.
    #[clap(short = 'u', long = "url", default_value = CORPUS_URL)]
    pub url: String,
}

impl Cli {
    pub fn exec() -> Result<()> {
        Self::parse().run()
    }

    pub fn target(&self) -> TargetFile {
        TargetFile::new(&self.dir, &self.name)
    }

    pub fn run(self) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(anyhow!(
                "Base directory is not a directory: {}",
                self.dir.display()
            ));
        }

        let target = self.target();

        match ensure_local_copy(target.path(), &self.url)? {
            Outcome::AlreadyPresent => println!("Found {}", target.path().display()),
            Outcome::Downloaded { bytes } => {
                println!("Saved {} ({bytes} bytes)", target.path().display())
            }
        }

        Ok(())
    }
}

pub fn run() -> Result<()> {
    logging::init();
    Cli::exec()
}
