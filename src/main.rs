use anyhow::Result;
use tiny_shakespeare::cli::run;

pub fn main() -> Result<()> {
    run()
}
