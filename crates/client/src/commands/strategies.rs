use anyhow::Result;
use arena_runtime::Strategy;
use clap::Parser;
use strum::IntoEnumIterator;

/// List the available strategy names
#[derive(Parser, Debug)]
pub struct Strategies;

impl Strategies {
    pub fn execute(self) -> Result<()> {
        for strategy in Strategy::iter() {
            let marker = if strategy == Strategy::default() { " (default)" } else { "" };
            println!("{strategy}{marker}");
        }
        Ok(())
    }
}
