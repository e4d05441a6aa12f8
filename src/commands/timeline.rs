//! Timeline printing.

use anyhow::Result;

use runnerdeck::animator::{orchestrator_script, Timeline};
use runnerdeck::cli::AnimationArgs;

use super::effective_config;

pub fn handle(args: &AnimationArgs) -> Result<()> {
    let config = effective_config(args)?;
    let timeline = Timeline::project(&orchestrator_script(), &config.animation);
    print!("{}", timeline.to_table());
    Ok(())
}
