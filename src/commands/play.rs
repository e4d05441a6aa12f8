//! Interactive landing page.

use anyhow::Result;

use runnerdeck::animator::{orchestrator_script, Animator, SystemClock};
use runnerdeck::cli::PlayArgs;
use runnerdeck::tui::{app, LandingState, Theme};

use super::effective_config;

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs) -> Result<()> {
    let config = effective_config(&args.animation)?;
    let theme = Theme::from_name(args.theme.unwrap_or(config.ui.theme));

    tracing::info!(
        speed = config.animation.speed_multiplier,
        auto_replay = config.animation.auto_replay,
        theme = theme.name.as_str(),
        "starting landing page"
    );

    let animator = Animator::new(orchestrator_script(), config.animation, SystemClock::new());
    app::run(LandingState::new(animator, theme))
}
