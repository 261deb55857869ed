use iced::{Size, Theme};

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the state and run the console until the window closes.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = bootstrap::base_state(&config)?;

    iced::application(view::title, update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window_size(Size::new(860.0, 760.0))
        .run_with(move || bootstrap::runtime_boot(state))
        .map_err(|err| anyhow::anyhow!("console exited with an error: {err}"))
}

fn app_theme(_: &State) -> Theme {
    Theme::Dark
}
