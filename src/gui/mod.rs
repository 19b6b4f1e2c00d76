mod app;
mod message;
mod view;
mod widgets;

pub use app::App;
pub use message::Message;

use crate::api::NutritionApi;
use crate::goals::GoalStore;

/// Open the tracker window and run it until the user closes it.
pub fn run(api: NutritionApi, store: GoalStore) -> anyhow::Result<()> {
    iced::application(
        move || App::new(api.clone(), store.clone()),
        App::update,
        App::view,
    )
    .title(App::window_title)
    .subscription(App::subscription)
    .theme(App::theme)
    .window_size((1100.0, 720.0))
    .run()?;
    Ok(())
}
