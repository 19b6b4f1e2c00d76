use std::path::PathBuf;

use iced::widget::image::Handle;
use iced::{Event, Subscription, Task, Theme, event, window};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageLevel};
use tracing::{error, warn};

use crate::api::{MealPhoto, NutritionApi};
use crate::goals::GoalStore;
use crate::gui::Message;
use crate::models::{DailyTotals, GoalSet, MealAnalysis, Nutrient};
use crate::summary;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A photo accepted for analysis: raw bytes for the upload, a handle for
/// the preview widget.
#[derive(Debug, Clone)]
pub struct SelectedPhoto {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub preview: Handle,
}

impl SelectedPhoto {
    pub(crate) fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("photo")
            .to_string()
    }
}

pub struct App {
    api: NutritionApi,
    store: GoalStore,

    pub(crate) goals: GoalSet,
    /// Raw text of the four goal fields, indexed by `Nutrient as usize`.
    /// Committed to `goals` only on submit.
    pub(crate) goal_inputs: [String; 4],

    pub(crate) photo: Option<SelectedPhoto>,
    pub(crate) hovering_drop: bool,
    pub(crate) submitting: bool,

    pub(crate) food_name: String,
    pub(crate) food_quantity: String,

    pub(crate) meal: Option<MealAnalysis>,
    pub(crate) totals: Option<DailyTotals>,
    pub(crate) alert: Option<String>,

    pub(crate) dark_mode: bool,
}

impl App {
    pub fn new(api: NutritionApi, store: GoalStore) -> (Self, Task<Message>) {
        let goals = GoalSet::default();
        let app = App {
            api,
            store: store.clone(),
            goals,
            goal_inputs: goal_inputs_from(goals),
            photo: None,
            hovering_drop: false,
            submitting: false,
            food_name: String::new(),
            food_quantity: String::new(),
            meal: None,
            totals: None,
            alert: None,
            dark_mode: false,
        };
        // Goals first, then the initial stats fetch; the fetch is chained off
        // GoalsLoaded so the streak check sees the loaded targets.
        let load = Task::perform(async move { store.load().await }, Message::GoalsLoaded);
        (app, load)
    }

    pub fn window_title(&self) -> String {
        "platelog".to_string()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _id| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::PhotoDropped(path)),
            Event::Window(window::Event::FileHovered(_)) => Some(Message::PhotoHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::HoverLeft),
            _ => None,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoalsLoaded(goals) => {
                self.goals = goals;
                self.goal_inputs = goal_inputs_from(goals);
                self.fetch_stats()
            }

            Message::GoalInputChanged(nutrient, text) => {
                self.goal_inputs[nutrient as usize] = text;
                Task::none()
            }
            Message::GoalInputCommitted(nutrient) => {
                let value = summary::parse_goal_input(&self.goal_inputs[nutrient as usize]);
                self.goals.set_target(nutrient, value);

                let store = self.store.clone();
                let goals = self.goals;
                let save = Task::perform(
                    async move { store.save(goals).await.map_err(|err| err.to_string()) },
                    Message::GoalsSaved,
                );
                // Re-fetch so the bars rescale against the new target right away.
                Task::batch([save, self.fetch_stats()])
            }
            Message::GoalsSaved(Ok(())) => Task::none(),
            Message::GoalsSaved(Err(err)) => {
                error!("failed to persist goals: {err}");
                Task::none()
            }

            Message::StatsFetched(Ok(totals)) => self.apply_totals(totals),
            Message::StatsFetched(Err(err)) => {
                warn!("failed to fetch daily stats: {err}");
                Task::none()
            }
            Message::StreakAdvanced(Ok(streak)) => {
                if let Some(totals) = &mut self.totals {
                    totals.streak = streak;
                }
                Task::none()
            }
            Message::StreakAdvanced(Err(err)) => {
                warn!("failed to advance streak: {err}");
                Task::none()
            }

            Message::PickPhoto => {
                if self.submitting {
                    return Task::none();
                }
                Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Choose a meal photo")
                        .add_filter("Images", &IMAGE_EXTENSIONS)
                        .pick_file(),
                    |handle| Message::PhotoChosen(handle.map(|file| file.path().to_path_buf())),
                )
            }
            Message::PhotoChosen(Some(path)) => self.read_photo(path),
            Message::PhotoChosen(None) => Task::none(),
            Message::PhotoHovered => {
                self.hovering_drop = true;
                Task::none()
            }
            Message::HoverLeft => {
                self.hovering_drop = false;
                Task::none()
            }
            Message::PhotoDropped(path) => {
                self.hovering_drop = false;
                if self.submitting {
                    return Task::none();
                }
                self.read_photo(path)
            }
            Message::PhotoRead(Ok(photo)) => {
                self.photo = Some(photo);
                Task::none()
            }
            Message::PhotoRead(Err(err)) => {
                // Non-image drops are rejected without touching the rest of
                // the state.
                warn!("rejected photo: {err}");
                Task::none()
            }

            Message::FoodNameChanged(text) => {
                self.food_name = text;
                Task::none()
            }
            Message::FoodQuantityChanged(text) => {
                self.food_quantity = text;
                Task::none()
            }
            Message::AnalyzePressed => {
                if self.submitting {
                    return Task::none();
                }
                let Some(photo) = &self.photo else {
                    return Task::none();
                };
                self.submitting = true;

                let upload = MealPhoto {
                    file_name: photo.file_name(),
                    bytes: photo.bytes.clone(),
                    food_name: Some(self.food_name.clone()),
                    food_quantity: Some(self.food_quantity.clone()),
                };
                let api = self.api.clone();
                Task::perform(
                    async move { api.upload_meal_photo(upload).await },
                    Message::AnalysisFinished,
                )
            }
            Message::AnalysisFinished(result) => {
                // Whatever happened, the flow returns to ready: trigger
                // re-enabled, preview cleared, prompt back.
                self.submitting = false;
                self.photo = None;
                match result {
                    Ok(outcome) => {
                        self.meal = Some(outcome.meal);
                        match outcome.daily_total {
                            Some(totals) => self.apply_totals(totals),
                            None => Task::none(),
                        }
                    }
                    Err(err) => self.show_alert(format!("Error analyzing image: {err}")),
                }
            }
            Message::AlertDismissed => {
                self.alert = None;
                Task::none()
            }

            Message::ResetDayPressed => {
                let api = self.api.clone();
                Task::perform(async move { api.reset_day().await }, Message::DayReset)
            }
            Message::DayReset(Ok(())) => self.fetch_stats(),
            Message::DayReset(Err(err)) => self.show_alert(format!("Error resetting day: {err}")),
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    fn fetch_stats(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(async move { api.daily_stats().await }, Message::StatsFetched)
    }

    fn read_photo(&self, path: PathBuf) -> Task<Message> {
        Task::perform(read_photo(path), Message::PhotoRead)
    }

    /// Adopt fresh totals and, when every goal is met, ask the server to
    /// advance the streak. The check runs on every refresh; deduplicating
    /// repeat advances within a day is the server's job.
    fn apply_totals(&mut self, totals: DailyTotals) -> Task<Message> {
        let met = summary::all_goals_met(&totals, &self.goals);
        self.totals = Some(totals);
        if met {
            let api = self.api.clone();
            Task::perform(async move { api.advance_streak().await }, Message::StreakAdvanced)
        } else {
            Task::none()
        }
    }

    fn show_alert(&mut self, text: String) -> Task<Message> {
        self.alert = Some(text.clone());
        Task::perform(
            async move {
                AsyncMessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("platelog")
                    .set_description(text)
                    .show()
                    .await;
            },
            |_| Message::AlertDismissed,
        )
    }
}

fn goal_inputs_from(goals: GoalSet) -> [String; 4] {
    Nutrient::ALL.map(|nutrient| goals.target(nutrient).to_string())
}

/// Read a candidate file and make sure it actually holds an image before
/// accepting it for preview.
async fn read_photo(path: PathBuf) -> Result<SelectedPhoto, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    if image::guess_format(&bytes).is_err() {
        return Err(format!("{} is not an image", path.display()));
    }
    let preview = Handle::from_bytes(bytes.clone());
    Ok(SelectedPhoto {
        path,
        bytes,
        preview,
    })
}
