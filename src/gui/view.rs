use iced::widget::{button, column, container, image, mouse_area, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::gui::app::App;
use crate::gui::{Message, widgets};
use crate::models::{MealAnalysis, Nutrient};
use crate::summary;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut left = column![self.upload_section()].spacing(16);
        if let Some(meal) = &self.meal {
            left = left.push(results_card(meal));
        }

        let right = column![
            self.summary_section(),
            self.goals_section(),
            self.controls_row(),
        ]
        .spacing(16);

        let content = row![
            left.width(Length::FillPortion(3)),
            right.width(Length::FillPortion(2)),
        ]
        .spacing(16);

        container(column![text("Meal Nutrition Tracker").size(26), content].spacing(16))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn upload_section(&self) -> Element<'_, Message> {
        let zone_content: Element<'_, Message> = match &self.photo {
            Some(photo) => column![
                image(photo.preview.clone())
                    .width(Length::Fill)
                    .height(240.0),
                text(photo.file_name()).size(12),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .into(),
            None => column![
                text("Drop a meal photo here").size(16),
                text("or click to browse").size(12),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .into(),
        };

        let zone = mouse_area(
            container(zone_content)
                .style(widgets::drop_zone_style(self.hovering_drop))
                .padding(24)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .on_press(Message::PickPhoto);

        let details = row![
            text_input("Food name (optional)", &self.food_name).on_input(Message::FoodNameChanged),
            text_input("Quantity (optional)", &self.food_quantity)
                .on_input(Message::FoodQuantityChanged),
        ]
        .spacing(8);

        let label = if self.submitting {
            "Analyzing..."
        } else {
            "Analyze Meal"
        };
        let analyze = button(text(label).size(14))
            .on_press_maybe((!self.submitting).then_some(Message::AnalyzePressed))
            .width(Length::Fill);

        let mut section = column![zone, details, analyze].spacing(12);
        if let Some(alert) = &self.alert {
            section = section.push(text(alert.as_str()).size(13).style(text::danger));
        }
        widgets::card("Analyze a meal", section)
    }

    fn summary_section(&self) -> Element<'_, Message> {
        let totals = self.totals.clone().unwrap_or_default();
        let mut body = column![text(summary::streak_label(totals.streak)).size(14)].spacing(10);
        for nutrient in Nutrient::ALL {
            body = body.push(widgets::progress_row(
                nutrient,
                totals.amount(nutrient),
                self.goals.target(nutrient),
            ));
        }
        widgets::card("Today", body)
    }

    fn goals_section(&self) -> Element<'_, Message> {
        let mut body = column![].spacing(8);
        for nutrient in Nutrient::ALL {
            let field = text_input("0", &self.goal_inputs[nutrient as usize])
                .on_input(move |value| Message::GoalInputChanged(nutrient, value))
                .on_submit(Message::GoalInputCommitted(nutrient));
            body = body.push(
                row![text(nutrient.label()).size(13).width(72), field]
                    .spacing(8)
                    .align_y(Alignment::Center),
            );
        }
        widgets::card("Daily goals", body)
    }

    fn controls_row(&self) -> Element<'_, Message> {
        let theme_label = if self.dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        };
        row![
            button(text("Reset day").size(13))
                .style(button::danger)
                .on_press(Message::ResetDayPressed),
            button(text(theme_label).size(13))
                .style(button::secondary)
                .on_press(Message::ToggleDarkMode),
        ]
        .spacing(8)
        .into()
    }
}

fn results_card(meal: &MealAnalysis) -> Element<'static, Message> {
    let mut body = column![].spacing(6);
    if let Some(name) = meal.name.as_deref().filter(|name| !name.is_empty()) {
        body = body.push(text(name.to_string()).size(14));
    }
    for nutrient in Nutrient::ALL {
        body = body.push(
            row![
                text(nutrient.label()).size(13).width(72),
                text(summary::meal_amount_label(nutrient, meal.amount(nutrient))).size(13),
            ]
            .spacing(8),
        );
    }
    widgets::card("Latest meal", body)
}
