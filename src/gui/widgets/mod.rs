use iced::widget::{column, container, progress_bar, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme, border};

use crate::gui::Message;
use crate::models::Nutrient;
use crate::summary;

/// Accent for the upload zone border while a file hovers over the window.
const HOVER_ACCENT: Color = Color::from_rgb8(59, 130, 246);

pub fn nutrient_color(nutrient: Nutrient) -> Color {
    match nutrient {
        Nutrient::Calories => Color::from_rgb8(59, 130, 246),
        Nutrient::Proteins => Color::from_rgb8(239, 68, 68),
        Nutrient::Carbs => Color::from_rgb8(245, 158, 11),
        Nutrient::Fats => Color::from_rgb8(139, 92, 246),
    }
}

/// Border treatment for the upload zone; lights up while a drag hovers.
pub fn drop_zone_style(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let style = container::bordered_box(theme);
        if hovering {
            style.border(border::width(3).rounded(12).color(HOVER_ACCENT))
        } else {
            let palette = theme.extended_palette();
            style.border(
                border::width(1)
                    .rounded(12)
                    .color(palette.background.strong.color),
            )
        }
    }
}

/// Card wrapper shared by the summary, goals, and results sections.
pub fn card<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body = column![text(title).size(18), content.into()].spacing(12);
    container(body)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::bordered_box(theme).border(
                border::width(1)
                    .rounded(10)
                    .color(palette.background.strong.color),
            )
        })
        .padding(16)
        .width(Length::Fill)
        .into()
}

/// One labeled row of the daily summary.
pub fn progress_row(nutrient: Nutrient, current: f64, goal: u32) -> Element<'static, Message> {
    let percent = summary::progress_percent(current, goal) as f32;
    row![
        text(nutrient.label()).size(13).width(72),
        themed_bar(percent, nutrient_color(nutrient)),
        text(summary::progress_label(nutrient, current, goal))
            .size(13)
            .width(90),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn themed_bar(value: f32, color: Color) -> Element<'static, Message> {
    progress_bar(0.0..=100.0, value)
        .length(Length::Fill)
        .style(move |theme: &Theme| progress_bar::Style {
            background: Background::Color(theme.extended_palette().background.weak.color),
            bar: Background::Color(color),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 5.0.into(),
            },
        })
        .into()
}
