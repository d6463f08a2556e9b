use std::path::Path;

use iced::font::{Style as FontStyle, Weight};
use iced::widget::{center, column, container, image, row, space, stack, text};
use iced::{Background, Border, Color, ContentFit, Element, Font, Length};

use crate::ui::session::ViewName;
use crate::ui::surface::SurfaceModel;
use crate::ui::theme::{self, Rgba};

const CLOCK_SIZE: f32 = 180.0;
const TOP_BAR_SIZE: f32 = 18.0;
const DOTS_SIZE: f32 = 28.0;
const ERROR_SIZE: f32 = 16.0;
const FRAME_WIDTH: f32 = 420.0;
const EDGE_PADDING: u16 = 24;

pub fn color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.0, rgba.1, rgba.2, rgba.3)
}

/// Full-screen lock surface: background, dim overlay, then content.
pub fn surface<'a, Message: 'a>(
    model: &'a SurfaceModel,
    background: Option<&'a Path>,
) -> Element<'a, Message> {
    let backdrop: Element<'a, Message> = match background {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => solid(color(theme::FALLBACK_BG)),
    };

    let content = column![
        top_bar(model),
        match model.view() {
            ViewName::Idle => idle(model),
            ViewName::Typing => typing(model),
        }
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    stack![backdrop, solid(color(theme::DIM_OVERLAY)), content].into()
}

fn solid<'a, Message: 'a>(fill: Color) -> Element<'a, Message> {
    container(space::horizontal())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(fill)),
            ..Default::default()
        })
        .into()
}

fn top_bar<'a, Message: 'a>(model: &'a SurfaceModel) -> Element<'a, Message> {
    let italic = Font {
        style: FontStyle::Italic,
        ..Font::DEFAULT
    };

    row![
        text(model.ambient.clock.date.as_str())
            .size(TOP_BAR_SIZE)
            .color(color(theme::FG)),
        space::horizontal(),
        text(model.quote.as_str())
            .size(TOP_BAR_SIZE)
            .font(italic)
            .color(color(theme::ACCENT)),
        space::horizontal(),
        text(model.ambient.battery.as_str())
            .size(TOP_BAR_SIZE)
            .color(color(theme::GREEN)),
    ]
    .padding(EDGE_PADDING)
    .width(Length::Fill)
    .into()
}

fn clock_text<'a, Message: 'a>(value: &'a str) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };
    text(value)
        .size(CLOCK_SIZE)
        .font(bold)
        .color(color(theme::FG))
        .into()
}

fn error_banner<'a, Message: 'a>(error: Option<&'a str>) -> Element<'a, Message> {
    match error {
        Some(error) => text(format!("{} {}", theme::ERROR_ICON, error))
            .size(ERROR_SIZE)
            .color(color(theme::RED))
            .into(),
        None => space::vertical().height(ERROR_SIZE).into(),
    }
}

fn idle<'a, Message: 'a>(model: &'a SurfaceModel) -> Element<'a, Message> {
    center(
        column![
            clock_text(&model.ambient.clock.hour),
            clock_text(&model.ambient.clock.minute),
            error_banner(model.directive.error.as_deref()),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .into()
}

fn typing<'a, Message: 'a>(model: &'a SurfaceModel) -> Element<'a, Message> {
    let frame = container(
        text(model.directive.dots_text())
            .size(DOTS_SIZE)
            .color(color(theme::FG)),
    )
    .center_x(FRAME_WIDTH)
    .padding(16)
    .style(|_theme| container::Style {
        background: Some(Background::Color(color(theme::SURFACE))),
        border: Border {
            color: color(theme::FRAME_OUTLINE),
            width: 2.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    });

    center(
        column![
            clock_text(&model.ambient.clock.hour),
            frame,
            error_banner(model.directive.error.as_deref()),
            clock_text(&model.ambient.clock.minute),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center),
    )
    .into()
}
