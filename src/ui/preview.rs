use iced::widget::image::Handle;
use iced::widget::{container, image, text};
use iced::{Element, Length};

use crate::Message;

/// The live preview pane.
///
/// Shows the most recent camera frame, or a placeholder until the first
/// frame arrives (or while the device stalls).
pub fn preview_pane(handle: Option<&Handle>) -> Element<'static, Message> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("Waiting for the first camera frame...").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    }
}
