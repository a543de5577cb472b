use iced::widget::{button, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::state::data::CapturedImage;
use crate::Message;

/// Scrollable id, shared with the snap-to-newest task in the update loop
pub const LIST_ID: &str = "captured-images";

/// Width of the browser column
const PANE_WIDTH: f32 = 340.0;

/// The captured-image browser.
///
/// Renders one selectable row per image. The selected row grows a pair of
/// Open/Delete actions bound to that entry; selecting another row replaces
/// them (the view is rebuilt declaratively, so the previous controls are
/// torn down for free).
pub fn browser_pane<'a>(
    images: &'a [CapturedImage],
    selected: Option<usize>,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(2);

    if images.is_empty() {
        list = list.push(text("No captured images yet.").size(14));
    }

    for (index, image) in images.iter().enumerate() {
        let is_selected = selected == Some(index);

        let label = row![
            text(&image.filename).size(13).width(Length::Fill),
            text(image.modified_label()).size(11),
        ]
        .spacing(8);

        let style = if is_selected {
            button::primary
        } else {
            button::text
        };

        list = list.push(
            button(label)
                .on_press(Message::Select(index))
                .style(style)
                .width(Length::Fill)
                .padding(6),
        );

        if is_selected {
            list = list.push(
                row![
                    button(text("Open").size(13))
                        .on_press(Message::OpenImage(index))
                        .style(button::secondary)
                        .padding(6),
                    button(text("Delete").size(13))
                        .on_press(Message::DeleteImage(index))
                        .style(button::danger)
                        .padding(6),
                ]
                .spacing(8)
                .padding(4),
            );
        }
    }

    scrollable(list)
        .id(scrollable::Id::new(LIST_ID))
        .width(Length::Fixed(PANE_WIDTH))
        .height(Length::Fill)
        .into()
}
