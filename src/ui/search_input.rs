use iced::widget::{button, row, text, text_input};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "order-uid-input";

/// Build the UID input and its trigger. Enter submits even while the
/// trigger is disabled; blank input is ignored by the controller.
pub fn view(query: &str, trigger_enabled: bool) -> Element<'_, Message> {
    let input = text_input("Order UID", query)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let trigger = button(text("Search").size(16))
        .padding([12, 20])
        .on_press_maybe(trigger_enabled.then_some(Message::Submit))
        .style(theme::trigger);

    row![input, trigger].spacing(8).into()
}
