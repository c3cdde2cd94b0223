use iced::widget::{column, text};
use iced::Element;

use crate::app::Message;
use crate::render::Node;
use crate::ui::{theme, tree};

/// Build the recent-orders block. Heading and list are separate regions,
/// so either may be absent.
pub fn view<'a>(heading: Option<&'a str>, entries: Option<&'a [Node]>) -> Element<'a, Message> {
    let mut block = column![].spacing(8);
    if let Some(heading) = heading {
        block = block.push(text(heading).size(18).color(theme::TEXT_SECONDARY));
    }
    if let Some(entries) = entries {
        block = block.push(tree::view(entries));
    }
    block.into()
}
