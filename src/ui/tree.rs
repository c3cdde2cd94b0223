use iced::widget::{column, container, mouse_area, row, text, Column};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::render::Node;
use crate::ui::theme;

/// Build widgets for a display tree
pub fn view(nodes: &[Node]) -> Element<'_, Message> {
    Column::with_children(nodes.iter().map(node_view))
        .spacing(12)
        .into()
}

fn node_view(node: &Node) -> Element<'_, Message> {
    match node {
        Node::Section { title, children } => {
            let body = Column::with_children(children.iter().map(node_view)).spacing(6);
            container(column![text(title).size(20).color(theme::ACCENT), body].spacing(10))
                .padding(16)
                .width(Fill)
                .style(theme::section)
                .into()
        }
        Node::Card { children } => {
            container(Column::with_children(children.iter().map(node_view)).spacing(2))
                .padding(Padding::from([8, 12]))
                .width(Fill)
                .style(theme::card)
                .into()
        }
        Node::Field { label, value } => row![
            text(format!("{label}: ")).size(14).color(theme::TEXT_SECONDARY),
            text(value).size(14).color(theme::TEXT_PRIMARY)
        ]
        .into(),
        Node::Activate { action, child } => mouse_area(node_view(child))
            .on_press(Message::Activate(action.clone()))
            .interaction(iced::mouse::Interaction::Pointer)
            .into(),
    }
}
