use super::{Action, Node, RenderOptions};
use crate::model::{OrderId, OrderSummary};

/// One card per summary, in the order received. Cards with a usable UID
/// are wrapped in an [`Action::SelectRecent`].
pub fn render_recent(summaries: &[OrderSummary], opts: &RenderOptions) -> Vec<Node> {
    summaries
        .iter()
        .map(|summary| {
            let uid = opts.value(summary.order_uid.as_ref());
            let card = Node::Card {
                children: vec![
                    Node::field("UID", uid),
                    Node::field("Customer", opts.value(summary.customer_id.as_ref())),
                    Node::field("Date", opts.timestamp(summary.date_created.as_ref())),
                ],
            };

            let id = summary
                .order_uid
                .as_ref()
                .and_then(|uid| OrderId::parse(&uid.to_string()).ok());
            match id {
                Some(id) => Node::Activate {
                    action: Action::SelectRecent(id),
                    child: Box::new(card),
                },
                None => {
                    tracing::debug!("Recent entry without a UID, rendering it inert");
                    card
                }
            }
        })
        .collect()
}
