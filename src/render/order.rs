use super::{Node, RenderOptions};
use crate::model::{Delivery, Item, OrderDocument, Payment};

pub const GENERAL_TITLE: &str = "General information";
pub const DELIVERY_TITLE: &str = "Delivery";
pub const PAYMENT_TITLE: &str = "Payment";
pub const ITEMS_TITLE: &str = "Items";

/// Project an order into its four sections: general, delivery, payment, items.
/// Absent sub-records render as a section full of placeholders.
pub fn render_order(order: &OrderDocument, opts: &RenderOptions) -> Vec<Node> {
    let empty_delivery = Delivery::default();
    let empty_payment = Payment::default();
    let delivery = order.delivery.as_ref().unwrap_or(&empty_delivery);
    let payment = order.payment.as_ref().unwrap_or(&empty_payment);

    vec![
        general(order, opts),
        delivery_section(delivery, opts),
        payment_section(payment, opts),
        items_section(order.items(), opts),
    ]
}

fn general(order: &OrderDocument, opts: &RenderOptions) -> Node {
    Node::section(
        GENERAL_TITLE,
        vec![
            Node::field("Order UID", opts.value(order.order_uid.as_ref())),
            Node::field("Track number", opts.value(order.track_number.as_ref())),
            Node::field("Customer ID", opts.value(order.customer_id.as_ref())),
            Node::field("Created", opts.timestamp(order.date_created.as_ref())),
            Node::field("Delivery service", opts.value(order.delivery_service.as_ref())),
            Node::field("Entry", opts.value(order.entry.as_ref())),
        ],
    )
}

fn delivery_section(delivery: &Delivery, opts: &RenderOptions) -> Node {
    Node::section(
        DELIVERY_TITLE,
        vec![
            Node::field("Name", opts.value(delivery.name.as_ref())),
            Node::field("Phone", opts.value(delivery.phone.as_ref())),
            Node::field("Email", opts.value(delivery.email.as_ref())),
            Node::field("City", opts.value(delivery.city.as_ref())),
            Node::field("Zip", opts.value(delivery.zip.as_ref())),
            Node::field("Address", opts.value(delivery.address.as_ref())),
        ],
    )
}

fn payment_section(payment: &Payment, opts: &RenderOptions) -> Node {
    Node::section(
        PAYMENT_TITLE,
        vec![
            Node::field("Transaction", opts.value(payment.transaction.as_ref())),
            Node::field(
                "Amount",
                opts.amount(payment.amount.as_ref(), payment.currency.as_ref()),
            ),
            Node::field("Delivery cost", opts.value(payment.delivery_cost.as_ref())),
            Node::field("Goods total", opts.value(payment.goods_total.as_ref())),
            Node::field("Bank", opts.value(payment.bank.as_ref())),
            Node::field("Provider", opts.value(payment.provider.as_ref())),
        ],
    )
}

fn items_section(items: &[Item], opts: &RenderOptions) -> Node {
    let cards = items
        .iter()
        .map(|item| Node::Card {
            children: vec![
                Node::field("Name", opts.value(item.name.as_ref())),
                Node::field("Brand", opts.value(item.brand.as_ref())),
                Node::field("Article (nm_id)", opts.value(item.nm_id.as_ref())),
                Node::field("Price", opts.value(item.total_price.as_ref())),
                Node::field("Discount", opts.percent(item.sale.as_ref())),
            ],
        })
        .collect();
    Node::section(ITEMS_TITLE, cards)
}
