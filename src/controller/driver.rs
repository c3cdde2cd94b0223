use super::{Effect, SearchController};
use crate::api::OrderApi;

/// Run effects against an API until the controller has nothing left to ask for.
/// Used by headless front-ends; the GUI turns effects into iced tasks instead.
pub async fn drive<A>(controller: &mut SearchController, api: &A, effects: Vec<Effect>)
where
    A: OrderApi + ?Sized,
{
    for effect in effects {
        match effect {
            Effect::FetchOrder { ticket, id } => {
                let result = api.fetch_order(&id).await;
                controller.finish_lookup(ticket, result);
            }
            Effect::FetchRecent => {
                let result = api.fetch_recent().await;
                controller.finish_recent(result);
            }
            Effect::ScrollToTop => {}
        }
    }
}
