use std::sync::Arc;

use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Fill, Padding, Task, Theme};

use crate::api::{ApiError, OrderApi};
use crate::controller::{Effect, RegionId, SearchController, Ticket};
use crate::model::{OrderDocument, OrderSummary};
use crate::render::{Action, RenderOptions};
use crate::ui::{recent_list, search_input, theme, tree};

/// ID of the page scrollable, used to jump back to the top
pub const PAGE_SCROLL_ID: &str = "order-viewer-page";

pub struct State {
    controller: SearchController,
    api: Arc<dyn OrderApi>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Trigger clicked or Enter pressed in the input
    Submit,
    /// A display-tree node was clicked
    Activate(Action),
    OrderLoaded {
        ticket: Ticket,
        result: Result<OrderDocument, ApiError>,
    },
    RecentLoaded(Result<Vec<OrderSummary>, ApiError>),
}

impl State {
    pub fn new(api: Arc<dyn OrderApi>, options: RenderOptions) -> (Self, Task<Message>) {
        let state = Self {
            controller: SearchController::new(options),
            api,
        };
        let effects = state.controller.load_recent();
        let boot_task = Task::batch([
            state.run(effects),
            iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
        ]);
        (state, boot_task)
    }

    pub fn title(&self) -> String {
        String::from("Order Viewer")
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.controller.input_changed(value);
                Task::none()
            }
            Message::Submit => {
                let effects = self.controller.submit();
                self.run(effects)
            }
            Message::Activate(action) => {
                let effects = self.controller.activate(&action);
                self.run(effects)
            }
            Message::OrderLoaded { ticket, result } => {
                self.controller.finish_lookup(ticket, result);
                Task::none()
            }
            Message::RecentLoaded(result) => {
                self.controller.finish_recent(result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let ctrl = &self.controller;
        let trigger_enabled = ctrl.region(RegionId::Trigger).is_enabled();

        let mut page = Column::new()
            .spacing(16)
            .padding(Padding::new(24.0))
            .push(search_input::view(ctrl.input(), trigger_enabled));

        if ctrl.region(RegionId::Loader).is_visible() {
            page = page.push(text("Loading...").size(16).color(theme::TEXT_SECONDARY));
        }

        let banner = ctrl.region(RegionId::ErrorBanner);
        if banner.is_visible() {
            page = page.push(
                container(text(banner.text().unwrap_or_default()).size(15))
                    .padding(Padding::from([10, 14]))
                    .width(Fill)
                    .style(theme::error_banner),
            );
        }

        let result = ctrl.region(RegionId::ResultArea);
        if result.is_visible() {
            page = page.push(tree::view(result.tree()));
        }

        let heading = ctrl.region(RegionId::RecentHeading);
        let recent = ctrl.region(RegionId::RecentList);
        if heading.is_visible() || recent.is_visible() {
            page = page.push(recent_list::view(
                heading.is_visible().then(|| heading.text().unwrap_or_default()),
                recent.is_visible().then(|| recent.tree()),
            ));
        }

        let content = scrollable(column![page].width(Fill))
            .id(PAGE_SCROLL_ID)
            .height(Fill);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ---- Effects ----

    /// Turn controller effects into iced tasks
    fn run(&self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| match effect {
                Effect::FetchOrder { ticket, id } => Task::perform(
                    self.api.fetch_order(&id),
                    move |result| Message::OrderLoaded { ticket, result },
                ),
                Effect::FetchRecent => {
                    Task::perform(self.api.fetch_recent(), Message::RecentLoaded)
                }
                Effect::ScrollToTop => iced::widget::operation::snap_to(
                    PAGE_SCROLL_ID,
                    scrollable::RelativeOffset::START,
                ),
            })
            .collect();

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::api::ApiFuture;
    use crate::controller::SearchState;
    use crate::model::{OrderId, Scalar};

    #[derive(Default)]
    struct CountingApi {
        orders: Mutex<Vec<String>>,
        recent: Mutex<usize>,
    }

    impl OrderApi for CountingApi {
        fn fetch_order(&self, id: &OrderId) -> ApiFuture<OrderDocument> {
            self.orders.lock().unwrap().push(id.to_string());
            Box::pin(async { Ok(OrderDocument::default()) })
        }

        fn fetch_recent(&self) -> ApiFuture<Vec<OrderSummary>> {
            *self.recent.lock().unwrap() += 1;
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn boot() -> (State, Arc<CountingApi>) {
        let api = Arc::new(CountingApi::default());
        let (state, _task) = State::new(api.clone(), RenderOptions::default());
        (state, api)
    }

    #[test]
    fn boot_requests_recent_orders_once() {
        let (_state, api) = boot();
        assert_eq!(*api.recent.lock().unwrap(), 1);
        assert!(api.orders.lock().unwrap().is_empty());
    }

    #[test]
    fn submit_issues_one_request() {
        let (mut state, api) = boot();
        let _ = state.update(Message::InputChanged(" ABC123 ".into()));
        let _ = state.update(Message::Submit);
        assert_eq!(*api.orders.lock().unwrap(), vec!["ABC123".to_string()]);
        assert_eq!(state.controller().state(), &SearchState::Loading);
    }

    #[test]
    fn submit_with_blank_input_issues_nothing() {
        let (mut state, api) = boot();
        let _ = state.update(Message::InputChanged("  ".into()));
        let _ = state.update(Message::Submit);
        assert!(api.orders.lock().unwrap().is_empty());
        assert_eq!(state.controller().state(), &SearchState::Idle);
    }

    #[test]
    fn recent_click_round_trip() {
        let (mut state, api) = boot();
        let _ = state.update(Message::RecentLoaded(Ok(vec![OrderSummary {
            order_uid: Some(Scalar::from("R1")),
            ..OrderSummary::default()
        }])));
        assert!(state.controller().region(RegionId::RecentList).is_visible());

        let id = OrderId::parse("R1").unwrap();
        let _ = state.update(Message::Activate(Action::SelectRecent(id)));
        assert_eq!(*api.orders.lock().unwrap(), vec!["R1".to_string()]);
        assert_eq!(state.controller().input(), "R1");
        assert!(!state.controller().region(RegionId::RecentList).is_visible());
    }
}
