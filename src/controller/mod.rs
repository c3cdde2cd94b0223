//! The search/render state machine.
//!
//! [`SearchController`] owns the lookup lifecycle and every region's
//! visibility. It never performs I/O: operations return [`Effect`]s, the
//! caller runs them (an iced `Task`, or [`driver::drive`]) and reports back
//! through [`SearchController::finish_lookup`] and
//! [`SearchController::finish_recent`].

pub mod driver;
pub mod regions;

use crate::api::ApiError;
use crate::model::{OrderDocument, OrderId, OrderSummary};
use crate::render::{self, Action, RenderOptions};

pub use regions::{Content, Region, RegionId, Regions};

/// Identifies one lookup. Only the most recently issued ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Work the controller asks its caller to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /api/order/{id}`, answered with `finish_lookup(ticket, ..)`
    FetchOrder { ticket: Ticket, id: OrderId },
    /// `GET /api/orders/recent`, answered with `finish_recent(..)`
    FetchRecent,
    /// Scroll the page back to the search field
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Success(Box<OrderDocument>),
    Error(String),
}

pub struct SearchController {
    regions: Regions,
    state: SearchState,
    /// Current text of the search field (untrimmed, as typed)
    input: String,
    last_ticket: u64,
    options: RenderOptions,
}

impl SearchController {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            regions: Regions::default(),
            state: SearchState::Idle,
            input: String::new(),
            last_ticket: 0,
            options,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> &Region {
        self.regions.get(id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    // ---- Activation ----

    /// Called once when the page comes up
    pub fn load_recent(&self) -> Vec<Effect> {
        vec![Effect::FetchRecent]
    }

    /// Recent orders are best-effort: failures are logged and the section stays hidden
    pub fn finish_recent(&mut self, result: Result<Vec<OrderSummary>, ApiError>) {
        let summaries = match result {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!("Failed to load recent orders: {}", e);
                return;
            }
        };
        if summaries.is_empty() {
            tracing::debug!("No recent orders");
            return;
        }

        tracing::debug!("Showing {} recent orders", summaries.len());
        let tree = render::render_recent(&summaries, &self.options);
        let list = self.regions.get_mut(RegionId::RecentList);
        list.set_content(Content::Tree(tree));
        list.show();
        self.regions.get_mut(RegionId::RecentHeading).show();
    }

    // ---- Input observers ----

    /// Every edit of the search field
    pub fn input_changed(&mut self, value: String) {
        self.regions
            .get_mut(RegionId::SearchInput)
            .set_content(Content::Text(value.clone()));
        self.input = value;
        self.refresh_trigger();
    }

    /// Trigger click or Enter in the search field
    pub fn submit(&mut self) -> Vec<Effect> {
        let query = self.input.clone();
        self.search(&query)
    }

    /// A clicked display-tree node
    pub fn activate(&mut self, action: &Action) -> Vec<Effect> {
        match action {
            Action::SelectRecent(id) => self.select_recent(id),
        }
    }

    /// A recent entry was clicked: copy its UID into the field, look it up, scroll up
    pub fn select_recent(&mut self, id: &OrderId) -> Vec<Effect> {
        self.input_changed(id.as_str().to_string());
        let mut effects = self.search(id.as_str());
        effects.push(Effect::ScrollToTop);
        effects
    }

    // ---- Lookup lifecycle ----

    /// Start a lookup. Blank input is ignored: no effects, no transition.
    pub fn search(&mut self, raw: &str) -> Vec<Effect> {
        let id = match OrderId::parse(raw) {
            Ok(id) => id,
            Err(_) => return Vec::new(),
        };

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        tracing::info!("Looking up order {}", id);
        tracing::debug!("{:?} -> Loading ({:?})", self.state, ticket);
        self.state = SearchState::Loading;

        self.regions.get_mut(RegionId::Loader).show();
        self.regions.get_mut(RegionId::Trigger).set_enabled(false);

        let banner = self.regions.get_mut(RegionId::ErrorBanner);
        banner.set_content(Content::Empty);
        banner.hide();

        let result = self.regions.get_mut(RegionId::ResultArea);
        result.set_content(Content::Empty);
        result.hide();

        self.regions.get_mut(RegionId::RecentList).hide();
        self.regions.get_mut(RegionId::RecentHeading).hide();

        vec![Effect::FetchOrder { ticket, id }]
    }

    /// Resume point of a lookup. Results for anything but the latest
    /// in-flight ticket are dropped.
    pub fn finish_lookup(&mut self, ticket: Ticket, result: Result<OrderDocument, ApiError>) {
        if ticket.0 != self.last_ticket || self.state != SearchState::Loading {
            tracing::debug!(
                "Dropping stale lookup result {:?} (latest is {})",
                ticket,
                self.last_ticket
            );
            return;
        }

        match result {
            Ok(order) => {
                tracing::debug!("Loading -> Success");
                let tree = render::render_order(&order, &self.options);
                let area = self.regions.get_mut(RegionId::ResultArea);
                area.set_content(Content::Tree(tree));
                area.show();
                self.state = SearchState::Success(Box::new(order));
            }
            Err(e) => {
                tracing::debug!("Loading -> Error: {}", e);
                let message = failure_message(&e);
                let banner = self.regions.get_mut(RegionId::ErrorBanner);
                banner.set_content(Content::Text(message.clone()));
                banner.show();
                self.state = SearchState::Error(message);
            }
        }

        self.regions.get_mut(RegionId::Loader).hide();
        self.refresh_trigger();
    }

    fn refresh_trigger(&mut self) {
        let enabled = !self.input.trim().is_empty();
        self.regions
            .get_mut(RegionId::Trigger)
            .set_enabled(enabled);
    }
}

/// Banner text for a failed lookup
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { status, body } if body.is_empty() => {
            format!("Order not found (status: {status}).")
        }
        ApiError::Status { status, body } => {
            format!("Order not found (status: {status}). {body}")
        }
        ApiError::Transport(description) => format!("Request failed: {description}"),
        ApiError::Decode(description) => format!("Malformed response: {description}"),
        ApiError::InvalidBaseUrl { .. } => error.to_string(),
    }
}
