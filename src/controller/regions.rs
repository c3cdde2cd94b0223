use crate::render::Node;

/// Heading text of the recent-orders section
pub const RECENT_HEADING: &str = "Recent orders";

/// The named parts of the page the controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    SearchInput,
    Trigger,
    Loader,
    ErrorBanner,
    ResultArea,
    RecentList,
    RecentHeading,
}

impl RegionId {
    pub const ALL: [RegionId; 7] = [
        RegionId::SearchInput,
        RegionId::Trigger,
        RegionId::Loader,
        RegionId::ErrorBanner,
        RegionId::ResultArea,
        RegionId::RecentList,
        RegionId::RecentHeading,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Tree(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    visible: bool,
    enabled: bool,
    content: Content,
}

impl Region {
    fn new(visible: bool, enabled: bool, content: Content) -> Self {
        Self {
            visible,
            enabled,
            content,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Tree content, or an empty slice for any other content
    pub fn tree(&self) -> &[Node] {
        match &self.content {
            Content::Tree(nodes) => nodes,
            _ => &[],
        }
    }
}

/// Handles to every named region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    search_input: Region,
    trigger: Region,
    loader: Region,
    error_banner: Region,
    result_area: Region,
    recent_list: Region,
    recent_heading: Region,
}

impl Default for Regions {
    /// The page as first shown: empty input, disabled trigger, everything else hidden
    fn default() -> Self {
        Self {
            search_input: Region::new(true, true, Content::Text(String::new())),
            trigger: Region::new(true, false, Content::Empty),
            loader: Region::new(false, true, Content::Empty),
            error_banner: Region::new(false, true, Content::Empty),
            result_area: Region::new(false, true, Content::Empty),
            recent_list: Region::new(false, true, Content::Empty),
            recent_heading: Region::new(false, true, Content::Text(RECENT_HEADING.to_string())),
        }
    }
}

impl Regions {
    pub fn get(&self, id: RegionId) -> &Region {
        match id {
            RegionId::SearchInput => &self.search_input,
            RegionId::Trigger => &self.trigger,
            RegionId::Loader => &self.loader,
            RegionId::ErrorBanner => &self.error_banner,
            RegionId::ResultArea => &self.result_area,
            RegionId::RecentList => &self.recent_list,
            RegionId::RecentHeading => &self.recent_heading,
        }
    }

    pub fn get_mut(&mut self, id: RegionId) -> &mut Region {
        match id {
            RegionId::SearchInput => &mut self.search_input,
            RegionId::Trigger => &mut self.trigger,
            RegionId::Loader => &mut self.loader,
            RegionId::ErrorBanner => &mut self.error_banner,
            RegionId::ResultArea => &mut self.result_area,
            RegionId::RecentList => &mut self.recent_list,
            RegionId::RecentHeading => &mut self.recent_heading,
        }
    }
}
