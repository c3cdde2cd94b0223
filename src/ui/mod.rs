pub mod recent_list;
pub mod search_input;
pub mod theme;
pub mod tree;
