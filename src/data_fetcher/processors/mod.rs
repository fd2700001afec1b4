pub mod classifier;
pub mod extraction;

pub use classifier::{classify, classify_all, split_by_state};
pub use extraction::{
    division_order, extract_schedule, extract_standings, filter_by_teams, parse_start_time,
};
