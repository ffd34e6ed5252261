pub use greedy_hss::{greedy_hss, GreedyHSS};
pub use selection::{SubsetSelection, SubsetSelectionExport};

mod contribution;
mod greedy_hss;
mod hss_2d;
mod hss_3d;
mod selection;
