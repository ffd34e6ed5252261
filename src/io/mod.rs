pub use output::{format_g, OutputFormat};
pub use reader::{parse_reference_point, PointSets};
pub use runner::{select_from_files, FileSelection, RunSelection, SelectionOptions};

mod output;
mod reader;
mod runner;
