use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::LevelFilter;

use greedy_hss::algorithms::GreedyHSS;
use greedy_hss::io::{select_from_files, OutputFormat, PointSets, SelectionOptions};
use greedy_hss::metrics::hyper_volume;

/// Greedily select the points that contribute the most to the hyper-volume from the sets of
/// points stored in the `demos/data` folder. All the objectives are minimised.
///
/// The selection from the file with two objectives is printed using the same reference point
/// for all the runs. The 10 points selected from the three-objective front are then exported to
/// a JSON file in `demos/results`.
///
/// `cargo run --example select_subset --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let data_path = PathBuf::from(&env::current_dir()?)
        .join("demos")
        .join("data");

    // Select 5 points from each run and print the contribution of each point
    let options = SelectionOptions {
        reference_point: Some(vec![1.2, 1.2]),
        subset_size: Some(5),
        format: OutputFormat::Contributions,
        ..SelectionOptions::default()
    };
    let selections = select_from_files(&[data_path.join("front_2d.txt")], &options)?;
    for selection in selections {
        println!("{}:\n{}", selection.file.display(), selection.output);
    }

    // Select from the 3D front
    let sets = PointSets::from_file(&data_path.join("front_3d.txt"))?;
    let points = &sets.runs()[0];
    let reference_point = vec![1.5; 3];
    let hss = GreedyHSS::new(points, &reference_point)?;
    let selection = hss.select(10)?;

    // The greedy subset hyper-volume is a lower bound of the optimal one
    let total = hyper_volume(points, &reference_point)?;
    println!(
        "Subset hyper-volume {:.6} ({:.2}% of {:.6})",
        selection.hyper_volume,
        selection.hyper_volume / total * 100.0,
        total
    );

    // Export the selection
    let out_path = PathBuf::from(&env::current_dir()?)
        .join("demos")
        .join("results")
        .join("front_3d_selection.json");
    selection.save_to_json(&reference_point, &out_path)?;

    Ok(())
}
