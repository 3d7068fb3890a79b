//! Runs both search strategies across the sample level and prints the
//! results.
//!
//! Usage: `corridor [algorithm]`, where `algorithm` is `breadth-first` or
//! `bidirectional` (both when omitted). Set `RUST_LOG=boxnav_paths=debug` to
//! see the search traces.

use boxnav_core::Point;
use boxnav_demos::{render, sample_mesh};
use boxnav_paths::{Algorithm, PathConfig, Pathfinder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let algorithms = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Algorithm>()?],
        None => vec![Algorithm::BreadthFirst, Algorithm::Bidirectional],
    };

    let mesh = sample_mesh()?;
    let source = Point::new(2.5, 1.5);
    let destination = Point::new(20.5, 14.5);

    for algorithm in algorithms {
        let finder = Pathfinder::new(PathConfig {
            anchor_endpoints: true,
            ..PathConfig::with_algorithm(algorithm)
        });
        let res = finder.find_path(source, destination, &mesh);
        log::info!("{algorithm}: {:?}", res.status);

        println!("== {algorithm}");
        println!("{}", render(&mesh, &res.explored, &res.path));
        println!(
            "explored {} of {} boxes, length {:.2}",
            res.explored.len(),
            mesh.len(),
            res.length()
        );
        let path = res.into_path()?;
        let points: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("path: {}\n", points.join(" -> "));
    }
    Ok(())
}
