//! Print the console report for the built-in six-constraint region.
//!
//! Usage:
//!   cargo run -p vertenum --example reference_region
//!   cargo run -p vertenum --example reference_region -- dedup

use vertenum::prelude::*;

fn main() {
    let dedup = std::env::args().nth(1).as_deref() == Some("dedup");
    let cfg = EnumCfg {
        dedup: if dedup {
            DedupPolicy::Euclidean(1e-9)
        } else {
            DedupPolicy::KeepAll
        },
        ..Default::default()
    };
    let region = reference_region();
    let objective = reference_objective();
    match enumerate_vertices(&region, &objective, &cfg) {
        Ok(run) => {
            print!("{}", TextReport::new(&run, &region));
            if let Some(v) = run.best_vertex(Goal::Minimize) {
                println!("\nmin f = {} at {:?}", v.display_value, v.display.as_slice());
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }
}
