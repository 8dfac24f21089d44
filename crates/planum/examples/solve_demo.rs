//! Gaussian Elimination Examples
//!
//! End-to-end walkthrough of the solver: unique solutions, inconsistent
//! systems, one- and two-parameter solution sets, and a 4-variable
//! hyperplane system.
//!
//! Run with: cargo run --example solve_demo

use planum::prelude::*;

fn plane(normal: &[f64], constant: f64) -> Hyperplane {
    Hyperplane::new(
        Vector::from_f64s(normal).expect("nonempty normal"),
        Decimal::from_f64(constant),
    )
}

fn report(label: &str, system: &LinearSystem) {
    println!("== {label} ==");
    print!("{system}");
    match system.compute_solution() {
        Ok(solution) => println!("{solution}\n"),
        Err(SolveError::NoSolution) => println!("No solutions\n"),
        Err(other) => println!("error: {other}\n"),
    }
}

fn main() {
    // Two parallel planes with different offsets: no solution.
    let shifted = LinearSystem::new(vec![
        plane(&[5.862, 1.178, -10.366], -8.15),
        plane(&[-2.931, -0.589, 5.183], -4.075),
    ])
    .expect("consistent dimensions");
    report("two parallel planes, shifted", &shifted);

    // Three planes meeting in a single point.
    let unique = LinearSystem::new(vec![
        plane(&[5.262, 2.739, -9.878], -3.441),
        plane(&[5.111, 6.358, 7.638], -2.152),
        plane(&[2.016, -9.924, -1.367], -9.278),
    ])
    .expect("consistent dimensions");
    report("three planes, unique intersection", &unique);

    // One plane in three variables: a two-parameter family.
    let sheet = LinearSystem::new(vec![plane(&[0.935, 1.76, -9.365], -9.955)])
        .expect("consistent dimensions");
    report("single plane, two free variables", &sheet);

    // A redundant stack of parallel planes: still one equation's worth
    // of information.
    let redundant = LinearSystem::new(vec![
        plane(&[0.187, 0.352, -1.873], -1.991),
        plane(&[0.374, 0.704, -3.746], -3.982),
        plane(&[-0.561, -1.056, 5.619], 5.973),
    ])
    .expect("consistent dimensions");
    report("redundant parallel planes", &redundant);

    // Four variables: hyperplanes proper.
    let hyper = LinearSystem::new(vec![
        plane(&[0.786, 0.786, 0.588, 1.0], -0.714),
        plane(&[-0.131, -0.131, 0.244, 2.5], 0.319),
    ])
    .expect("consistent dimensions");
    report("two hyperplanes in four variables", &hyper);
}
