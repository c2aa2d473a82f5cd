//! Preparing ragged operands for matrix and set operations.
//!
//! This example walks through the typical sequence a caller follows:
//! - Inspecting the outer size and element type of nested input
//! - Lifting a vector to matrix rank with unsqueeze
//! - Flattening and filtering rank-1 data
//! - Tagging duplicates for a multiset difference
//!
//! Run with:
//! ```bash
//! cargo run --example ragged_operands
//! ```

use anyhow::Result;
use regex::Regex;
use tenrso_ragged::{
    array_size, filter_regexp, flatten, generalize, get_array_data_type, identify, join, nested,
    unsqueeze, Identified, Nested, Scalar,
};

fn main() -> Result<()> {
    println!("=== TenRSo Ragged: Operand Preparation ===\n");

    example_inspection();
    example_rank_alignment();
    example_filtering()?;
    example_multiset_difference()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_inspection() {
    println!("--- Example 1: Inspection ---");

    let ragged: Nested<Scalar> = nested!([
        [(Scalar::from(1)), (Scalar::from(2)), (Scalar::from(3))],
        [(Scalar::from(4))],
        [(Scalar::from("five"))]
    ]);
    println!("Outer size: {:?}", array_size(&ragged).as_slice());
    println!("Element type: {}", get_array_data_type(&ragged, Scalar::kind));
    println!("Leaves: {}", join(flatten(&ragged).as_seq().unwrap_or(&[]), " "));
    println!();
}

fn example_rank_alignment() {
    println!("--- Example 2: Rank Alignment ---");

    let vector = nested!([1.5, 2.5, 3.5]);
    let column = unsqueeze(vector, 2, 0);
    println!("Column vector: {:?}", column);
    println!("Outer size after unsqueeze: {:?}", array_size(&column).as_slice());
    println!();
}

fn example_filtering() -> Result<()> {
    println!("--- Example 3: Filtering ---");

    let names = nested!(["alpha", "beta", "gamma", "alphabet"]);
    let pattern = Regex::new("^alpha")?;
    let kept = filter_regexp(&names, &pattern)?;
    println!("Names matching {}: {}", pattern, join(kept.as_seq().unwrap_or(&[]), ", "));

    let matrix = nested!([["a", "b"], ["c", "d"]]);
    match filter_regexp(&matrix, &pattern) {
        Ok(_) => println!("Unexpected success on a matrix"),
        Err(e) => println!("Matrix rejected: {}", e),
    }
    println!();
    Ok(())
}

fn example_multiset_difference() -> Result<()> {
    println!("--- Example 4: Multiset Difference ---");

    // [1, 1, 1, 2, 3] minus [1, 3] keeps two of the three 1s
    let a = identify(&nested!([1, 1, 1, 2, 3]))?;
    let b = identify(&nested!([3, 1]))?;
    let remove: Vec<&Identified<i32>> = b.leaves().collect();

    let kept: Nested<Identified<i32>> = a
        .leaves()
        .filter(|item| !remove.contains(item))
        .cloned()
        .collect();
    let difference = generalize(&kept)?;
    println!("Difference: {:?}", difference);
    Ok(())
}
