//! Basic Sparse Matrix Operations Example
//!
//! This example demonstrates fundamental DOK matrix operations including:
//! - Incremental construction and random access
//! - Fancy indexing with paired index arrays
//! - Slice-based sub-matrix extraction
//! - Reductions and scalar multiplication
//!
//! Run with: cargo run --example basic_ops

use sparray::{SparseMatrix, SparseResult};

fn main() -> SparseResult<()> {
    println!("=== sparray: Basic Operations Example ===\n");

    // 1. Incremental construction
    println!("1. Building a 5x7 matrix entry by entry...");
    let mut m = SparseMatrix::zeros((5, 7));
    m.set(0, 1, 1.0)?;
    m.set(1, 3, 5.2)?;
    m.set(3, 3, -0.2)?;
    m.set(0, 6, -1.23)?;
    m.set(4, 4, 12.2)?;
    println!(
        "   {} stored entries, density {:.1}%\n",
        m.nnz(),
        m.density() * 100.0
    );

    // 2. Random access, including negative indices
    println!("2. Random access...");
    println!("   m[1, 3]   = {}", m.get(1, 3)?);
    println!("   m[-1, -3] = {} (last row, (4, 4))", m.get(-1, -3)?);
    println!("   m[2, 2]   = {} (never assigned)\n", m.get(2, 2)?);

    // 3. Fancy indexing
    println!("3. Gathering values at paired index arrays...");
    let values = m.gather(&[0, 1, 3], &[1, 3, 3])?;
    println!("   m[[0, 1, 3], [1, 3, 3]] = {:?}\n", values);

    // 4. Sub-matrix extraction
    println!("4. Extracting rows [0, 1, 3] over all columns...");
    let sub = m.extract([0, 1, 3], ..)?;
    println!(
        "   Result: {}x{}, {} stored entries",
        sub.nrows(),
        sub.ncols(),
        sub.nnz()
    );
    println!("{}", sub);

    // 5. Reductions
    println!("5. Reductions...");
    println!("   sum  = {:.4}", m.sum());
    println!("   mean = {:.4}", m.mean());
    println!("   diag = {:?}", m.diag());
    let (rows, cols) = m.nonzero();
    println!("   nonzero rows = {:?}", rows);
    println!("   nonzero cols = {:?}\n", cols);

    // 6. Scalar multiplication
    println!("6. Scaling by 2.0...");
    let doubled = &m * 2.0;
    println!("   sum after scaling = {:.4}\n", doubled.sum());

    println!("{}", m);
    Ok(())
}
