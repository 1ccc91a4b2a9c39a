//! Performance benchmarks for ocrlayout-rs.
//!
//! Benchmarks cover the layout pipeline over synthetic fragment grids:
//! row grouping, page assembly, and multi-page document assembly across
//! three page sizes:
//! - Simple: 10 rows x 2 columns
//! - Medium: 50 rows x 5 columns
//! - Dense: 200 rows x 8 columns

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ocrlayout::{Fragment, LayoutOptions, Rect, assemble_document, assemble_page};
use ocrlayout_core::group_into_rows;

// ---------------------------------------------------------------------------
// Fragment fixture generators
// ---------------------------------------------------------------------------

/// Build a page of `rows` x `cols` fragments laid out as a table grid.
///
/// Column starts are 150px apart (wide-column gaps), rows 20px apart, with
/// a small deterministic y-jitter so grouping does real comparisons.
fn build_page(rows: usize, cols: usize) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let jitter = ((r * 7 + c * 3) % 5) as f64 - 2.0;
            let x = c as f64 * 150.0;
            let y = r as f64 * 20.0 + jitter;
            fragments.push(Fragment::new(
                format!("cell{r}x{c}"),
                Rect::from_origin_size(x, y, 60.0, 10.0),
            ));
        }
    }
    // Shuffle deterministically: recognition output arrives unordered.
    fragments.sort_by_key(|f| {
        let x = f.bbox.x0 as u64;
        let y = f.bbox.top as u64;
        (x.wrapping_mul(2654435761) ^ y.wrapping_mul(40503)) % 10007
    });
    fragments
}

fn bench_row_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_grouping");
    for (name, rows, cols) in [("simple", 10, 2), ("medium", 50, 5), ("dense", 200, 8)] {
        let page = build_page(rows, cols);
        group.bench_function(name, |b| {
            b.iter(|| group_into_rows(black_box(page.clone()), black_box(10.0)))
        });
    }
    group.finish();
}

fn bench_page_assembly(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let mut group = c.benchmark_group("page_assembly");
    for (name, rows, cols) in [("simple", 10, 2), ("medium", 50, 5), ("dense", 200, 8)] {
        let page = build_page(rows, cols);
        group.bench_function(name, |b| {
            b.iter(|| assemble_page(black_box(page.clone()), black_box(&options)))
        });
    }
    group.finish();
}

fn bench_document_assembly(c: &mut Criterion) {
    let options = LayoutOptions::default();
    let pages: Vec<Vec<Fragment>> = (0..10).map(|_| build_page(50, 5)).collect();
    c.bench_function("document_assembly_10_pages", |b| {
        b.iter(|| assemble_document(black_box(pages.clone()), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_row_grouping,
    bench_page_assembly,
    bench_document_assembly
);
criterion_main!(benches);
