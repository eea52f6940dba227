// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use stylobate::grid::{build_grid, floor_range};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `grid.build`, `grid.range`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small`, `medium_connected`, `large_sprawling`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_grid(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("grid.build");

        for (case_id, layout) in [
            ("small", fixtures::towers::fixture(fixtures::towers::Case::Small)),
            (
                "medium_connected",
                fixtures::towers::fixture(fixtures::towers::Case::MediumConnected),
            ),
            (
                "large_sprawling",
                fixtures::towers::fixture(fixtures::towers::Case::LargeSprawling),
            ),
        ] {
            let grid = build_grid(&layout);
            let cells = (grid.columns().len() * grid.rows().len()) as u64;

            group.throughput(Throughput::Elements(cells));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let grid = build_grid(black_box(&layout));
                    black_box(fixtures::checksum_grid(&grid))
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("grid.range");

        for (case_id, layout) in [
            ("small", fixtures::towers::fixture(fixtures::towers::Case::Small)),
            (
                "medium_connected",
                fixtures::towers::fixture(fixtures::towers::Case::MediumConnected),
            ),
            (
                "large_sprawling",
                fixtures::towers::fixture(fixtures::towers::Case::LargeSprawling),
            ),
        ] {
            let blocks = layout.blocks().len() as u64;

            group.throughput(Throughput::Elements(blocks));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let range = floor_range(black_box(layout.blocks()));
                    black_box(
                        (range.total_floors() as u64)
                            .wrapping_mul(131)
                            .wrapping_add(range.max_top().unsigned_abs() as u64)
                            .wrapping_mul(131)
                            .wrapping_add(range.min_bottom().unsigned_abs() as u64),
                    )
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_grid
}
criterion_main!(benches);
