// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Troupe-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Troupe and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use troupe::screen::ScreenController;
use troupe::ui::{Input, SelectableList, Silent};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `screen.tick`
// - Case IDs are `<scenario>/<fixture>` with fixture one of `small`, `medium`, `large`.
fn benches_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen.tick");

    for case in fixtures::Case::ALL {
        let roster = fixtures::roster(case);
        let directory = fixtures::directory(case);

        // Party list focused with the first member highlighted.
        let mut browsing = ScreenController::new();
        let mut browsing_roster = roster.clone();
        browsing.tick(&mut browsing_roster, Some(Input::Confirm), &mut Silent);

        group.bench_function(format!("idle/{}", case.id()), {
            let mut screen = browsing.clone();
            let mut roster = browsing_roster.clone();
            move |b| b.iter(|| black_box(screen.tick(&mut roster, None, &mut Silent)))
        });

        group.bench_function(format!("browse/{}", case.id()), {
            let mut screen = browsing.clone();
            let mut roster = browsing_roster.clone();
            move |b| {
                b.iter(|| {
                    screen.tick(&mut roster, Some(black_box(Input::Down)), &mut Silent);
                    black_box(screen.status().actor_id())
                })
            }
        });

        group.bench_function(format!("send_to_reserve/{}", case.id()), {
            let screen = browsing.clone();
            let roster = browsing_roster.clone();
            move |b| {
                b.iter_batched(
                    || (screen.clone(), roster.clone()),
                    |(mut screen, mut roster)| {
                        for input in [Input::Confirm, Input::Down, Input::Confirm] {
                            screen.tick(&mut roster, Some(input), &mut Silent);
                        }
                        black_box(roster.reserve().len())
                    },
                    BatchSize::SmallInput,
                )
            }
        });

        group.bench_function(format!("render_rows/{}", case.id()), {
            let screen = browsing.clone();
            let roster = browsing_roster.clone();
            move |b| {
                b.iter(|| {
                    let list = screen.reserve_list();
                    let mut levels = 0u64;
                    for index in 0..list.item_count(&roster) {
                        if let Some(row) = list.render_item(&roster, &directory, index, true) {
                            levels += u64::from(row.level.unwrap_or(0));
                        }
                    }
                    black_box(levels)
                })
            }
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_screen
}
criterion_main!(benches);
