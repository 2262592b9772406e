use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use infinipager_ui::{InfiniteHorizontalPager, PageDirection, PagerConfig, PointerEvent, Size};

const FRAME_NANOS: u64 = 16_666_667;
const ITEM_COUNT_SAMPLES: &[usize] = &[4, 64, 1024];
const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn pager(item_count: usize) -> InfiniteHorizontalPager<u32> {
    let items: Vec<u32> = (0..item_count as u32).collect();
    let mut pager = InfiniteHorizontalPager::new(&items, PagerConfig::default())
        .expect("default config is valid")
        .expect("items are not empty");
    pager.set_viewport(VIEWPORT, 1.0);
    pager
}

fn settle(pager: &mut InfiniteHorizontalPager<u32>, clock: &mut u64) {
    while pager.on_frame(*clock).needs_next_frame {
        *clock += FRAME_NANOS;
    }
    *clock += FRAME_NANOS;
}

fn bench_arrow_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrow_round_trip");
    for &item_count in ITEM_COUNT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &item_count,
            |b, &item_count| {
                let mut pager = pager(item_count);
                let mut clock = 0;
                b.iter(|| {
                    pager.scroll_to_adjacent(PageDirection::Previous);
                    settle(&mut pager, &mut clock);
                    pager.scroll_to_adjacent(PageDirection::Next);
                    settle(&mut pager, &mut clock);
                    black_box(pager.current_page())
                });
            },
        );
    }
    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    c.bench_function("swipe_and_settle", |b| {
        let mut pager = pager(4);
        let mut clock = 0;
        let mut uptime = 0;
        b.iter(|| {
            pager.on_pointer_event(&PointerEvent::down(900.0, 400.0, uptime));
            for step in 1..=10 {
                uptime += 16;
                let x = 900.0 - step as f32 * 72.0;
                pager.on_pointer_event(&PointerEvent::moved(x, 400.0, uptime));
                pager.on_frame(clock);
                clock += FRAME_NANOS;
            }
            pager.on_pointer_event(&PointerEvent::up(180.0, 400.0, uptime));
            settle(&mut pager, &mut clock);
            black_box(pager.visible_pages().count())
        });
    });
}

fn bench_visible_pages(c: &mut Criterion) {
    c.bench_function("visible_pages_mid_drag", |b| {
        let mut pager = pager(64);
        pager.on_pointer_event(&PointerEvent::down(900.0, 400.0, 0));
        pager.on_pointer_event(&PointerEvent::moved(600.0, 400.0, 16));
        b.iter(|| black_box(pager.visible_pages().map(|page| page.offset_x).sum::<f32>()));
    });
}

criterion_group!(
    benches,
    bench_arrow_round_trip,
    bench_swipe,
    bench_visible_pages
);
criterion_main!(benches);
