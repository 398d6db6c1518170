use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::GameState;
use tui_pong::term::{encode_diff_into, FrameBuffer, GameView};
use tui_pong::types::{PlayerAction, ScreenSize};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_tick_render_and_diff_are_allocation_free_after_warmup() {
    let screen = ScreenSize::new(80, 24);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(screen.width, screen.height);
    let mut shown = FrameBuffer::new(screen.width, screen.height);
    let mut out: Vec<u8> = Vec::with_capacity(256 * 1024);
    let mut state = GameState::new(screen);

    // Warm-up.
    view.render_into(&state, &mut fb);
    encode_diff_into(&shown, &fb, &mut out).unwrap();
    std::mem::swap(&mut shown, &mut fb);

    let allocs = with_alloc_counting(|| {
        // Runs past game over so the banner path is covered too.
        for i in 0..200 {
            state.set_screen(screen);
            state.tick();
            if i % 3 == 0 {
                state.apply_action(PlayerAction::Player2Down);
            }
            view.render_into(&state, &mut fb);

            out.clear();
            encode_diff_into(&shown, &fb, &mut out).unwrap();
            std::mem::swap(&mut shown, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
