//! Simulated pull-to-refresh session on the reference pane
//!
//! Drives a drag past the trigger threshold, releases into loading,
//! finishes the reload, and prints every state the indicator sees.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p windlass_pull --example pull_demo
//! ```

use windlass_pull::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

struct ArrowIndicator;

impl PullIndicator for ArrowIndicator {
    fn on_state_change(&mut self, state: RefreshState, trigger_percent: f32) {
        match state {
            RefreshState::Triggering => {
                println!("indicator: arrow at {:.0}%", trigger_percent * 100.0)
            }
            other => println!("indicator: {other:?}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pane = ScrollPane::new(Size::new(390.0, 800.0), Size::new(390.0, 2000.0));
    let mut dock = PullDock::new(pane);
    dock.set_header(PullView::header(ArrowIndicator).on_refresh(|kind| {
        println!("refresh requested by the {kind:?}");
    }));

    println!("-- dragging down --");
    dock.container_mut().begin_drag();
    for y in [-12.0, -27.0, -41.0, -60.0] {
        dock.container_mut().drag_to(y);
        dock.pump();
    }

    println!("-- released --");
    dock.container_mut().end_drag();
    dock.tick(FRAME);
    println!(
        "loading at offset {:.1}, top inset {:.1}",
        dock.container().content_offset().y,
        dock.container().content_inset().top
    );

    println!("-- reload finished --");
    dock.end_refreshing(PullKind::Header);
    for _ in 0..30 {
        dock.container_mut().tick(FRAME);
        dock.tick(FRAME);
    }
    println!(
        "settled: {:?} at offset {:.1}",
        dock.state(PullKind::Header).unwrap(),
        dock.container().content_offset().y
    );
}
