//! Multi-window demo
//!
//! Polls two windows through one context. Closing a window drops it, and the
//! context's registry stops tracking its storage on the next cycle. The demo
//! exits once both windows are gone.

use std::time::Duration;

use window_kit::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut context = WindowContext::new()?;
    let mut windows = vec![
        WindowBuilder::new()
            .title("window_kit - left")
            .size(480, 360)
            .build(&mut context)?,
        WindowBuilder::new()
            .title("window_kit - right")
            .size(480, 360)
            .resizable()
            .build(&mut context)?,
    ];

    while !windows.is_empty() {
        context.poll_events();

        for window in &mut windows {
            for event in window.events() {
                log::info!("{event:?}");
                if event == Event::Closed {
                    window.request_close();
                }
            }
            if window.input().is_key_pressed(Key::Escape) {
                window.request_close();
            }
        }

        windows.retain(|window| !window.should_close());

        std::thread::sleep(Duration::from_millis(16));
    }

    log::info!("all windows closed");
    Ok(())
}
