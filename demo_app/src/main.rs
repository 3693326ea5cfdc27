//! Basic demo: one window echoing its events
//!
//! Opens a resizable window, logs every event it receives and exits when the
//! window is closed or Escape is pressed.

use std::time::Duration;

use window_kit::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut context = WindowContext::new()?;
    log::info!(
        "vulkan supported: {}",
        context.is_vulkan_supported()
    );

    let mut window = WindowBuilder::new()
        .title("window_kit - basic")
        .size(800, 600)
        .resizable()
        .build(&mut context)?;

    while !window.should_close() {
        context.poll_events();

        for event in window.events() {
            log::info!("{event:?}");
            if event == Event::Closed {
                window.request_close();
            }
        }

        let input = window.input();
        if input.is_key_pressed(Key::Escape) {
            log::info!("escape pressed, closing");
            window.request_close();
        }
        if input.is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = input.cursor_position();
            log::info!("click at ({x:.0}, {y:.0})");
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
