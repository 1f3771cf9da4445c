pub mod cli;
pub mod glyph;
pub mod logging;
mod renderer;

use std::{
    io::{Stdout, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

pub use renderer::{Canvas, Renderer, RendererStatus};

use crate::{
    animation::{AnimationDriver, RunSummary},
    error::MazeError,
    maze::{MazeConfig, MazeEvent},
};

pub struct App {
    /// How often the input thread checks whether it should stop
    user_input_event_poll_timeout: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            user_input_event_poll_timeout: Duration::from_millis(100),
        }
    }
}

impl App {
    /// Maximum number of events buffered between the driver and the renderer
    const MAX_EVENTS_IN_CHANNEL_BUFFER: usize = 1000;

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    /// even if the panic occurs in a different thread
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        crossterm::queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Animate one maze in the terminal. Esc cancels the animation.
    pub fn run(&self, stdout: &mut Stdout, config: MazeConfig) -> std::io::Result<()> {
        let cancel = Arc::new(AtomicBool::new(false));
        // Set by the main thread once rendering has returned, so the input thread can stop
        let render_done = Arc::new(AtomicBool::new(false));

        let poll_timeout = self.user_input_event_poll_timeout;
        let cancel_for_input = cancel.clone();
        let done_for_input = render_done.clone();
        let input_thread_handle = std::thread::spawn(move || -> std::io::Result<()> {
            App::listen_to_user_input(poll_timeout, &done_for_input, &cancel_for_input)
        });

        let (event_tx, event_rx) =
            std::sync::mpsc::sync_channel::<MazeEvent>(App::MAX_EVENTS_IN_CHANNEL_BUFFER);
        let driver_handle = AnimationDriver::new(config, cancel.clone()).spawn(event_tx);

        let mut renderer = Renderer::new();
        let status = renderer.render(event_rx, &cancel);
        render_done.store(true, Ordering::Relaxed);

        // A cancelled renderer drops the receiver, which also stops the driver
        let outcome = driver_handle.join().expect("Animation thread panicked");
        let _ = input_thread_handle.join();
        let status = status?;

        let msg = match (&status, &outcome) {
            (RendererStatus::TooSmall, _) => {
                tracing::info!("Terminal too small for the maze, waiting for Esc.");
                stdout.execute(style::PrintStyledContent(
                    "Press Esc to exit...\r\n"
                        .with(Color::Blue)
                        .attribute(Attribute::Bold),
                ))?;
                App::wait_for_esc()?;
                return Ok(());
            }
            (RendererStatus::Cancelled, _) | (_, Err(MazeError::Cancelled)) => {
                tracing::info!("Animation was cancelled by user.");
                return Ok(());
            }
            (_, Err(e)) => return Err(std::io::Error::other(e.clone())),
            (_, Ok(summary)) if summary.solved() => format!(
                "Path found! {} cells from entrance to exit. ",
                summary.path.as_ref().map_or(0, Vec::len)
            ),
            (_, Ok(_)) => "No path found. ".to_string(),
        };
        stdout.execute(style::PrintStyledContent(
            msg.with(Color::Green).attribute(Attribute::Bold),
        ))?;
        stdout.execute(style::PrintStyledContent(
            "Press Esc to exit...\r\n"
                .with(Color::Blue)
                .attribute(Attribute::Bold),
        ))?;
        App::wait_for_esc()?;
        Ok(())
    }

    /// Run the animation without a terminal, draining events as they come.
    pub fn run_headless(config: MazeConfig) -> Result<RunSummary, MazeError> {
        let (event_tx, event_rx) =
            std::sync::mpsc::sync_channel::<MazeEvent>(App::MAX_EVENTS_IN_CHANNEL_BUFFER);
        let driver_handle = AnimationDriver::new(config, Arc::default()).spawn(event_tx);
        // Nothing to draw, just keep the channel moving until the driver hangs up
        for _event in event_rx.iter() {}
        driver_handle.join().expect("Animation thread panicked")
    }

    /// Listen for Esc key presses and raise the cancel flag.
    /// Runs on its own thread until rendering is done or cancelled
    fn listen_to_user_input(
        event_poll_timeout: Duration,
        render_done: &AtomicBool,
        cancel: &AtomicBool,
    ) -> std::io::Result<()> {
        loop {
            if render_done.load(Ordering::Relaxed) || cancel.load(Ordering::Relaxed) {
                return Ok(());
            }

            // Poll for events with a timeout
            if !event::poll(event_poll_timeout)? {
                // No event available, continue loop to check flags again
                continue;
            }

            if let event::Event::Key(event::KeyEvent {
                code: KeyCode::Esc,
                kind: event::KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                tracing::debug!("[input loop] Esc key pressed, cancelling animation");
                cancel.store(true, Ordering::Relaxed);
                return Ok(());
            }
        }
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }
}
