use std::{
    io::{Stdout, Write},
    sync::{atomic::AtomicBool, mpsc::Receiver},
};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    app::glyph::{Glyph, GlyphBuffer},
    maze::{Location, MazeEvent},
};

#[derive(Debug, Clone, PartialEq)]
pub enum RendererStatus {
    /// The event stream ran to its end.
    Completed,
    Cancelled,
    /// The terminal cannot fit the maze; a message saying so is on screen.
    TooSmall,
}

/// Turns maze events into glyph changes. Knows nothing about the terminal.
#[derive(Default)]
pub struct Canvas {
    buffer: Option<GlyphBuffer>,
}

impl Canvas {
    pub fn buffer(&self) -> Option<&GlyphBuffer> {
        self.buffer.as_ref()
    }

    fn slot(location: Location) -> (i32, i32) {
        GlyphBuffer::cell_slot(location.x, location.y)
    }

    fn wall_slot(a: Location, b: Location) -> (i32, i32) {
        GlyphBuffer::between((a.x, a.y), (b.x, b.y))
    }

    /// Applies an event and returns the slots that changed.
    pub fn apply(&mut self, event: &MazeEvent) -> Vec<((i32, i32), Glyph)> {
        if let MazeEvent::Initial {
            col_count,
            row_count,
            ..
        } = *event
        {
            self.buffer = Some(GlyphBuffer::new(col_count, row_count));
            return Vec::new();
        }
        let Some(buffer) = self.buffer.as_mut() else {
            // Nothing to draw on before the grid was announced
            return Vec::new();
        };

        let updates = match *event {
            MazeEvent::WallOpened { location, side } => {
                vec![(Self::wall_slot(location, location.step(side)), Glyph::Empty)]
            }
            MazeEvent::Segment {
                source,
                target,
                backtrack: false,
            } => vec![
                (Self::slot(source), Glyph::Path),
                (Self::wall_slot(source, target), Glyph::Path),
                (Self::slot(target), Glyph::Path),
            ],
            // The source stays on the path, only the abandoned leg fades
            MazeEvent::Segment {
                source,
                target,
                backtrack: true,
            } => vec![
                (Self::wall_slot(source, target), Glyph::Backtrack),
                (Self::slot(target), Glyph::Backtrack),
            ],
            MazeEvent::Initial { .. } | MazeEvent::PhaseStarted(_) | MazeEvent::Finished { .. } => {
                Vec::new()
            }
        };

        updates
            .into_iter()
            .filter(|&(slot, glyph)| buffer.set(slot, glyph))
            .collect()
    }
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    canvas: Canvas,
}

impl Renderer {
    /// Rows kept free below the maze for status messages
    pub const NUM_STATUS_ROWS: u16 = 3;

    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
            canvas: Canvas::default(),
        }
    }

    /// Terminal `(width, height)` needed for a glyph buffer of the given size
    pub fn needed_size(width: u16, height: u16) -> (u16, u16) {
        (
            width.saturating_mul(Glyph::WIDTH),
            height.saturating_add(Renderer::NUM_STATUS_ROWS),
        )
    }

    pub fn fits(term_size: (u16, u16), width: u16, height: u16) -> bool {
        let (needed_width, needed_height) = Renderer::needed_size(width, height);
        term_size.0 >= needed_width && term_size.1 >= needed_height
    }

    /// Check if terminal size is sufficient for a buffer of the given size.
    /// If not, display a message and return Ok(false)
    fn check_size(stdout: &mut Stdout, width: u16, height: u16) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let (needed_width, needed_height) = Renderer::needed_size(width, height);
        if !Renderer::fits((term_width, term_height), width, height) {
            let msg = format!(
                "Terminal size ({}x{}) is too small for the maze, which needs {}x{}. Resize the terminal or pick a smaller maze.\r\n",
                term_width, term_height, needed_width, needed_height
            );
            queue!(
                stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    fn draw_full(&mut self) -> std::io::Result<bool> {
        let Some(buffer) = self.canvas.buffer() else {
            return Ok(true);
        };
        if !Renderer::check_size(&mut self.stdout, buffer.width(), buffer.height())? {
            return Ok(false);
        }
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for row in buffer.rows() {
            for glyph in row {
                self.stdout.queue(style::Print(glyph))?;
            }
            self.stdout.queue(style::Print("\r\n"))?;
        }
        self.stdout.flush()?;
        Ok(true)
    }

    /// Render a single maze event to the terminal
    /// Returns Ok(false) if the terminal cannot show the maze
    fn render_event(&mut self, event: &MazeEvent) -> std::io::Result<bool> {
        let updates = self.canvas.apply(event);
        if let MazeEvent::Initial { .. } = event {
            return self.draw_full();
        }
        for ((x, y), glyph) in updates {
            queue!(
                self.stdout,
                cursor::MoveTo(x as u16 * Glyph::WIDTH, y as u16),
                style::Print(glyph)
            )?;
        }
        self.stdout.flush()?;
        Ok(true)
    }

    /// Render loop over the event channel until the sender hangs up or the
    /// run is cancelled.
    pub fn render(
        &mut self,
        event_rx: Receiver<MazeEvent>,
        cancel: &AtomicBool,
    ) -> std::io::Result<RendererStatus> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::Hide)?;
        self.stdout.flush()?;

        // Blocks until the next event; ends when the driver drops its sender
        for event in event_rx.iter() {
            if cancel.load(std::sync::atomic::Ordering::Relaxed) {
                return Ok(RendererStatus::Cancelled);
            }
            tracing::trace!("[render] {:?}", event);
            if !self.render_event(&event)? {
                // Stop the driver; the message stays up until the user dismisses it
                cancel.store(true, std::sync::atomic::Ordering::Relaxed);
                return Ok(RendererStatus::TooSmall);
            }
        }

        // Move cursor below the maze after exiting
        if let Some(buffer) = self.canvas.buffer() {
            queue!(self.stdout, cursor::MoveTo(0, buffer.height()), cursor::Show)?;
            self.stdout.flush()?;
        }
        Ok(RendererStatus::Completed)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
