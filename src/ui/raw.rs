// Raw-mode terminal host
//
// Reads key events with crossterm, feeds them to the controller and keeps the
// screen in sync: transcript lines scroll up, the prompt is redrawn in place.

use crate::error::Result;
use crate::terminal::{Controller, Effect, Key, OutputLine, TranscriptChange};
use crate::ui::render;
use colored::Colorize;
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use std::io::{self, Stdout, Write};

/// Puts the terminal in raw mode and restores it when dropped
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("raw mode enabled");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = io::stdout().flush();
        log::debug!("raw mode disabled");
    }
}

/// Map a crossterm key event onto a controller key
pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Key::ClearLine),
            KeyCode::Char('l') => Some(Key::ClearScreen),
            KeyCode::Char('d') => Some(Key::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

// Writes transcript changes straight to the tty. Raw mode needs \r\n.
struct ScreenWriter {
    out: Stdout,
}

impl ScreenWriter {
    fn write(&mut self, change: TranscriptChange, transcript: &[OutputLine]) -> io::Result<()> {
        let from = match change {
            TranscriptChange::Appended { from } => {
                queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                from
            }
            TranscriptChange::Reset => {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                0
            }
        };

        for line in &transcript[from..] {
            queue!(self.out, Print(render::line(line)), Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl crate::terminal::SessionListener for ScreenWriter {
    fn transcript_changed(&mut self, change: TranscriptChange, transcript: &[OutputLine]) {
        if let Err(e) = self.write(change, transcript) {
            log::warn!("failed to draw transcript: {}", e);
        }
    }
}

fn draw_prompt(out: &mut Stdout, controller: &Controller) -> io::Result<()> {
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

    if !controller.candidates().is_empty() {
        let listing = controller.candidates().join("  ");
        queue!(out, Print(listing.dimmed().to_string()), Print("\r\n"))?;
    }

    queue!(
        out,
        Print(render::PROMPT.green().bold().to_string()),
        Print(controller.input())
    )?;
    out.flush()
}

fn draw_overlay(out: &mut Stdout, controller: &Controller) -> io::Result<()> {
    let Some(project) = controller.overlay() else {
        return Ok(());
    };
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for row in render::project_overlay(project) {
        queue!(out, Print(row), Print("\r\n"))?;
    }
    queue!(out, Print("\r\n"))?;
    out.flush()
}

/// Run the interactive loop until the user quits
pub fn run(controller: &mut Controller) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();

    controller.subscribe(Box::new(ScreenWriter { out: io::stdout() }));
    draw_prompt(&mut out, controller)?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        let Some(key) = map_key(key_event) else {
            continue;
        };

        match controller.handle_key(key) {
            Effect::Exit => break,
            Effect::Idle => continue,
            Effect::OverlayOpened => draw_overlay(&mut out, controller)?,
            Effect::Input | Effect::Submitted { .. } | Effect::OverlayClosed => {}
        }

        if controller.overlay().is_none() {
            draw_prompt(&mut out, controller)?;
        }
    }

    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), Print("bye\r\n"))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(map_key(press(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Key::Char('a')));
        assert_eq!(map_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(Key::Char('A')));
        assert_eq!(map_key(press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(map_key(press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(map_key(press(KeyCode::Tab, KeyModifiers::NONE)), Some(Key::Tab));
        assert_eq!(map_key(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Escape));
        assert_eq!(map_key(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Key::ClearLine));
        assert_eq!(map_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL)), Some(Key::ClearScreen));
        assert_eq!(map_key(press(KeyCode::Char('d'), KeyModifiers::CONTROL)), Some(Key::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), None);
    }
}
