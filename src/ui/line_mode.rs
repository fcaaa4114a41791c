// Line-oriented host
//
// For pipes and dumb terminals: one input line is one submitted command, and
// whatever the transcript gains gets written out. No prompt, no key handling.

use crate::error::Result;
use crate::terminal::{Controller, OutputLine, TranscriptChange};
use crate::ui::render;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Feed every line of `input` to the controller and write the transcript to `output`
pub fn run<R: BufRead, W: Write>(controller: &mut Controller, input: R, mut output: W) -> Result<()> {
    let pending: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    controller.subscribe(Box::new(
        move |change: TranscriptChange, transcript: &[OutputLine]| {
            let from = match change {
                TranscriptChange::Appended { from } => from,
                TranscriptChange::Reset => 0,
            };
            sink.borrow_mut()
                .extend(transcript[from..].iter().map(render::line));
        },
    ));
    flush(&pending, &mut output)?;

    for line in input.lines() {
        let line = line?;
        controller.submit_line(&line);
        flush(&pending, &mut output)?;

        if let Some(project) = controller.overlay() {
            for row in render::project_overlay(project) {
                writeln!(output, "{}", row)?;
            }
            writeln!(output)?;
            controller.close_overlay();
        }
    }

    output.flush()?;
    Ok(())
}

fn flush<W: Write>(pending: &Rc<RefCell<Vec<String>>>, output: &mut W) -> Result<()> {
    for line in pending.borrow_mut().drain(..) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
