use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use super::{ErrorOutput, Reporter};

/// In-memory sink that can be handed to a `Reporter` and inspected afterwards.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Build an uncolored reporter plus handles to its stdout and stderr.
pub fn capture_reporter(verbose: u8, quiet: bool) -> (Reporter, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let reporter = Reporter::with_writers(
        ErrorOutput::with_colors(false),
        verbose,
        quiet,
        Box::new(out.clone()),
        Box::new(err.clone()),
    );
    (reporter, out, err)
}
