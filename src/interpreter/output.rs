use std::{cell::RefCell, rc::Rc};

/// Destination for the lines written by `output` statements.
///
/// The binary writes to stdout; tests capture into a buffer and read it back.
#[derive(Debug)]
pub enum PrintHandler {
    /// Writes each line to stdout.
    Stdout,
    /// Collects lines in memory.
    Buffer(RefCell<String>),
}

/// Print handler shared between the caller and an interpreter.
pub type SharedPrintHandler = Rc<PrintHandler>;

impl PrintHandler {
    /// Writes `line` followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(line);
                buffer.push('\n');
            },
        }
    }

    /// Everything captured so far. Empty unless this is a buffer.
    #[must_use]
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.borrow().clone(),
            Self::Stdout => String::new(),
        }
    }
}

/// Creates a handler that writes to stdout.
#[must_use]
pub fn stdout_handler() -> SharedPrintHandler {
    Rc::new(PrintHandler::Stdout)
}

/// Creates a handler that captures output for later inspection.
///
/// # Example
/// ```
/// use cosmo::interpreter::output::buffer_handler;
///
/// let handler = buffer_handler();
/// handler.println("hello");
/// assert_eq!(handler.get_output(), "hello\n");
/// ```
#[must_use]
pub fn buffer_handler() -> SharedPrintHandler {
    Rc::new(PrintHandler::Buffer(RefCell::new(String::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_keeps_lines_in_order() {
        let handler = buffer_handler();
        handler.println("a");
        handler.println("b");
        assert_eq!(handler.get_output(), "a\nb\n");
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(stdout_handler().get_output(), "");
    }
}
