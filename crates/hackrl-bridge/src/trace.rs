//! Call trace of intercepted operations

use std::cell::RefCell;
use std::rc::Rc;

/// Stack of operation tags currently in progress
#[derive(Debug, Clone, Default)]
pub struct CallTrace {
    stack: Rc<RefCell<Vec<&'static str>>>,
}

/// Pops its tag when released
#[must_use = "the tag is popped as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TraceGuard {
    stack: Rc<RefCell<Vec<&'static str>>>,
    depth: usize,
}

impl CallTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `tag` for the lifetime of the returned guard
    pub fn enter(&self, tag: &'static str) -> TraceGuard {
        let mut stack = self.stack.borrow_mut();
        stack.push(tag);
        TraceGuard {
            stack: Rc::clone(&self.stack),
            depth: stack.len(),
        }
    }

    /// Tags oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.stack.borrow().iter().map(|s| s.to_string()).collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        let mut stack = self.stack.borrow_mut();
        // guards release innermost first
        debug_assert_eq!(stack.len(), self.depth);
        stack.truncate(self.depth - 1);
    }
}
