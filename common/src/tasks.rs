//! In-flight request tracking tied to a component's lifetime.
//!
//! Every future a panel spawns goes through `TaskRegistry::track`. When the
//! panel is torn down it calls `abort_all`, and each tracked future resolves
//! to `None` instead of delivering a late result to a dead component.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::{AbortHandle, abortable};

#[derive(Default)]
struct Inner {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
    closed: bool,
}

#[derive(Clone, Default)]
pub struct TaskRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a future so it can be aborted. Resolves to `None` if aborted,
    /// including when the registry was already closed.
    pub fn track<F>(&self, future: F) -> impl Future<Output = Option<F::Output>> + use<F>
    where
        F: Future + 'static,
    {
        let (future, handle) = abortable(future);
        let id = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                handle.abort();
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handles.insert(id, handle);
            id
        };

        let inner = Rc::clone(&self.inner);
        async move {
            let outcome = future.await.ok();
            inner.borrow_mut().handles.remove(&id);
            outcome
        }
    }

    /// Aborts everything in flight and rejects future work.
    pub fn abort_all(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.closed = true;
        let aborted = inner.handles.len();
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
        if aborted > 0 {
            log::debug!("aborted {} in-flight request(s)", aborted);
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.borrow().handles.len()
    }
}
