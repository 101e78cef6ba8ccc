use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle;
}

#[must_use = "dropping a TimerHandle cancels the scheduled task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    #[cfg(test)]
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, task);
        // gloo clears the browser timeout when the Timeout is dropped
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Task {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(300, task("late")).forget();
        scheduler.schedule(100, task("early")).forget();
        scheduler.schedule(100, task("early-second")).forget();

        scheduler.advance(99);
        assert!(log.borrow().is_empty());

        scheduler.advance(250);
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), 349);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(50, task("dropped"));
        drop(handle);
        scheduler.schedule(60, task("kept")).forget();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn tasks_can_schedule_follow_ups() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let inner = scheduler.clone();
        let second = task("second");
        scheduler
            .schedule(
                10,
                Box::new(move || inner.schedule(10, second).forget()),
            )
            .forget();

        scheduler.advance(15);
        assert!(log.borrow().is_empty());
        scheduler.advance(5);
        assert_eq!(*log.borrow(), vec!["second"]);
    }
}
