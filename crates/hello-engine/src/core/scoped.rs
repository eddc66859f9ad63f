/// A resource with an explicit release step.
pub trait Shutdown {
    /// Releases the resource. Called at most once by [`Scoped`].
    fn shutdown(&mut self);
}

/// Owns a [`Shutdown`] resource and releases it exactly once.
///
/// Release happens on the first explicit [`Scoped::shutdown`] call or on drop,
/// whichever comes first. Later calls are no-ops, so teardown paths can run
/// unconditionally, including after an aborted startup.
pub struct Scoped<T: Shutdown> {
    inner: Option<T>,
}

impl<T: Shutdown> Scoped<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Returns the resource unless it was already released.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut()
    }

    pub fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    /// Releases the resource. Returns `true` if this call did the release.
    pub fn shutdown(&mut self) -> bool {
        match self.inner.take() {
            Some(mut value) => {
                value.shutdown();
                true
            }
            None => false,
        }
    }
}

impl<T: Shutdown> Drop for Scoped<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Counted(Rc<Cell<u32>>);

    impl Shutdown for Counted {
        fn shutdown(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counted() -> (Scoped<Counted>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        (Scoped::new(Counted(count.clone())), count)
    }

    #[test]
    fn second_shutdown_is_a_no_op() {
        let (mut res, count) = counted();
        assert!(res.shutdown());
        assert!(!res.shutdown());
        assert_eq!(count.get(), 1);
        assert!(!res.is_live());
        assert!(res.get().is_none());
    }

    #[test]
    fn drop_after_shutdown_does_not_release_again() {
        let (mut res, count) = counted();
        res.shutdown();
        drop(res);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_releases_when_never_shut_down() {
        let (res, count) = counted();
        assert!(res.is_live());
        drop(res);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn release_order_follows_explicit_calls() {
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));

        struct Named(&'static str, Rc<std::cell::RefCell<Vec<&'static str>>>);
        impl Shutdown for Named {
            fn shutdown(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }

        let mut gui = Scoped::new(Named("gui", log.clone()));
        let mut scene = Scoped::new(Named("scene", log.clone()));
        let window = Scoped::new(Named("window", log.clone()));

        gui.shutdown();
        scene.shutdown();
        drop(window);
        drop(scene);
        drop(gui);

        assert_eq!(*log.borrow(), vec!["gui", "scene", "window"]);
    }
}
