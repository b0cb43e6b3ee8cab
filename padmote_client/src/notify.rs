use padmote::{Notification, Severity};

/// Contract of the notification surface submissions report through.
///
/// A surface receives the (title, message, severity) triples a submission
/// produces; the submitter never inspects what the surface does with them.
pub trait Notify {
    fn notify(&self, notification: &Notification);
}

impl<T: Notify + ?Sized> Notify for &T {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<T: Notify + ?Sized> Notify for Box<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<T: Notify + ?Sized> Notify for std::sync::Arc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

/// Notification surface that forwards to the `log` facade.
///
/// Useful for headless front-ends that have no popup or console of their
/// own; severities map onto log levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Info => log::info!("{}: {}", notification.title, notification.message),
            Severity::Success => log::info!("{}: {}", notification.title, notification.message),
            Severity::Error => log::error!("{}: {}", notification.title, notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use padmote::Notification;

    use super::Notify;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<Notification>>,
    }

    impl Notify for Recorder {
        fn notify(&self, notification: &Notification) {
            self.seen.borrow_mut().push(notification.clone());
        }
    }

    #[test]
    fn forwarding_impls() {
        let recorder = Recorder::default();

        (&recorder).notify(&Notification::success("direct"));

        let boxed: Box<dyn Notify + '_> = Box::new(&recorder);
        boxed.notify(&Notification::failure());

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].message, "direct");
        assert_eq!(seen[1].message, "Something went wrong.");
    }
}
