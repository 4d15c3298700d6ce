/// Blocking user-facing alert. Every handler outcome shown to the user goes through here.
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}
