/// Implemented by anything that reacts to a stream of `T`, so it can be wired
/// to a channel with [`crate::events::EventObserver::subscribe`].
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
