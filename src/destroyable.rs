/// Implemented by anything holding channel subscriptions that point back at
/// itself; those cycles are never freed by `Rc` alone, so `destroy` has to
/// drop the subscriptions explicitly.
pub trait Destroyable {
    fn destroy(&mut self);
}
