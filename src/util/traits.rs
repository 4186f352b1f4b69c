/// Allows any sized value to be moved into a Result without the extra noise of wrapping it in
/// `Ok(...)` or `Err(...)`.
pub trait ResultExtensions
where
    Self: Sized,
{
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}

/// Allows any sized value to be moved into an Option without wrapping it in `Some(...)`.
pub trait OptionExtensions
where
    Self: Sized,
{
    fn to_some(self) -> Option<Self> {
        Some(self)
    }
}
impl<T> OptionExtensions for T {}
