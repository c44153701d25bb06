use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<non-string panic payload>")
}

/// Группирует проверки вокруг значения: если `f` паникует, сообщение
/// дополняется `Debug`-представлением `value`.
///
/// ```
/// use token_testkit::{as_clue, Design};
///
/// let d = Design::new(1, 9, "Cat");
/// as_clue(&d, |d| {
///     assert_eq!(d.user_id, 9);
///     assert_eq!(d.name, "Cat");
/// });
/// ```
#[track_caller]
pub fn as_clue<T, R, F>(value: &T, f: F) -> R
where
    T: fmt::Debug + ?Sized,
    F: FnOnce(&T) -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(|| f(value))) {
        Ok(r) => r,
        Err(payload) => panic!("{value:?}\n{}", panic_message(&*payload)),
    }
}
