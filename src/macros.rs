/// Builds an [`Optional`](crate::Optional).
///
/// `optional![]` is empty, `optional![v]` holds `v`, and `optional![? v]`
/// goes through [`Optional::of_nullable`](crate::Optional::of_nullable).
#[macro_export]
macro_rules! optional {
    [] => ($crate::Optional::empty());
    [? $value:expr $(,)?] => ($crate::Optional::of_nullable($value));
    [$value:expr $(,)?] => ($crate::Optional::of($value));
}
