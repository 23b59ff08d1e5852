/// Panicking form of the annotation assertions for use inside `#[test]`s.
///
/// ```ignore
/// assert_annotated!(Customer => DisplayMeta);
/// assert_annotated!(Customer, email => Required, StringLength);
/// assert_annotated!(Customer, email == 50 => StringLength);
/// assert_annotated!(Customer, save() => DisplayMeta);
/// assert_annotated!(Customer, rename("x") == "Rename" => DisplayMeta);
/// ```
#[macro_export]
macro_rules! assert_annotated {
    ($ty:ty => $($kind:ty),+ $(,)?) => {
        $crate::__panic_on_failure(
            $crate::assert_has_annotations::<$ty>(&[$($crate::__kind::<$kind>()),+])
        )
    };
    ($ty:ty, $name:ident ( $($arg:expr),* ) == $expected:expr => $($kind:ty),+ $(,)?) => {
        $crate::__panic_on_failure($crate::assert_member_has_annotation_values(
            &$crate::__selector!($ty, $name($($arg),*)),
            $expected,
            &[$($crate::__kind::<$kind>()),+],
        ))
    };
    ($ty:ty, $name:ident ( $($arg:expr),* ) => $($kind:ty),+ $(,)?) => {
        $crate::__panic_on_failure($crate::assert_member_has_annotations(
            &$crate::__selector!($ty, $name($($arg),*)),
            &[$($crate::__kind::<$kind>()),+],
        ))
    };
    ($ty:ty, $name:ident == $expected:expr => $($kind:ty),+ $(,)?) => {
        $crate::__panic_on_failure($crate::assert_member_has_annotation_values(
            &$crate::__selector!($ty, $name),
            $expected,
            &[$($crate::__kind::<$kind>()),+],
        ))
    };
    ($ty:ty, $name:ident => $($kind:ty),+ $(,)?) => {
        $crate::__panic_on_failure($crate::assert_member_has_annotations(
            &$crate::__selector!($ty, $name),
            &[$($crate::__kind::<$kind>()),+],
        ))
    };
}

#[doc(hidden)]
#[track_caller]
pub fn __panic_on_failure(result: Result<(), annot_core::AnnotError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}
