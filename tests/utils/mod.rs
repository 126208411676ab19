//! Utilities.
#![allow(dead_code)]

use core::fmt;

/// Returns true if the two equals after they are converted to strings.
pub(crate) fn eq_display_str<T>(d: &T, s: &str) -> bool
where
    T: ?Sized + fmt::Display,
{
    use core::fmt::Write as _;

    /// Dummy writer to compare the formatted object to the given string.
    struct CmpWriter<'a>(&'a str);
    impl fmt::Write for CmpWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.0.strip_prefix(s) {
                Some(rest) => {
                    self.0 = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut writer = CmpWriter(s);
    let succeeded = write!(writer, "{}", d).is_ok();
    succeeded && writer.0.is_empty()
}

/// Asserts that the value is formatted to the expected string, without
/// allocating the formatted string.
#[allow(unused_macros)]
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right.as_ref()),
                    "`eq_str_display(left, right)`\n  left: `{left}`,\n right: `{right}`",
                );
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right.as_ref()),
                    "{}",
                    format_args!(
                        "{}: {}",
                        format_args!(
                            "`eq_str_display(left, right)`\n  left: `{left}`,\n right: `{right}`",
                        ),
                        format_args!($($args)*)
                    )
                );
            }
        }
    }};
}
