//! Zero-argument deferred calls.
//!
//! [`make_thunk`] binds a function to a tuple of arguments and hands back a
//! [`Thunk`]. Nothing runs until [`Thunk::call`], and every call runs the
//! function again with a fresh clone of the bound arguments. Results are
//! not cached.
//!
//! # Examples
//!
//! ```
//! use poly_util::thunk::make_thunk;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let thunk = make_thunk(add, (2, 3));
//! assert_eq!(thunk.call(), 5);
//! assert_eq!(thunk.call(), 5);
//! ```

use crate::value::{Func, Value};
use std::fmt;
use std::rc::Rc;

/// A function that can be applied to a tuple of arguments.
///
/// Implemented for every `Fn` of up to four parameters.
pub trait Callable<Args> {
    type Output;

    fn apply(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Callable<($($arg,)*)> for F
        where
            F: Fn($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn apply(&self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);

pub struct Thunk<'a, R> {
    f: Rc<dyn Fn() -> R + 'a>,
}

impl<'a, R> Thunk<'a, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> R + 'a,
    {
        Self { f: Rc::new(f) }
    }

    /// Runs the deferred call.
    pub fn call(&self) -> R {
        (self.f)()
    }
}

impl<R> Clone for Thunk<'_, R> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<R> fmt::Debug for Thunk<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk")
    }
}

/// Binds `f` to `args`, returning a thunk that calls `f(args...)`.
pub fn make_thunk<'a, F, Args>(f: F, args: Args) -> Thunk<'a, F::Output>
where
    F: Callable<Args> + 'a,
    Args: Clone + 'a,
{
    Thunk::new(move || f.apply(args.clone()))
}

/// A `'static` thunk becomes a function value that ignores its arguments.
impl<R> From<Thunk<'static, R>> for Value
where
    R: Into<Value> + 'static,
{
    fn from(thunk: Thunk<'static, R>) -> Self {
        Value::Function(Func::new(move |_| thunk.call().into()))
    }
}
