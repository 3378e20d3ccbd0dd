mod atomic;
mod interface;
#[cfg(all(test, feature = "std"))]
mod tests;

pub use atomic::*;
pub use interface::*;
