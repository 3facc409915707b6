pub mod direct;
pub mod fast;
pub mod no_transfer;
pub mod simple;
#[allow(clippy::module_inception)]
pub mod strategy;

pub use direct::Direct;
pub use fast::Fast;
pub use no_transfer::NoTransfer;
pub use simple::Simple;
pub use strategy::Strategy;

/// The four strategies in the fixed order the coordinator fans them out in.
pub fn all() -> [Box<dyn Strategy>; 4] {
    [
        Box::new(NoTransfer),
        Box::new(Direct),
        Box::new(Simple),
        Box::new(Fast),
    ]
}
