pub mod interpolator;

pub use interpolator::IdwInterpolator;
