pub mod backprop;

pub use backprop::train;
