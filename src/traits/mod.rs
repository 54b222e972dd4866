pub mod num_impls;
pub mod std_ops;
