pub mod builder;
pub mod criteria;
pub mod data;
