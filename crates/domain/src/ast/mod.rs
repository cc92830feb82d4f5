pub mod comparison;
pub mod composite;
pub mod custom;
pub mod expr;
pub mod operator;
