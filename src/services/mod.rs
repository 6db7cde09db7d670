pub mod compound;
pub mod linear_search;
pub mod rate_model;
pub mod report;
