pub mod chart;
pub mod dashboard;
pub mod point;
pub mod series;
pub mod statistics;
