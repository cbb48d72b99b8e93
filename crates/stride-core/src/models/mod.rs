pub mod audit;
pub mod episode;
pub mod identity;
pub mod lead;
