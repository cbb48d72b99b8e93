pub mod duplicates;
pub mod episodes;
pub mod health;
pub mod instruments;
pub mod leads;
