pub mod lefs;
pub mod ndi;
pub mod odi;
pub mod quickdash;
pub mod rpq;
