mod leads;

pub use leads::*;
