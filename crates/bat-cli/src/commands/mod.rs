pub mod fit;
pub mod scan;
