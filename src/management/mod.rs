mod drops;

pub use drops::DropStore;
