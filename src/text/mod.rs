// Text normalization shared by the crisis detector and keyword scorer

mod preprocess;

pub use preprocess::preprocess;
