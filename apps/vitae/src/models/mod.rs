pub mod cv;

pub use cv::Cv;
