pub mod overview;
pub mod panel;
pub mod scoring;
pub mod spawn;
pub mod toast;
