pub mod modal;
pub mod navigation;
