pub mod classifier;
pub mod probe;
pub mod ranking;
pub mod reconciler;
pub mod reference;
pub mod tag_selector;

pub use classifier::CompositionClassifier;
pub use reference::ImageReference;
pub use tag_selector::TagFilter;
