mod core;

pub use self::core::Selection;
