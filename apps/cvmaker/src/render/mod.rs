pub mod escape;
pub mod layout;
pub mod sections;

// Re-export the surface export and main consume.
pub use layout::render_document;
