// Presentation layer - Display formatting handed to the renderer
pub mod format;
