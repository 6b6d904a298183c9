mod component;
mod frame;
mod render;
mod state;

pub use component::Graph3DCanvas;
