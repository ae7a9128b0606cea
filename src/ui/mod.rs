pub mod menu;
pub mod renderer;
pub mod scene;
pub mod text;

pub use menu::MenuOverlay;
pub use renderer::{RendererError, SceneRenderer};
pub use scene::{Badge, Scene, SceneStroke, StrokeKind};
pub use text::{LabelError, LabelFont};
