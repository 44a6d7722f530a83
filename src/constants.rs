// Page hooks and render target settings for the web frontend.

// Element ids
pub const CONTAINER_ID: &str = "bg";
pub const NAVBAR_ID: &str = "navbar";

// Canvas
pub const CANVAS_CLASS: &str = "horizon-bg-canvas";
pub const CANVAS_STYLE: &str = "display:block;position:absolute;inset:0;";

// Render targets
pub const MSAA_SAMPLES: u32 = 4; // "antialias"; falls back to 1 when unsupported
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;
