use thiserror::Error;

/// Fatal bootstrap failures of the window + GL context layer.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to initialize the windowing system")]
    WindowingInit(#[source] winit::error::EventLoopError),

    #[error("failed to create window")]
    WindowCreation(#[source] winit::error::OsError),

    #[error("failed to obtain a native window handle")]
    WindowHandle(#[source] raw_window_handle::HandleError),

    #[error("no suitable GL configuration: {0}")]
    Config(String),

    #[error("failed to create OpenGL {major}.{minor} context")]
    Context {
        major: u8,
        minor: u8,
        #[source]
        source: glutin::error::Error,
    },

    #[error("failed to create window surface")]
    Surface(#[source] glutin::error::Error),

    #[error("failed to make GL context current")]
    MakeCurrent(#[source] glutin::error::Error),
}
