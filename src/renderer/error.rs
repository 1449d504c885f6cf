use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RendererError {
    #[error("Window creation failed: {0}")]
    WindowCreation(#[from] glutin::CreationError),
    #[error("OpenGL context initialization failed: {0}")]
    ContextInit(#[from] glutin::ContextError),
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("Shader program linking failed: {log}")]
    ShaderLink { log: String },
    #[error("Failed to decode texture {path}: {source}")]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(u8),
    #[error("OpenGL object allocation failed: {0}")]
    Allocation(String),
}

#[cfg(test)]
mod tests {
    use super::{RendererError, ShaderStage};

    #[test]
    fn compile_errors_carry_stage_and_log() {
        let err = RendererError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:12: 'norm' : undeclared identifier".into(),
        };
        let message = err.to_string();
        assert!(message.contains("fragment"));
        assert!(message.contains("undeclared identifier"));
    }

    #[test]
    fn link_errors_carry_log() {
        let err = RendererError::ShaderLink {
            log: "error: unresolved symbol".into(),
        };
        assert!(err.to_string().contains("unresolved symbol"));
    }

    #[test]
    fn decode_errors_carry_path() {
        let source = image::load_from_memory(&[0u8; 4]).unwrap_err();
        let err = RendererError::TextureDecode {
            path: "resources/book_pages.png".into(),
            source,
        };
        assert!(err.to_string().contains("resources/book_pages.png"));
    }

    #[test]
    fn channel_count_errors_name_the_count() {
        let err = RendererError::UnsupportedChannelCount(2);
        assert!(err.to_string().contains('2'));
    }
}
