use std::path::Path;
use std::rc::Rc;

use glow::HasContext;
use image::GenericImageView;

use super::error::RendererError;

/// Border color used by [`WrapMode::ClampToBorder`]; magenta, so out-of-range
/// sampling is visually obvious.
const BORDER_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// GPU sampling policy for texture coordinates outside [0, 1].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

impl WrapMode {
    pub(crate) fn gl_enum(self) -> u32 {
        match self {
            WrapMode::Repeat => glow::REPEAT,
            WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
            WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
            WrapMode::ClampToBorder => glow::CLAMP_TO_BORDER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WrapMode::Repeat => "REPEAT",
            WrapMode::MirroredRepeat => "MIRRORED REPEAT",
            WrapMode::ClampToEdge => "CLAMP TO EDGE",
            WrapMode::ClampToBorder => "CLAMP TO BORDER",
        }
    }
}

/// Upload formats for a decoded image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct TexelLayout {
    pub internal_format: u32,
    pub format: u32,
    pub channels: u8,
}

/// Maps a decoded color type onto GL upload formats; 8-bit RGB and RGBA only.
pub(crate) fn texel_layout(color: image::ColorType) -> Result<TexelLayout, RendererError> {
    match color {
        image::ColorType::Rgb8 => Ok(TexelLayout {
            internal_format: glow::RGB8,
            format: glow::RGB,
            channels: 3,
        }),
        image::ColorType::Rgba8 => Ok(TexelLayout {
            internal_format: glow::RGBA8,
            format: glow::RGBA,
            channels: 4,
        }),
        other => Err(RendererError::UnsupportedChannelCount(
            other.channel_count(),
        )),
    }
}

/// Reverses the row order of a tightly-packed pixel buffer in place.
///
/// Decoded images put row 0 at the top; GL samples with row 0 at the bottom.
pub fn flip_vertically(pixels: &mut [u8], width: usize, height: usize, channels: usize) {
    let row_len = width * channels;
    debug_assert_eq!(pixels.len(), row_len * height);
    for row in 0..height / 2 {
        let top = row * row_len;
        let bottom = (height - 1 - row) * row_len;
        for i in 0..row_len {
            pixels.swap(top + i, bottom + i);
        }
    }
}

/// A mipmapped 2D texture. Wrap mode is the only state that may change after
/// creation.
pub struct Texture2D {
    gl: Rc<glow::Context>,
    texture: glow::NativeTexture,
}

impl Texture2D {
    /// Decodes an image file, flips it to GL row order, and uploads it with
    /// linear filtering, REPEAT wrap, and generated mipmaps.
    pub fn from_file<P: AsRef<Path>>(
        gl: Rc<glow::Context>,
        path: P,
    ) -> Result<Self, RendererError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RendererError::TextureDecode {
            path: path.to_path_buf(),
            source,
        })?;

        let layout = texel_layout(decoded.color())?;
        let (width, height) = decoded.dimensions();
        let mut pixels = decoded.to_bytes();
        flip_vertically(
            &mut pixels,
            width as usize,
            height as usize,
            layout.channels as usize,
        );

        let texture = unsafe { gl.create_texture() }.map_err(RendererError::Allocation)?;
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            // RGB rows are not 4-byte aligned for every width
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                layout.internal_format as i32,
                width as i32,
                height as i32,
                0,
                layout.format,
                glow::UNSIGNED_BYTE,
                Some(&pixels),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        Ok(Self { gl, texture })
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    /// Re-parameterizes both wrap axes. ClampToBorder also installs the
    /// border color.
    pub fn set_wrap(&self, mode: WrapMode) {
        unsafe {
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
            if mode == WrapMode::ClampToBorder {
                self.gl.tex_parameter_f32_slice(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_BORDER_COLOR,
                    &BORDER_COLOR,
                );
            }
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, mode.gl_enum() as i32);
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, mode.gl_enum() as i32);
            self.gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe { self.gl.delete_texture(self.texture) };
    }
}

#[cfg(test)]
mod tests {
    use super::{flip_vertically, texel_layout, RendererError};

    #[test]
    fn flip_reverses_row_order() {
        // 2x3 image, 3 channels; each row filled with its own index
        let mut pixels: Vec<u8> = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2];
        flip_vertically(&mut pixels, 2, 3, 3);
        assert_eq!(
            pixels,
            vec![2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn double_flip_is_identity() {
        let original: Vec<u8> = (0u8..64).collect();
        let mut pixels = original.clone();
        flip_vertically(&mut pixels, 4, 4, 4);
        assert_ne!(pixels, original);
        flip_vertically(&mut pixels, 4, 4, 4);
        assert_eq!(pixels, original);
    }

    #[test]
    fn double_flip_is_identity_for_odd_heights() {
        let original: Vec<u8> = (0u8..30).collect();
        let mut pixels = original.clone();
        flip_vertically(&mut pixels, 2, 5, 3);
        flip_vertically(&mut pixels, 2, 5, 3);
        assert_eq!(pixels, original);
    }

    #[test]
    fn rgb_and_rgba_layouts_are_supported() {
        assert_eq!(texel_layout(image::ColorType::Rgb8).unwrap().channels, 3);
        assert_eq!(texel_layout(image::ColorType::Rgba8).unwrap().channels, 4);
    }

    #[test]
    fn bundled_images_decode_to_supported_layouts() {
        use image::GenericImageView;
        // the decode half of startup: both image files must open and land in
        // an uploadable layout
        for path in &["resources/book_pages.png", "resources/brick.png"] {
            let decoded = image::open(path).unwrap();
            let layout = texel_layout(decoded.color()).unwrap();
            let (width, height) = decoded.dimensions();
            assert!(width > 0 && height > 0, "{}: empty image", path);
            assert_eq!(
                decoded.to_bytes().len(),
                (width * height * u32::from(layout.channels)) as usize,
                "{}: decoded buffer is not tightly packed",
                path
            );
        }
    }

    #[test]
    fn bundled_images_are_distinct() {
        let page = image::open("resources/book_pages.png").unwrap().to_bytes();
        let brick = image::open("resources/brick.png").unwrap().to_bytes();
        assert_ne!(page, brick);
    }

    #[test]
    fn other_channel_counts_are_rejected() {
        match texel_layout(image::ColorType::L8) {
            Err(RendererError::UnsupportedChannelCount(1)) => {}
            other => panic!("expected UnsupportedChannelCount(1), got {:?}", other.map(|_| ())),
        }
        match texel_layout(image::ColorType::La8) {
            Err(RendererError::UnsupportedChannelCount(2)) => {}
            other => panic!("expected UnsupportedChannelCount(2), got {:?}", other.map(|_| ())),
        }
    }
}
