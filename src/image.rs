use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use image::{ColorType, DynamicImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// A raster image resource. JPEG files that are already in a PDF-compatible
/// colour space are embedded as-is; everything else is decoded and
/// re-compressed with zlib, with the alpha channel (if any) split off into
/// a soft mask.
pub enum RasterImageType {
    DirectlyEmbeddableJpeg(PathBuf),
    Image(DynamicImage),
}

pub struct Image {
    pub image: RasterImageType,
    /// Pixel width of the source image
    pub width: f32,
    /// Pixel height of the source image
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load an image from disk, guessing the format from its contents.
    /// I/O failures are reported as [image::ImageError::IoError] so that a
    /// missing or unreadable file and an undecodable file surface the same
    /// way to callers that treat the image as optional.
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(image::ImageError::IoError)?;

        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let width = image.width() as f32;
                let height = image.height() as f32;

                Ok(Image {
                    image: RasterImageType::DirectlyEmbeddableJpeg(path.to_owned()),
                    width,
                    height,
                })
            }
            _ => Ok(Self::new_raster(image)),
        }
    }

    /// Wrap an already-decoded image
    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            image: RasterImageType::Image(image),
            width,
            height,
        }
    }

    /// Compute the largest rectangle with this image's aspect ratio that
    /// fits inside `bounds`, centred within it.
    pub fn fit_within(&self, bounds: &Rect) -> Rect {
        let bw: f32 = bounds.width().into();
        let bh: f32 = bounds.height().into();
        let scale = f32::min(bw / self.width, bh / self.height);
        // guard against a scaled dimension landing an ulp outside the box
        let w = f32::min(self.width * scale, bw);
        let h = f32::min(self.height * scale, bh);
        let x1 = f32::from(bounds.x1) + (bw - w) / 2.0;
        let y1 = f32::from(bounds.y1) + (bh - h) / 2.0;
        Rect {
            x1: Pt(x1),
            y1: Pt(y1),
            x2: Pt(x1 + w),
            y2: Pt(y1 + h),
        }
    }

    fn encode(&self) -> Result<EncodeOutput, PDFError> {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path).map_err(image::ImageError::IoError)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            RasterImageType::Image(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = &mask_id {
            image.s_mask(*mask_id);
        }

        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_preserves_aspect_ratio_and_centres() {
        let image = Image::new_raster(DynamicImage::new_rgb8(200, 100));
        let bounds = Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: Pt(100.0),
            y2: Pt(100.0),
        };
        let fitted = image.fit_within(&bounds);
        assert_eq!(fitted.width(), Pt(100.0));
        assert_eq!(fitted.height(), Pt(50.0));
        assert_eq!(fitted.y1, Pt(25.0));
        assert!(bounds.contains(&fitted));
    }

    #[test]
    fn fit_never_escapes_the_bounds() {
        let image = Image::new_raster(DynamicImage::new_rgba8(37, 91));
        let bounds = Rect {
            x1: Pt(234.0),
            y1: Pt(648.0),
            x2: Pt(378.0),
            y2: Pt(756.0),
        };
        assert!(bounds.contains(&image.fit_within(&bounds)));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let result = Image::new_from_disk("definitely-not-here.png");
        assert!(matches!(result, Err(PDFError::Image(_))));
    }
}
