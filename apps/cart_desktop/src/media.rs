//! Thumbnail decoding for line item images.

pub const THUMBNAIL_MAX_EDGE: u32 = 96;

#[derive(Clone)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_thumbnail(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let fits = dynamic.width() <= THUMBNAIL_MAX_EDGE && dynamic.height() <= THUMBNAIL_MAX_EDGE;
    let resized = if fits {
        dynamic.to_rgba8()
    } else {
        dynamic
            .thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
            .to_rgba8()
    };
    Ok(PreviewImage {
        width: resized.width() as usize,
        height: resized.height() as usize,
        rgba: resized.into_raw(),
    })
}
