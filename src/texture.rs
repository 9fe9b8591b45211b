use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{CARD_BACKGROUND, CARD_WIDTH_PX, IMAGE_BAND_PX, TITLE_BAND_PX, TITLE_FONT_MAX_PX};

/// RGBA pixels of a rasterized card face, ready for texture upload.
pub struct CardRaster {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterize a card face on a detached 2D canvas: title band on top (font
/// shrinks until the title fits the card width), thumbnail aspect-fit in the
/// image band below.
pub async fn rasterize_card(
    document: &web::Document,
    title: &str,
    image_url: Option<&str>,
) -> Result<CardRaster> {
    let width = CARD_WIDTH_PX;
    let height = TITLE_BAND_PX + IMAGE_BAND_PX;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("2d context: {e:?}"))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;

    ctx.set_fill_style_str(CARD_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    if let Some(url) = image_url {
        let image = load_image(url).await?;
        // Fit the thumbnail to the image band, preserving aspect.
        let (iw, ih) = (image.width() as f64, image.height() as f64);
        let mut w = width as f64;
        let mut h = ih * w / iw.max(1.0);
        if h > IMAGE_BAND_PX as f64 {
            h = IMAGE_BAND_PX as f64;
            w = iw * h / ih.max(1.0);
        }
        let x = (width as f64 - w) * 0.5;
        let y = TITLE_BAND_PX as f64 + (IMAGE_BAND_PX as f64 - h) * 0.5;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(&image, x, y, w, h)
            .map_err(|e| anyhow!("draw thumbnail: {e:?}"))?;
    }

    ctx.set_fill_style_str("#000000");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let mut size = TITLE_FONT_MAX_PX;
    loop {
        ctx.set_font(&format!("{size}px sans-serif"));
        let fits = ctx
            .measure_text(title)
            .map(|m| m.width() <= width as f64)
            .unwrap_or(true);
        if fits || size <= 1 {
            break;
        }
        size -= 1;
    }
    ctx.fill_text(title, width as f64 * 0.5, TITLE_BAND_PX as f64 * 0.5)
        .map_err(|e| anyhow!("draw title: {e:?}"))?;

    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow!("read raster: {e:?}"))?;
    Ok(CardRaster {
        pixels: data.data().0,
        width,
        height,
    })
}

/// Load an image element, resolving once it is decodable.
async fn load_image(url: &str) -> Result<web::HtmlImageElement> {
    let image = web::HtmlImageElement::new().map_err(|e| anyhow!("create image: {e:?}"))?;
    image.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|e: JsValue| anyhow!("image load {url}: {e:?}"))?;
    Ok(image)
}
