//! Bridge between actors and the host renderer.
//!
//! Actors never talk to macroquad directly. They describe what to paint with
//! [`DrawParams`] and hand it to a [`Canvas`]; [`MacroquadCanvas`] is the
//! implementation used by the game loop.

use std::collections::HashMap;

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex, load_texture};
use macroquad::window::{screen_height, screen_width};
use serde::{Deserialize, Serialize};

use super::error::StageError;

/// Handle to a bitmap known to the renderer.
///
/// The handle carries the bitmap's natural size so actors can be sized from
/// it without touching the graphics context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    key: String,
    width: f32,
    height: f32,
}

impl Image {
    /// Creates a handle for the texture registered under `key`.
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// Key the texture is registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Natural width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Placement of one bitmap on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// World-space X of the bitmap's centre.
    pub x: f32,
    /// World-space Y of the bitmap's centre.
    pub y: f32,
    /// Rotation about the centre, in radians.
    pub rotation: f32,
    /// Destination width.
    pub width: f32,
    /// Destination height.
    pub height: f32,
    /// Tint alpha in the range 0 - 255.
    pub opacity: f32,
}

/// Draw primitive consumed by actors.
pub trait Canvas {
    /// Paints `image` rotated, scaled and tinted as described by `params`.
    fn draw_image(&mut self, image: &Image, params: &DrawParams);
}

/// [`Canvas`] backed by macroquad textures.
///
/// World coordinates are scaled uniformly onto the screen, see [`Self::fit`].
pub struct MacroquadCanvas {
    textures: HashMap<String, Texture2D>,
    scale: f32,
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadCanvas {
    /// Creates a canvas with no textures and a 1:1 scale.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            scale: 1.0,
        }
    }

    /// Registers an already created texture and returns its handle.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) -> Image {
        let image = Image::new(key, texture.width(), texture.height());
        self.textures.insert(image.key.clone(), texture);
        image
    }

    /// Loads a texture from disk and registers it under `key`.
    pub async fn load(&mut self, key: impl Into<String>, path: &str) -> Result<Image, StageError> {
        let texture = load_texture(path).await.map_err(|e| StageError::Texture {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.insert(key, texture))
    }

    /// Chooses the scale so a `width` x `height` world fits the window.
    pub fn fit(&mut self, width: f32, height: f32) {
        let scale_x = screen_width() / width;
        let scale_y = screen_height() / height;
        self.scale = scale_x.min(scale_y);
    }

    /// Current world-to-screen scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts a screen position back into world coordinates.
    pub fn to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x / self.scale, screen_y / self.scale)
    }
}

impl Canvas for MacroquadCanvas {
    fn draw_image(&mut self, image: &Image, params: &DrawParams) {
        let Some(texture) = self.textures.get(image.key()) else {
            log::debug!("no texture registered for {}", image.key());
            return;
        };

        let width = params.width * self.scale;
        let height = params.height * self.scale;
        // macroquad rotates about the centre of the destination rectangle.
        draw_texture_ex(
            texture,
            params.x * self.scale - width / 2.0,
            params.y * self.scale - height / 2.0,
            Color::new(1.0, 1.0, 1.0, params.opacity / 255.0),
            DrawTextureParams {
                dest_size: Some(vec2(width, height)),
                rotation: params.rotation,
                ..Default::default()
            },
        );
    }
}
