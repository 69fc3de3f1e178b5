//! Selectable menu entries

use sprig_core::{Color, TextAlign, Vec2};
use sprig_render::{Font, SpriteBatch};
use std::fmt;
use std::sync::Arc;

use crate::context::ScreenContext;

/// Callback run when a menu item is selected. It receives the owning
/// screen's context, so it can push screens or make host requests without
/// the item knowing anything about game state.
pub type SelectCallback = Box<dyn FnMut(&mut ScreenContext)>;

/// A labelled entry that can raise a single selection event.
///
/// Focus and highlighting are the owning screen's business; the item only
/// knows how to draw itself and how to dispatch its callback.
pub struct MenuItem {
    label: String,
    font: Option<Arc<Font>>,
    color: Color,
    alpha: f32,
    position: Vec2,
    text_offset: Vec2,
    text_align: TextAlign,
    is_displayed: bool,
    on_select: Option<SelectCallback>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            font: None,
            color: Color::WHITE,
            alpha: 1.0,
            position: Vec2::ZERO,
            text_offset: Vec2::ZERO,
            text_align: TextAlign::Left,
            is_displayed: true,
            on_select: None,
        }
    }

    /// Builder form of [`MenuItem::set_select_callback`]
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ScreenContext) + 'static,
    {
        self.set_select_callback(callback);
        self
    }

    pub fn set_select_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut ScreenContext) + 'static,
    {
        self.on_select = Some(Box::new(callback));
    }

    pub fn clear_select_callback(&mut self) {
        self.on_select = None;
    }

    pub fn has_select_callback(&self) -> bool {
        self.on_select.is_some()
    }

    /// Run the bound callback once with `ctx`. Does nothing when unbound.
    pub fn select(&mut self, ctx: &mut ScreenContext) {
        if let Some(callback) = self.on_select.as_mut() {
            callback(ctx);
        }
    }

    /// Record the label. Skipped when the label is empty or no font is bound.
    pub fn draw(&self, batch: &mut SpriteBatch) {
        let Some(font) = &self.font else {
            return;
        };
        if self.label.is_empty() {
            return;
        }
        batch.draw_string(
            font,
            &self.label,
            self.position + self.text_offset,
            self.color * self.alpha,
            self.text_align,
        );
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn font(&self) -> Option<&Arc<Font>> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Arc<Font>) {
        self.font = Some(font);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Opacity multiplier, clamped to 0..1
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn text_offset(&self) -> Vec2 {
        self.text_offset
    }

    pub fn set_text_offset(&mut self, offset: Vec2) {
        self.text_offset = offset;
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    pub fn is_displayed(&self) -> bool {
        self.is_displayed
    }

    pub fn set_displayed(&mut self, displayed: bool) {
        self.is_displayed = displayed;
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("color", &self.color)
            .field("alpha", &self.alpha)
            .field("position", &self.position)
            .field("text_align", &self.text_align)
            .field("is_displayed", &self.is_displayed)
            .field("has_select_callback", &self.on_select.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HostRequest;
    use sprig_render::DrawCommand;
    use std::cell::Cell;
    use std::rc::Rc;

    fn font() -> Arc<Font> {
        Arc::new(Font::new("mono", 8, 16))
    }

    #[test]
    fn defaults() {
        let item = MenuItem::new("Start");
        assert_eq!(item.label(), "Start");
        assert_eq!(item.alpha(), 1.0);
        assert_eq!(item.text_align(), TextAlign::Left);
        assert_eq!(item.color(), Color::WHITE);
        assert!(item.is_displayed());
        assert!(item.font().is_none());
        assert!(!item.has_select_callback());
    }

    #[test]
    fn select_without_callback_is_noop() {
        let mut item = MenuItem::new("Options");
        let mut ctx = ScreenContext::new();
        item.select(&mut ctx);
        item.select(&mut ctx);
        assert_eq!(ctx.pending(), 0);
        assert_eq!(item.label(), "Options");
    }

    #[test]
    fn select_invokes_callback_once_with_context() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut item = MenuItem::new("Quit").on_select(move |ctx| {
            seen.set(seen.get() + 1);
            ctx.quit_game();
        });

        let mut ctx = ScreenContext::new();
        item.select(&mut ctx);
        assert_eq!(calls.get(), 1);
        assert_eq!(ctx.host_requests(), vec![HostRequest::Quit]);
    }

    #[test]
    fn cleared_callback_stops_dispatch() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut item = MenuItem::new("Once").on_select(move |_| seen.set(seen.get() + 1));
        item.clear_select_callback();
        item.select(&mut ScreenContext::new());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_label_never_draws() {
        let mut item = MenuItem::new("");
        item.set_font(font());
        let mut batch = SpriteBatch::new(640, 480);
        batch.begin();
        item.draw(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn missing_font_never_draws() {
        let item = MenuItem::new("Play");
        let mut batch = SpriteBatch::new(640, 480);
        batch.begin();
        item.draw(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn draw_scales_color_by_alpha_and_applies_offset() {
        let mut item = MenuItem::new("Play");
        item.set_font(font());
        item.set_color(Color::new(1.0, 0.5, 0.0, 1.0));
        item.set_alpha(0.5);
        item.set_position(Vec2::new(10.0, 20.0));
        item.set_text_offset(Vec2::new(5.0, 5.0));

        let mut batch = SpriteBatch::new(640, 480);
        batch.begin();
        item.draw(&mut batch);
        assert_eq!(batch.len(), 1);
        match &batch.commands()[0] {
            DrawCommand::Text {
                text,
                position,
                color,
                ..
            } => {
                assert_eq!(text, "Play");
                assert_eq!(*position, Vec2::new(15.0, 25.0));
                assert_eq!(*color, Color::new(0.5, 0.25, 0.0, 0.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn alpha_is_clamped() {
        let mut item = MenuItem::new("x");
        item.set_alpha(3.0);
        assert_eq!(item.alpha(), 1.0);
        item.set_alpha(-1.0);
        assert_eq!(item.alpha(), 0.0);
    }
}
