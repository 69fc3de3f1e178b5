//! Vertical keyboard-driven menu

use sprig_core::{Color, GameTime, InputState, Key, TextAlign, Vec2};
use sprig_render::{Font, SpriteBatch};
use std::sync::Arc;

use crate::context::ScreenContext;
use crate::menu_item::MenuItem;
use crate::screen::Screen;

/// A list of [`MenuItem`]s laid out top to bottom.
///
/// Up/Down move the selection over displayed items (wrapping), Enter or
/// Space selects, Escape exits the screen when `cancel_exits` is set.
pub struct MenuScreen {
    name: String,
    items: Vec<MenuItem>,
    selected: usize,
    font: Option<Arc<Font>>,
    /// Anchor of the first item
    pub origin: Vec2,
    /// Vertical distance between consecutive items
    pub spacing: f32,
    pub normal_color: Color,
    pub selected_color: Color,
    pub align: TextAlign,
    pub cancel_exits: bool,
}

impl MenuScreen {
    pub fn new(name: impl Into<String>, origin: Vec2) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            selected: 0,
            font: None,
            origin,
            spacing: 40.0,
            normal_color: Color::WHITE,
            selected_color: Color::YELLOW,
            align: TextAlign::Center,
            cancel_exits: false,
        }
    }

    /// Font applied to every item, including ones added later
    pub fn set_font(&mut self, font: Arc<Font>) {
        for item in &mut self.items {
            item.set_font(Arc::clone(&font));
        }
        self.font = Some(font);
    }

    pub fn add_item(&mut self, mut item: MenuItem) {
        if let Some(font) = &self.font {
            item.set_font(Arc::clone(font));
        }
        self.items.push(item);
        self.layout();
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the selection `step` displayed items forward or back, wrapping.
    /// A step of 0 keeps the selection unless it sits on a hidden item, in
    /// which case it moves to the next displayed one.
    pub fn move_selection(&mut self, step: isize) {
        let displayed = self.items.iter().filter(|i| i.is_displayed()).count();
        if displayed == 0 {
            return;
        }
        let current = self.selected.min(self.items.len() - 1);
        let direction = if step < 0 { -1 } else { 1 };

        let mut moves = step.unsigned_abs() % displayed;
        if moves == 0 && !self.items[current].is_displayed() {
            moves = displayed;
        }

        let mut index = current;
        for _ in 0..moves {
            index = self.next_displayed(index, direction);
        }
        self.selected = index;
    }

    /// First displayed item after `from` in `direction`, at most one lap away
    fn next_displayed(&self, from: usize, direction: isize) -> usize {
        let len = self.items.len() as isize;
        let mut index = from as isize;
        for _ in 0..len {
            index = (index + direction).rem_euclid(len);
            if self.items[index as usize].is_displayed() {
                break;
            }
        }
        index as usize
    }

    /// Select the currently highlighted item
    pub fn select_current(&mut self, ctx: &mut ScreenContext) {
        if let Some(item) = self.items.get_mut(self.selected) {
            if item.is_displayed() {
                item.select(ctx);
            }
        }
    }

    /// Position displayed items and apply highlight colors
    fn layout(&mut self) {
        let mut row = 0.0;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_text_align(self.align);
            item.set_color(if index == self.selected {
                self.selected_color
            } else {
                self.normal_color
            });
            if item.is_displayed() {
                item.set_position(self.origin + Vec2::new(0.0, row * self.spacing));
                row += 1.0;
            }
        }
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext) {
        if input.is_key_just_pressed(Key::Up) {
            self.move_selection(-1);
        }
        if input.is_key_just_pressed(Key::Down) {
            self.move_selection(1);
        }
        if input.is_key_just_pressed(Key::Enter) || input.is_key_just_pressed(Key::Space) {
            self.select_current(ctx);
        }
        if self.cancel_exits && input.is_key_just_pressed(Key::Escape) {
            ctx.exit_screen();
        }
    }

    fn update(&mut self, _time: &GameTime, _ctx: &mut ScreenContext) {
        self.layout();
    }

    fn draw(&mut self, batch: &mut SpriteBatch) {
        for item in self.items.iter().filter(|i| i.is_displayed()) {
            item.draw(batch);
        }
    }
}
