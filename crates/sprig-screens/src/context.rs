//! Requests raised by screens during input and update

use crate::screen::Screen;

/// Requests that only the game host can carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Stop the game loop at the next loop boundary
    Quit,
    /// Switch between windowed and fullscreen
    ToggleFullScreen,
}

pub(crate) enum ScreenCommand {
    Push(Box<dyn Screen>),
    Exit(usize),
    Host(HostRequest),
}

/// Handed to screens and menu callbacks. Nothing takes effect immediately:
/// the screen manager applies queued commands after the current pass, so a
/// screen never sees the stack change under it mid-update.
#[derive(Default)]
pub struct ScreenContext {
    commands: Vec<ScreenCommand>,
    /// Stack index of the screen currently being called
    current: usize,
}

impl ScreenContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }

    /// Push a new screen on top of the stack
    pub fn push_screen<S: Screen + 'static>(&mut self, screen: S) {
        self.commands.push(ScreenCommand::Push(Box::new(screen)));
    }

    /// Remove the calling screen from the stack
    pub fn exit_screen(&mut self) {
        self.commands.push(ScreenCommand::Exit(self.current));
    }

    /// Ask the host to stop the game
    pub fn quit_game(&mut self) {
        self.commands.push(ScreenCommand::Host(HostRequest::Quit));
    }

    /// Ask the host to toggle fullscreen
    pub fn toggle_full_screen(&mut self) {
        self.commands
            .push(ScreenCommand::Host(HostRequest::ToggleFullScreen));
    }

    /// Number of queued, not yet applied commands
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Queued host requests, in order, without draining them
    pub fn host_requests(&self) -> Vec<HostRequest> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ScreenCommand::Host(req) => Some(*req),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn take_commands(&mut self) -> Vec<ScreenCommand> {
        std::mem::take(&mut self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_records_calling_screen() {
        let mut ctx = ScreenContext::new();
        ctx.set_current(3);
        ctx.exit_screen();
        match ctx.take_commands().as_slice() {
            [ScreenCommand::Exit(3)] => {}
            _ => panic!("expected a single exit for screen 3"),
        }
        assert_eq!(ctx.pending(), 0);
    }

    #[test]
    fn host_requests_keep_order() {
        let mut ctx = ScreenContext::new();
        ctx.toggle_full_screen();
        ctx.quit_game();
        assert_eq!(
            ctx.host_requests(),
            vec![HostRequest::ToggleFullScreen, HostRequest::Quit]
        );
        assert_eq!(ctx.pending(), 2);
    }
}
