//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action。学习画面和完成画面各有一套按键

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;

/// 根据当前画面和按键获取对应的 Action
pub fn get_action(completed: bool, key: KeyCode) -> Option<Action> {
    if completed {
        // 完成画面只有「再来一遍」和退出
        match key {
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    } else {
        match key {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Flip),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCard),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCard),
            KeyCode::Char('r') => Some(Action::Replay),
            KeyCode::Char('s') => Some(Action::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.session.completed, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
