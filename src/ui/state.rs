//! App 状态定义 (Model)
//!
//! 会话状态只有三个字段，全部由 logic.rs 里的导航操作修改

use std::time::Instant;

use crate::models::{Deck, WordPair};
use crate::speech::Synth;

/// 会话状态：唯一的可变实体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// 当前卡片索引，始终落在 [0, deck.size()) 内
    pub position: usize,
    /// 当前卡片是否翻到了答案面
    pub revealed: bool,
    /// 是否已在最后一张卡上继续前进（进入完成画面）
    pub completed: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            position: 0,
            revealed: false,
            completed: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// 待生效的换卡动作
///
/// 换卡前先翻回正面，150ms 之后索引才真正变化（纯视觉缓冲）。
/// 挂起的换卡由事件循环 tick 结算；任何新输入到来时先行结算，
/// 两次换卡不会交错。
#[derive(Debug, Clone, Copy)]
pub struct PendingMove {
    /// 目标索引（入队时已算好，不受后续状态影响）
    pub target: usize,
    pub due: Instant,
}

/// 应用状态
pub struct App {
    pub deck: Deck,
    pub session: SessionState,
    pub pending: Option<PendingMove>,
    pub synth: Box<dyn Synth>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(deck: Deck, synth: Box<dyn Synth>) -> Self {
        Self {
            deck,
            session: SessionState::new(),
            pending: None,
            synth,
        }
    }

    /// 当前展示的卡片
    pub fn current_word(&self) -> &WordPair {
        self.deck.get(self.session.position)
    }
}
