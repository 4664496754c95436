//! 业务逻辑处理 (Update/Dispatch)
//!
//! 导航器：持有会话状态并执行合法迁移。所有操作对 SessionState
//! 都是全函数，没有错误路径；朗读请求作为副作用交给 synth

use std::time::{Duration, Instant};

use super::actions::Action;
use super::state::{App, PendingMove, SessionState};

/// 换卡前的视觉缓冲时长
const ADVANCE_DELAY: Duration = Duration::from_millis(150);

impl App {
    /// 核心逻辑分发。返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        // 新输入到来时先结算挂起的换卡，保证两次换卡不会交错
        self.settle_pending();

        match action {
            Action::Quit => return true,
            Action::Flip => self.flip(),
            Action::NextCard => self.next_card(),
            Action::PrevCard => self.prev_card(),
            Action::Reset => self.reset(),
            Action::Replay => self.replay(),
        }
        false
    }

    /// 事件循环每轮调用：到期的挂起换卡在这里生效
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending {
            if now >= pending.due {
                self.session.position = pending.target;
                self.pending = None;
            }
        }
    }

    /// 立即结算挂起的换卡（不等计时器到期）
    fn settle_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.session.position = pending.target;
        }
    }

    /// 翻面。翻到答案面时朗读韩文
    fn flip(&mut self) {
        self.session.revealed = !self.session.revealed;
        if self.session.revealed {
            let back = self.current_word().back;
            self.synth.speak(back);
        }
    }

    /// 下一张：先翻回正面，换卡延迟生效；已在最后一张则进入完成画面
    fn next_card(&mut self) {
        if self.session.position + 1 < self.deck.size() {
            self.session.revealed = false;
            self.pending = Some(PendingMove {
                target: self.session.position + 1,
                due: Instant::now() + ADVANCE_DELAY,
            });
        } else {
            self.session.completed = true;
        }
    }

    /// 上一张；已在第一张则什么都不发生
    fn prev_card(&mut self) {
        if self.session.position > 0 {
            self.session.revealed = false;
            self.pending = Some(PendingMove {
                target: self.session.position - 1,
                due: Instant::now() + ADVANCE_DELAY,
            });
        }
    }

    /// 回到初始状态
    fn reset(&mut self) {
        self.pending = None;
        self.session = SessionState::new();
    }

    /// 重听发音。仅在答案面有效
    fn replay(&mut self) {
        if self.session.revealed {
            let back = self.current_word().back;
            self.synth.speak(back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Deck, WordPair};
    use crate::speech::RecordingSynth;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TWO_WORDS: &[WordPair] = &[
        WordPair { front: "Home", back: "집", category: "Place" },
        WordPair { front: "Today", back: "오늘", category: "Time" },
    ];

    const THREE_WORDS: &[WordPair] = &[
        WordPair { front: "Home", back: "집", category: "Place" },
        WordPair { front: "Today", back: "오늘", category: "Time" },
        WordPair { front: "Cafe", back: "카페", category: "Place" },
    ];

    fn test_app(words: &'static [WordPair]) -> (App, Rc<RefCell<Vec<String>>>) {
        let (synth, log) = RecordingSynth::new();
        (App::new(Deck::new(words), Box::new(synth)), log)
    }

    /// 把挂起的换卡当作已到期结算掉
    fn settle(app: &mut App) {
        app.tick(Instant::now() + Duration::from_millis(200));
    }

    #[test]
    fn test_flip_twice_restores_revealed() {
        let (mut app, _log) = test_app(TWO_WORDS);
        assert!(!app.session.revealed);
        app.dispatch(Action::Flip);
        assert!(app.session.revealed);
        app.dispatch(Action::Flip);
        assert!(!app.session.revealed);
    }

    #[test]
    fn test_advance_to_completion() {
        let (mut app, _log) = test_app(THREE_WORDS);
        let size = app.deck.size();

        for _ in 0..size - 1 {
            app.dispatch(Action::NextCard);
            settle(&mut app);
        }
        assert_eq!(app.session.position, size - 1);
        assert!(!app.session.completed);

        app.dispatch(Action::NextCard);
        assert!(app.session.completed);
    }

    #[test]
    fn test_prev_at_start_is_noop() {
        let (mut app, _log) = test_app(TWO_WORDS);
        let before = app.session;
        app.dispatch(Action::PrevCard);
        settle(&mut app);
        assert_eq!(app.session, before);
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_advance_resets_revealed_before_move() {
        let (mut app, _log) = test_app(TWO_WORDS);
        app.dispatch(Action::Flip);
        app.dispatch(Action::NextCard);
        // 翻回正面立即生效，换卡要等计时器
        assert!(!app.session.revealed);
        assert_eq!(app.session.position, 0);
        settle(&mut app);
        assert_eq!(app.session.position, 1);
    }

    #[test]
    fn test_rapid_double_advance_does_not_interleave() {
        let (mut app, _log) = test_app(THREE_WORDS);
        // 第二次按键先结算第一次挂起的换卡，再排新的
        app.dispatch(Action::NextCard);
        app.dispatch(Action::NextCard);
        assert_eq!(app.session.position, 1);
        settle(&mut app);
        assert_eq!(app.session.position, 2);
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let (mut app, _log) = test_app(THREE_WORDS);
        app.dispatch(Action::NextCard);
        settle(&mut app);
        app.dispatch(Action::Flip);
        app.dispatch(Action::Reset);

        assert_eq!(app.session, SessionState::new());
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_reset_from_completed() {
        let (mut app, _log) = test_app(TWO_WORDS);
        app.dispatch(Action::NextCard);
        settle(&mut app);
        app.dispatch(Action::NextCard);
        assert!(app.session.completed);

        app.dispatch(Action::Reset);
        assert_eq!(app.session, SessionState::new());
    }

    #[test]
    fn test_flip_speaks_korean_side() {
        let (mut app, log) = test_app(TWO_WORDS);
        app.dispatch(Action::Flip);
        assert_eq!(*log.borrow(), vec!["집".to_string()]);
        // 翻回正面不再朗读
        app.dispatch(Action::Flip);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_replay_only_on_answer_side() {
        let (mut app, log) = test_app(TWO_WORDS);
        app.dispatch(Action::Replay);
        assert!(log.borrow().is_empty());

        app.dispatch(Action::Flip);
        app.dispatch(Action::Replay);
        assert_eq!(*log.borrow(), vec!["집".to_string(), "집".to_string()]);
    }

    #[test]
    fn test_speech_text_is_cleaned() {
        const ANNOTATED: &[WordPair] = &[WordPair {
            front: "Around / About",
            back: "-쯤",
            category: "Grammar",
        }];
        let (mut app, log) = test_app(ANNOTATED);
        app.dispatch(Action::Flip);
        assert_eq!(*log.borrow(), vec!["쯤".to_string()]);
    }

    /// 完整场景：两张卡从头走到完成再重置
    #[test]
    fn test_full_session_walkthrough() {
        let (mut app, log) = test_app(TWO_WORDS);

        app.dispatch(Action::Flip);
        assert!(app.session.revealed);
        assert_eq!(*log.borrow(), vec!["집".to_string()]);

        app.dispatch(Action::NextCard);
        settle(&mut app);
        assert_eq!(app.session.position, 1);
        assert!(!app.session.revealed);

        app.dispatch(Action::NextCard);
        assert!(app.session.completed);
        assert_eq!(app.deck.size(), 2);

        app.dispatch(Action::Reset);
        assert_eq!(app.session, SessionState::new());
    }

    #[test]
    fn test_quit_action() {
        let (mut app, _log) = test_app(TWO_WORDS);
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Flip));
    }
}
