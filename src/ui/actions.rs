//! Action 枚举定义 (Intent)
//!
//! 按键转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// 翻面：正面 <-> 答案面
    Flip,
    /// 下一张；在最后一张上是「完成」
    NextCard,
    /// 上一张；在第一张上无效果
    PrevCard,
    /// 回到第一张正面，清除完成状态
    Reset,
    /// 重听当前卡片的发音（仅答案面）
    Replay,
}
