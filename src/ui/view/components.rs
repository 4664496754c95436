//! 通用 UI 组件
//!
//! 卡片边框、弹窗等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear},
};

/// [组件] 卡片边框：左上角分类标签，右上角面别标签
pub fn card_block(category: &str, side_label: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(format!(" {} ", category)).left_aligned())
        .title(Line::from(side_label).right_aligned())
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
