//! 视图层模块
//!
//! 纯函数：把 App 状态映射为两种画面（学习中 / 已完成）

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::state::App;
use components::{card_block, render_dialog_framework};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 进度
            Constraint::Min(9),    // 卡片
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    if app.session.completed {
        render_finished(frame, app, chunks[2]);
        render_finished_help(frame, chunks[3]);
    } else {
        render_progress(frame, app, chunks[1]);
        render_card(frame, app, chunks[2]);
        render_help(frame, app, chunks[3]);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📇 Karin's Diary 韩语单词卡")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let size = app.deck.size();
    let position = app.session.position;
    let ratio = (position + 1) as f64 / size as f64;
    let label = format!("第 {} / {} 张 · {:.0}%", position + 1, size, ratio * 100.0);

    let gauge = Gauge::default()
        .block(Block::default().title("进度").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let card_area = centered_rect(70, 90, area);
    let word = app.current_word();

    let (block, lines) = if app.session.revealed {
        // 答案面：韩文 + 重听提示
        let block = card_block(word.category, " Answer ", Color::Blue);
        let lines = vec![
            Line::from(Span::styled(
                word.back,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("韩文发音", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                "[r] 重听",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        (block, lines)
    } else {
        // 正面：英文提示
        let block = card_block(word.category, " Question ", Color::White);
        let lines = vec![
            Line::from(Span::styled(
                word.front,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "按 [空格] 翻面",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        (block, lines)
    };

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    // 垂直居中：上方补空行
    let pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    padded.extend(lines);

    let card = Paragraph::new(padded).centered();
    frame.render_widget(card, inner);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let at_first = app.session.position == 0;
    let at_last = app.session.position + 1 == app.deck.size();

    let prev_style = if at_first {
        // 第一张时「上一张」不可用，置灰
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    let next_label = if at_last {
        "[→/l] 完成  "
    } else {
        "[→/l] 下一张  "
    };

    let line = Line::from(vec![
        Span::styled("[空格] 翻面  ", Style::default().fg(Color::Gray)),
        Span::styled("[←/h] 上一张  ", prev_style),
        Span::styled(next_label, Style::default().fg(Color::Gray)),
        Span::styled("[r] 重听  ", Style::default().fg(Color::Gray)),
        Span::styled("[s] 重置  ", Style::default().fg(Color::Gray)),
        Span::styled("[q] 退出", Style::default().fg(Color::Gray)),
    ]);

    let help = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_finished(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(60, 80, area);
    let inner = render_dialog_framework(frame, dialog_area, " 🎉 全部完成 ", Color::Green);

    let lines = vec![
        Line::from(Span::styled(
            "수고하셨습니다!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("你已学完全部 {} 个单词", app.deck.size())),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] 再来一遍",
            Style::default().fg(Color::Gray),
        )),
    ];

    let pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    padded.extend(lines);

    let dialog = Paragraph::new(padded).centered();
    frame.render_widget(dialog, inner);
}

fn render_finished_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[Enter/s] 再来一遍  [q] 退出")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
