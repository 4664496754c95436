mod models;
mod speech;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::models::Deck;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 词表内嵌，语音引擎在 PATH 上探测（探测不到则静默降级）
    let deck = Deck::builtin();
    let synth = speech::create_synth();

    // 创建应用状态
    let mut app = App::new(deck, synth);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // 退出前打断还在播放的语音
    app.synth.cancel();

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // 带超时轮询：没有按键时也要让挂起的换卡到期生效
        if crossterm::event::poll(Duration::from_millis(50))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    if ui::handle_key_event(app, key.code)? {
                        break;
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
