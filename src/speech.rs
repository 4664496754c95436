//! 语音合成（发音朗读）
//!
//! 把韩文答案交给系统 TTS 引擎朗读。引擎作为一条能力接口抽象出来：
//! 启动时在 PATH 上探测可用的外部 TTS 命令，一个都没有时退化为
//! 静默空实现（无语音能力不算错误，界面照常可用）。

use std::process::{Child, Command, Stdio};

/// 朗读语速：正常语速按 175 wpm 计，压到 0.85 倍方便学习者听清
const ESPEAK_RATE_WPM: &str = "149";
const SAY_RATE_WPM: &str = "149";
/// spd-say 的语速是 -100..100 的相对值，-15 约等于 0.85 倍
const SPD_RATE_OFFSET: &str = "-15";

/// 语音能力接口
///
/// 同一时刻最多播放一条语音，新请求抢占旧请求。所有调用都是
/// fire-and-forget，失败静默吞掉，不向界面报错。
pub trait Synth {
    /// 清洗文本后发起一次朗读请求
    fn speak(&mut self, text: &str);
    /// 打断正在播放的语音
    fn cancel(&mut self);
    /// 声音列表是否已加载（惰性就绪信号，当前不用于界面门控）
    #[allow(dead_code)]
    fn is_ready(&self) -> bool;
}

/// 去掉语法标注符号：词表里用 '-' / '~' 标记黏着语素，读出来会干扰发音
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '-' && *c != '~')
        .collect::<String>()
        .trim()
        .to_string()
}

/// 支持的外部 TTS 引擎，按探测优先级排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    EspeakNg,
    Espeak,
    SpdSay,
    Say,
}

impl Engine {
    fn program(self) -> &'static str {
        match self {
            Engine::EspeakNg => "espeak-ng",
            Engine::Espeak => "espeak",
            Engine::SpdSay => "spd-say",
            Engine::Say => "say",
        }
    }

    /// 探测参数：既确认命令存在，也顺带确认声音列表可取
    fn probe_args(self) -> &'static [&'static str] {
        match self {
            Engine::EspeakNg | Engine::Espeak => &["--voices=ko"],
            Engine::SpdSay => &["--version"],
            Engine::Say => &["-v", "?"],
        }
    }

    /// 朗读参数（文本另行追加）：固定韩语标签 + 放慢的语速
    fn speak_args(self) -> &'static [&'static str] {
        match self {
            Engine::EspeakNg | Engine::Espeak => &["-v", "ko", "-s", ESPEAK_RATE_WPM],
            Engine::SpdSay => &["-l", "ko", "-r", SPD_RATE_OFFSET],
            Engine::Say => &["-r", SAY_RATE_WPM],
        }
    }

    /// spd-say 经由守护进程播放，打断要靠额外的取消命令
    fn cancel_args(self) -> Option<&'static [&'static str]> {
        match self {
            Engine::SpdSay => Some(&["-C"]),
            _ => None,
        }
    }
}

/// 基于外部命令的合成器
pub struct CommandSynth {
    engine: Engine,
    child: Option<Child>,
    voices_loaded: bool,
}

impl CommandSynth {
    /// 探测指定引擎。命令不存在返回 None；存在但声音列表取不到
    /// 仍然可用，只是就绪标志保持 false
    fn probe(engine: Engine) -> Option<Self> {
        let status = Command::new(engine.program())
            .args(engine.probe_args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => Some(Self {
                engine,
                child: None,
                voices_loaded: status.success(),
            }),
            Err(_) => None,
        }
    }
}

impl Synth for CommandSynth {
    fn speak(&mut self, text: &str) {
        self.cancel();

        let text = clean_text(text);
        if text.is_empty() {
            return;
        }

        // 合成失败静默忽略
        self.child = Command::new(self.engine.program())
            .args(self.engine.speak_args())
            .arg(&text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok();
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Some(args) = self.engine.cancel_args() {
            let _ = Command::new(self.engine.program())
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
        }
    }

    fn is_ready(&self) -> bool {
        self.voices_loaded
    }
}

/// 空实现：平台没有任何语音能力时使用
pub struct NullSynth;

impl Synth for NullSynth {
    fn speak(&mut self, _text: &str) {}

    fn cancel(&mut self) {}

    fn is_ready(&self) -> bool {
        false
    }
}

/// 按优先级探测引擎，创建合成器
pub fn create_synth() -> Box<dyn Synth> {
    const CANDIDATES: &[Engine] = &[Engine::EspeakNg, Engine::Espeak, Engine::SpdSay, Engine::Say];

    for &engine in CANDIDATES {
        if let Some(synth) = CommandSynth::probe(engine) {
            return Box::new(synth);
        }
    }
    Box::new(NullSynth)
}

/// 录音假引擎：记录每次交给合成的最终文本，供导航逻辑测试使用
#[cfg(test)]
pub struct RecordingSynth {
    log: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingSynth {
    pub fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Vec<String>>>) {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (Self { log: log.clone() }, log)
    }
}

#[cfg(test)]
impl Synth for RecordingSynth {
    fn speak(&mut self, text: &str) {
        self.log.borrow_mut().push(clean_text(text));
    }

    fn cancel(&mut self) {}

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_grammar_markers() {
        assert_eq!(clean_text("-쯤"), "쯤");
        assert_eq!(clean_text("~하고 같이"), "하고 같이");
        assert_eq!(clean_text("집"), "집");
        assert_eq!(clean_text(" - "), "");
    }
}
