//! 数据模型
//!
//! 单词卡与卡组。词表在编译期内嵌，启动后只读。

/// 一张单词卡：正面英文提示，背面韩文答案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    pub front: &'static str,
    /// 韩文答案，可能带 '-' / '~' 语法标注（表示黏着语素）
    pub back: &'static str,
    /// 分类标签，仅用于展示
    pub category: &'static str,
}

/// 内置词表（出自 Karin's Diary），顺序固定
pub const WORD_PAIRS: &[WordPair] = &[
    WordPair { front: "Around / About", back: "-쯤", category: "Grammar" },
    WordPair { front: "Restaurant", back: "식당", category: "Place" },
    WordPair { front: "In front of school", back: "학교 앞", category: "Place" },
    WordPair { front: "Nearby / Near", back: "근처", category: "Place" },
    WordPair { front: "Cafe", back: "카페", category: "Place" },
    WordPair { front: "Home", back: "집", category: "Place" },
    WordPair { front: "Today", back: "오늘", category: "Time" },
    WordPair { front: "Next time", back: "다음", category: "Time" },
    WordPair { front: "Especially", back: "특히", category: "Adverb" },
    WordPair { front: "Not really", back: "별로", category: "Adverb" },
    WordPair { front: "Together with", back: "~하고 같이", category: "Expression" },
    WordPair { front: "To order", back: "주문하다", category: "Verb" },
    WordPair { front: "To be delicious", back: "맛있다", category: "Adjective" },
    WordPair { front: "To be expensive", back: "비싸다", category: "Adjective" },
    WordPair { front: "To be cheap", back: "싸다", category: "Adjective" },
    WordPair { front: "To be kind / friendly", back: "친절하다", category: "Adjective" },
    WordPair { front: "To drink", back: "마시다", category: "Verb" },
    WordPair { front: "To do homework", back: "숙제를 하다", category: "Verb" },
    WordPair { front: "Gimbap", back: "김밥", category: "Food" },
    WordPair { front: "Bibimbap", back: "비빔밥", category: "Food" },
    WordPair { front: "Kimchi Udon", back: "김치 우동", category: "Food" },
    WordPair { front: "Tteokbokki", back: "떡볶이", category: "Food" },
    WordPair { front: "Americano", back: "아메리카노", category: "Drink" },
    WordPair { front: "Cheesecake", back: "치즈 케이크", category: "Food" },
];

/// 卡组：定长、有序、只读的单词序列（长度至少为 1）
#[derive(Debug, Clone)]
pub struct Deck {
    words: &'static [WordPair],
}

impl Deck {
    /// 内置卡组
    pub fn builtin() -> Self {
        Self::new(WORD_PAIRS)
    }

    pub fn new(words: &'static [WordPair]) -> Self {
        Self { words }
    }

    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// 按索引取卡。越界属于程序错误（导航不变量保证取不到），直接 panic
    pub fn get(&self, index: usize) -> &WordPair {
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck() {
        let deck = Deck::builtin();
        assert_eq!(deck.size(), 24);
        assert_eq!(deck.get(0).back, "-쯤");
        assert_eq!(deck.get(5).front, "Home");
        assert_eq!(deck.get(5).back, "집");
        assert_eq!(deck.get(deck.size() - 1).category, "Food");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let deck = Deck::builtin();
        let _ = deck.get(deck.size());
    }
}
