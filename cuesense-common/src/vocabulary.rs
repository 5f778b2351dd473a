//! Controlled vocabulary for classification outputs.
//!
//! Every label the engine emits (emotions, scenes, film genres, styles,
//! instruments) must come from an approved term list. The review workflow
//! that curates these lists lives outside this crate; `StaticVocabulary`
//! ships the approved snapshot, and `VocabularyProvider` is the seam a
//! database-backed provider plugs into.
//!
//! Terms are Chinese labels (the product's canonical data language); code
//! and identifiers stay English.

use serde::{Deserialize, Serialize};

/// Vocabulary namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Emotion,
    Scene,
    Style,
    Instrument,
    FilmGenre,
}

/// Source of approved terms for one category
pub trait VocabularyProvider: Send + Sync {
    /// Approved terms for a category, curated order preserved
    fn terms(&self, category: TermCategory) -> Vec<String>;

    /// Membership test; the default scans `terms()`
    fn contains(&self, category: TermCategory, term: &str) -> bool {
        self.terms(category).iter().any(|t| t == term)
    }
}

/// Approved emotion terms. Profile catalogue names must stay within this
/// list; the engine asserts that in its tests.
pub const EMOTION_TERMS: &[&str] = &[
    // cheerful / bright
    "欢快", "快乐", "喜悦", "兴奋", "活泼", "轻快", "愉悦", "阳光", "俏皮", "庆典",
    "狂欢", "幸福",
    // sad / grieving
    "悲伤", "忧伤", "哀愁", "悲痛", "凄凉", "惆怅", "孤独", "失落", "哀悼", "忧郁",
    // tense / fearful
    "紧张", "悬疑", "不安", "焦虑", "惊悚", "恐惧", "阴森", "诡异", "压抑", "危机",
    "追逐", "警觉",
    // epic / heroic
    "史诗", "宏大", "壮丽", "英雄", "磅礴", "凯旋", "战斗", "征服", "崛起", "号召",
    // romantic / tender
    "浪漫", "温柔", "深情", "甜蜜", "暧昧", "思念", "柔情", "心动",
    // calm / ambient
    "平静", "安宁", "冥想", "舒缓", "空灵", "梦幻", "静谧", "治愈", "悠然", "漂浮",
    // dark
    "黑暗", "邪恶", "沉重", "绝望", "末日", "堕落", "冷酷",
    // energetic
    "激昂", "热血", "动感", "奔放", "疾驰", "强劲", "亢奋", "狂野", "激情",
    // mysterious / fantastical
    "神秘", "奇幻", "魔幻", "未知", "探索", "迷离",
    // nostalgic
    "怀旧", "复古", "回忆", "岁月", "乡愁",
    // solemn / ceremonial
    "庄严", "肃穆", "神圣", "仪式", "悲壮", "沉思",
    // hopeful / uplifting
    "希望", "晨曦", "新生", "憧憬", "展望", "励志",
    // comic / quirky
    "幽默", "滑稽", "古怪", "童趣", "顽皮",
    // resolute
    "坚定", "奋进", "不屈", "执着",
    // settings and moods of place
    "自由", "辽阔", "田园", "都市", "夜晚", "雨天", "冬日", "夏日", "流浪", "旅途",
    // arcs and moments
    "胜利", "告别", "重逢", "期待", "犹豫", "挣扎", "释然", "超脱",
    // bearing
    "威严", "优雅", "高贵", "华丽",
];

/// Approved scene terms ("未识别" is the engine's sentinel, not a term)
pub const SCENE_TERMS: &[&str] = &[
    "战斗", "追逐", "爱情", "离别", "重逢", "婚礼", "葬礼", "庆典", "派对", "旅行",
    "冒险", "探险", "悬疑", "恐怖", "法庭", "审讯", "办公室", "校园", "童年", "回忆",
    "梦境", "城市夜景", "乡村", "海边", "森林", "雨夜", "雪景", "星空", "日出", "黄昏",
    "宫廷", "战场", "胜利时刻", "牺牲", "告白", "成长", "训练", "潜行", "逃亡", "对峙",
    "仪式", "祈祷", "科幻空间", "未来都市", "荒野", "沙漠", "航海", "飞行", "竞技", "赛场",
    "酒吧", "咖啡馆", "街头", "市集", "医院", "实验室", "隧道", "地下城", "神庙", "墓地",
];

/// Approved musical style terms
pub const STYLE_TERMS: &[&str] = &[
    "交响", "电子", "摇滚", "民谣", "爵士", "古典", "流行", "氛围", "嘻哈", "金属",
    "朋克", "蓝调", "乡村", "雷鬼", "拉丁", "国风", "八音盒", "钢琴独奏", "弦乐", "合唱",
];

/// Approved instrument terms
pub const INSTRUMENT_TERMS: &[&str] = &[
    "钢琴", "小提琴", "大提琴", "吉他", "贝斯", "鼓", "长笛", "小号", "圆号", "竖琴",
    "古筝", "二胡", "笛子", "琵琶", "萨克斯", "合成器", "管风琴", "口琴", "手风琴", "马林巴",
];

/// Approved film-genre terms
pub const FILM_GENRE_TERMS: &[&str] = &[
    "动作", "爱情", "喜剧", "悲剧", "惊悚", "恐怖", "科幻", "奇幻", "战争", "史诗",
    "剧情", "文艺", "纪录", "动画", "悬疑", "犯罪", "冒险", "青春", "家庭", "治愈",
];

/// The shipped approved-term snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVocabulary;

impl StaticVocabulary {
    pub fn new() -> Self {
        StaticVocabulary
    }

    fn list(category: TermCategory) -> &'static [&'static str] {
        match category {
            TermCategory::Emotion => EMOTION_TERMS,
            TermCategory::Scene => SCENE_TERMS,
            TermCategory::Style => STYLE_TERMS,
            TermCategory::Instrument => INSTRUMENT_TERMS,
            TermCategory::FilmGenre => FILM_GENRE_TERMS,
        }
    }
}

impl VocabularyProvider for StaticVocabulary {
    fn terms(&self, category: TermCategory) -> Vec<String> {
        Self::list(category).iter().map(|t| t.to_string()).collect()
    }

    fn contains(&self, category: TermCategory, term: &str) -> bool {
        Self::list(category).contains(&term)
    }
}
