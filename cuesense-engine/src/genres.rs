//! Film-genre inference.
//!
//! The orchestrator needs a film genre before scene fusion can consult
//! the linkage table. Caller-provided genre metadata wins when it is an
//! approved term; otherwise the genre is read off a fixed emotion-to-
//! genre table. Every approved emotion appears in the table exactly
//! once; the tests enforce that.

use tracing::debug;

use cuesense_common::{TermCategory, VocabularyProvider};

/// Fallback when the emotion is unknown to the table
pub const DEFAULT_GENRE: &str = "剧情";

/// Fixed (genre, emotions) table. Keys are approved film-genre terms,
/// values are approved emotion terms.
const GENRE_FOR_EMOTIONS: &[(&str, &[&str])] = &[
    (
        "喜剧",
        &[
            "欢快", "快乐", "喜悦", "兴奋", "活泼", "轻快", "愉悦", "阳光", "俏皮",
            "庆典", "狂欢", "幸福", "幽默", "滑稽", "古怪", "顽皮",
        ],
    ),
    (
        "悲剧",
        &[
            "悲伤", "忧伤", "哀愁", "悲痛", "凄凉", "惆怅", "孤独", "失落", "哀悼",
            "忧郁",
        ],
    ),
    (
        "悬疑",
        &[
            "紧张", "悬疑", "不安", "焦虑", "压抑", "危机", "警觉", "诡异", "神秘",
            "未知", "迷离",
        ],
    ),
    ("惊悚", &["惊悚"]),
    ("恐怖", &["恐惧", "阴森"]),
    (
        "动作",
        &[
            "追逐", "激昂", "热血", "动感", "奔放", "疾驰", "强劲", "亢奋", "狂野",
            "激情",
        ],
    ),
    ("史诗", &["史诗", "宏大", "壮丽", "磅礴", "凯旋", "崛起", "号召"]),
    ("战争", &["英雄", "战斗", "征服", "悲壮"]),
    (
        "爱情",
        &["浪漫", "温柔", "深情", "甜蜜", "暧昧", "思念", "柔情", "心动"],
    ),
    (
        "治愈",
        &[
            "平静", "安宁", "冥想", "舒缓", "空灵", "梦幻", "静谧", "治愈", "悠然",
            "漂浮",
        ],
    ),
    ("犯罪", &["黑暗", "邪恶", "堕落", "冷酷"]),
    ("科幻", &["末日"]),
    ("奇幻", &["奇幻", "魔幻"]),
    (
        "文艺",
        &[
            "怀旧", "复古", "回忆", "岁月", "乡愁", "自由", "辽阔", "田园", "都市",
            "夜晚", "雨天", "冬日", "夏日", "威严", "优雅", "高贵", "华丽",
        ],
    ),
    (
        "剧情",
        &[
            "沉重", "绝望", "庄严", "肃穆", "神圣", "仪式", "沉思", "希望", "晨曦",
            "励志", "坚定", "奋进", "不屈", "执着", "胜利", "告别", "重逢", "期待",
            "犹豫", "挣扎", "释然", "超脱",
        ],
    ),
    ("青春", &["新生", "憧憬", "展望"]),
    ("冒险", &["流浪", "旅途", "探索"]),
    ("动画", &["童趣"]),
];

/// Genre the fixed table assigns to one emotion
pub fn genre_for_emotion(emotion: &str) -> &'static str {
    GENRE_FOR_EMOTIONS
        .iter()
        .find(|(_, emotions)| emotions.contains(&emotion))
        .map(|(genre, _)| *genre)
        .unwrap_or(DEFAULT_GENRE)
}

/// Resolve the film genre for one analysis call.
///
/// Approved metadata beats inference; anything else falls through to the
/// emotion table.
pub fn infer_genre(
    primary_emotion: &str,
    metadata_genre: Option<&str>,
    vocabulary: &dyn VocabularyProvider,
) -> String {
    if let Some(tagged) = metadata_genre {
        let tagged = tagged.trim();
        if vocabulary.contains(TermCategory::FilmGenre, tagged) {
            debug!(genre = %tagged, "using genre from metadata");
            return tagged.to_string();
        }
        debug!(genre = %tagged, "ignoring unapproved metadata genre");
    }
    genre_for_emotion(primary_emotion).to_string()
}
