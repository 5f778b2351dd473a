//! Linkage scene matcher.
//!
//! A curated (film genre, primary emotion) table mapping the pairings
//! the catalogue team has signed off on to their usual scenes. A hit
//! reports the fixed linkage confidence; a missing pairing is an
//! abstention, not an error.

use cuesense_common::model::{SceneMatch, SceneSource};

/// Curated rows: (genre, emotion) -> candidate scenes, best first.
/// Every term must be approved vocabulary; the tests enforce it.
const LINKAGE_ROWS: &[(&str, &str, &[&str])] = &[
    // comedy
    ("喜剧", "欢快", &["庆典", "派对"]),
    ("喜剧", "快乐", &["派对", "校园"]),
    ("喜剧", "活泼", &["校园", "童年"]),
    ("喜剧", "俏皮", &["童年", "街头"]),
    ("喜剧", "庆典", &["庆典"]),
    ("喜剧", "狂欢", &["派对", "市集"]),
    ("喜剧", "幽默", &["街头", "咖啡馆"]),
    // tragedy
    ("悲剧", "悲伤", &["离别", "雨夜"]),
    ("悲剧", "悲痛", &["葬礼", "牺牲"]),
    ("悲剧", "哀悼", &["葬礼", "墓地"]),
    ("悲剧", "孤独", &["雨夜", "城市夜景"]),
    ("悲剧", "凄凉", &["荒野", "雪景"]),
    ("悲剧", "失落", &["黄昏", "街头"]),
    // suspense
    ("悬疑", "悬疑", &["悬疑", "潜行"]),
    ("悬疑", "紧张", &["对峙", "潜行"]),
    ("悬疑", "诡异", &["梦境", "隧道"]),
    ("悬疑", "危机", &["逃亡", "对峙"]),
    ("悬疑", "神秘", &["神庙", "梦境"]),
    ("悬疑", "警觉", &["潜行", "对峙"]),
    // horror and thriller
    ("恐怖", "恐惧", &["恐怖", "墓地"]),
    ("恐怖", "阴森", &["墓地", "隧道"]),
    ("惊悚", "惊悚", &["恐怖", "逃亡"]),
    // action
    ("动作", "追逐", &["追逐", "逃亡"]),
    ("动作", "热血", &["竞技", "赛场"]),
    ("动作", "疾驰", &["追逐", "飞行"]),
    ("动作", "强劲", &["战斗", "训练"]),
    ("动作", "激昂", &["赛场", "胜利时刻"]),
    // epic
    ("史诗", "史诗", &["战场", "宫廷"]),
    ("史诗", "宏大", &["战场", "航海"]),
    ("史诗", "凯旋", &["胜利时刻", "庆典"]),
    ("史诗", "磅礴", &["战场", "星空"]),
    // war
    ("战争", "战斗", &["战斗", "战场"]),
    ("战争", "英雄", &["战场", "胜利时刻"]),
    ("战争", "悲壮", &["牺牲", "战场"]),
    // romance
    ("爱情", "浪漫", &["爱情", "告白"]),
    ("爱情", "甜蜜", &["婚礼", "告白"]),
    ("爱情", "深情", &["爱情", "重逢"]),
    ("爱情", "思念", &["离别", "回忆"]),
    ("爱情", "心动", &["告白", "校园"]),
    // healing
    ("治愈", "平静", &["海边", "乡村"]),
    ("治愈", "治愈", &["日出", "森林"]),
    ("治愈", "梦幻", &["梦境", "星空"]),
    ("治愈", "空灵", &["星空", "雪景"]),
    ("治愈", "静谧", &["森林", "雪景"]),
    // crime
    ("犯罪", "黑暗", &["地下城", "隧道"]),
    ("犯罪", "冷酷", &["审讯", "对峙"]),
    // science fiction and fantasy
    ("科幻", "末日", &["科幻空间", "荒野"]),
    ("奇幻", "奇幻", &["梦境", "神庙"]),
    ("奇幻", "魔幻", &["神庙", "地下城"]),
    // art film
    ("文艺", "怀旧", &["回忆", "童年"]),
    ("文艺", "乡愁", &["乡村", "回忆"]),
    ("文艺", "都市", &["城市夜景", "咖啡馆"]),
    ("文艺", "田园", &["乡村", "森林"]),
    ("文艺", "夜晚", &["城市夜景", "酒吧"]),
    // drama
    ("剧情", "胜利", &["胜利时刻", "赛场"]),
    ("剧情", "告别", &["离别"]),
    ("剧情", "重逢", &["重逢"]),
    ("剧情", "庄严", &["仪式", "宫廷"]),
    ("剧情", "神圣", &["祈祷", "神庙"]),
    ("剧情", "仪式", &["仪式", "祈祷"]),
    ("剧情", "励志", &["成长", "训练"]),
    ("剧情", "挣扎", &["对峙", "成长"]),
    // youth, adventure, animation
    ("青春", "憧憬", &["校园", "成长"]),
    ("青春", "新生", &["日出", "成长"]),
    ("冒险", "旅途", &["旅行", "冒险"]),
    ("冒险", "流浪", &["街头", "荒野"]),
    ("冒险", "探索", &["探险", "航海"]),
    ("动画", "童趣", &["童年", "校园"]),
];

/// Candidate scenes for a pairing, best first
pub fn candidates(genre: &str, emotion: &str) -> Option<&'static [&'static str]> {
    LINKAGE_ROWS
        .iter()
        .find(|(g, e, _)| *g == genre && *e == emotion)
        .map(|(_, _, scenes)| *scenes)
}

/// Linkage matcher: best candidate for the pairing, or abstention
pub fn lookup(genre: &str, emotion: &str) -> Option<SceneMatch> {
    let scenes = candidates(genre, emotion)?;
    let scene = scenes.first()?;
    Some(SceneMatch {
        scene: (*scene).to_string(),
        confidence: SceneSource::Linkage.default_confidence(),
        source: SceneSource::Linkage,
        description: format!("typical scene for {} {}", genre, emotion),
        reasoning: format!(
            "genre {} with primary emotion {} links to {}",
            genre, emotion, scene
        ),
    })
}
