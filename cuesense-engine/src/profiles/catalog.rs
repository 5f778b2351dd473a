//! Builtin profile catalogue.
//!
//! Targets were tuned against the extractor's scales: energy, band
//! shares, rhythm and harmonic ratio in [0, 1], tempo in BPM, centroid
//! in Hz, flux on the byte-magnitude scale. Loosely-pinned profiles set
//! fewer targets and a weight below 1.0 so they rank behind profiles
//! with a full acoustic signature.

use super::{EmotionProfile, ProfileTargets};

fn profile(
    name: &str,
    gloss: &str,
    description: &str,
    weight: f64,
    targets: ProfileTargets,
) -> EmotionProfile {
    EmotionProfile {
        name: name.to_string(),
        gloss: gloss.to_string(),
        description: description.to_string(),
        targets,
        weight,
    }
}

fn t() -> ProfileTargets {
    ProfileTargets::default()
}

pub(super) fn builtin_profiles() -> Vec<EmotionProfile> {
    vec![
        // ---- cheerful / bright ----
        profile("欢快", "cheerful", "bright bouncy up-tempo pop energy", 1.0,
            t().tempo(128.0).energy(0.62).rhythm(0.68).low(0.30).mid(0.42).high(0.28)
                .centroid(2100.0).flux(750.0).harmonic(0.62)),
        profile("快乐", "happy", "warm major-key feel with a steady bounce", 1.0,
            t().tempo(122.0).energy(0.58).rhythm(0.62).mid(0.44).centroid(1950.0)
                .flux(680.0).harmonic(0.66)),
        profile("喜悦", "joyful", "radiant and open, chorus-like lift", 1.0,
            t().tempo(118.0).energy(0.60).rhythm(0.58).mid(0.42).high(0.27)
                .centroid(2050.0).flux(640.0).harmonic(0.68)),
        profile("兴奋", "excited", "eager forward push, busy percussion", 1.0,
            t().tempo(138.0).energy(0.68).rhythm(0.74).high(0.32).centroid(2350.0)
                .flux(860.0).harmonic(0.52)),
        profile("活泼", "lively", "skipping rhythm, light articulation", 1.0,
            t().tempo(126.0).energy(0.57).rhythm(0.70).mid(0.40).high(0.30)
                .centroid(2200.0).flux(720.0).harmonic(0.58)),
        profile("轻快", "breezy", "easy swing, low weight, daylight feel", 1.0,
            t().tempo(116.0).energy(0.50).rhythm(0.60).mid(0.43).centroid(2000.0)
                .flux(560.0).harmonic(0.64)),
        profile("愉悦", "delighted", "contented glow, relaxed but bright", 0.95,
            t().tempo(112.0).energy(0.52).rhythm(0.55).mid(0.42).centroid(1900.0)
                .flux(520.0).harmonic(0.68)),
        profile("阳光", "sunny", "open-air brightness, strummed drive", 0.95,
            t().tempo(120.0).energy(0.56).rhythm(0.62).high(0.30).centroid(2250.0)
                .flux(620.0).harmonic(0.60)),
        profile("俏皮", "playful", "staccato hooks, winking phrasing", 0.95,
            t().tempo(124.0).energy(0.52).rhythm(0.66).high(0.31).centroid(2400.0)
                .flux(700.0).harmonic(0.54)),
        profile("庆典", "celebratory", "fanfares and crowd-scale festivity", 0.95,
            t().tempo(130.0).energy(0.72).rhythm(0.66).low(0.34).centroid(1900.0)
                .flux(780.0).harmonic(0.56)),
        profile("狂欢", "exuberant", "full-throttle party density", 0.95,
            t().tempo(134.0).energy(0.78).rhythm(0.78).low(0.36).high(0.30)
                .centroid(2300.0).flux(950.0).harmonic(0.44)),
        profile("幸福", "blissful", "settled warmth, rounded edges", 0.9,
            t().tempo(104.0).energy(0.48).rhythm(0.50).mid(0.45).centroid(1700.0)
                .flux(430.0).harmonic(0.74)),
        // ---- sad / grieving ----
        profile("悲伤", "sad", "slow heavy-hearted ballad space", 1.0,
            t().tempo(66.0).energy(0.28).rhythm(0.22).low(0.34).mid(0.46)
                .centroid(950.0).flux(160.0).harmonic(0.80)),
        profile("忧伤", "sorrowful", "drooping lines, thin light", 1.0,
            t().tempo(70.0).energy(0.30).rhythm(0.24).mid(0.47).centroid(1050.0)
                .flux(180.0).harmonic(0.78)),
        profile("哀愁", "melancholy", "grey drift, unresolved suspensions", 0.95,
            t().tempo(72.0).energy(0.32).rhythm(0.26).centroid(1100.0).flux(200.0)
                .harmonic(0.76)),
        profile("悲痛", "grieving", "raw weight, long sustained lows", 0.95,
            t().tempo(60.0).energy(0.34).rhythm(0.18).low(0.42).centroid(820.0)
                .flux(150.0).harmonic(0.74)),
        profile("凄凉", "desolate", "empty space, cold sustain", 0.95,
            t().tempo(58.0).energy(0.22).rhythm(0.14).low(0.36).centroid(780.0)
                .flux(110.0).harmonic(0.78)),
        profile("惆怅", "wistful", "soft regret, slow sway", 0.9,
            t().tempo(76.0).energy(0.30).rhythm(0.28).centroid(1150.0).flux(210.0)
                .harmonic(0.78)),
        profile("孤独", "lonely", "single voice over sparse backing", 0.95,
            t().tempo(68.0).energy(0.24).rhythm(0.18).mid(0.50).centroid(1000.0)
                .flux(140.0).harmonic(0.82)),
        profile("失落", "dejected", "sagging pulse, muted tone", 0.9,
            t().tempo(72.0).energy(0.28).rhythm(0.24).centroid(1000.0).flux(170.0)
                .harmonic(0.76)),
        profile("哀悼", "mourning", "processional slowness, bowed heads", 0.9,
            t().tempo(56.0).energy(0.30).rhythm(0.16).low(0.40).centroid(850.0)
                .flux(130.0).harmonic(0.72)),
        profile("忧郁", "gloomy", "overcast mid-register brooding", 0.95,
            t().tempo(74.0).energy(0.33).rhythm(0.26).low(0.36).centroid(1020.0)
                .flux(190.0).harmonic(0.72)),
        // ---- tense / fearful ----
        profile("紧张", "tense", "tight ostinato, held breath", 1.0,
            t().tempo(120.0).energy(0.58).rhythm(0.55).low(0.42).centroid(1800.0)
                .flux(640.0).harmonic(0.38)),
        profile("悬疑", "suspenseful", "creeping lines, unresolved pedal", 1.0,
            t().tempo(96.0).energy(0.46).rhythm(0.40).low(0.44).centroid(1500.0)
                .flux(460.0).harmonic(0.42)),
        profile("不安", "uneasy", "wavering figures, off-grid accents", 0.95,
            t().tempo(100.0).energy(0.44).rhythm(0.42).centroid(1600.0).flux(480.0)
                .harmonic(0.44)),
        profile("焦虑", "anxious", "restless repetition, rising register", 0.95,
            t().tempo(126.0).energy(0.54).rhythm(0.58).high(0.33).centroid(2200.0)
                .flux(700.0).harmonic(0.36)),
        profile("惊悚", "chilling", "stingers over hollow silence", 0.95,
            t().tempo(110.0).energy(0.60).rhythm(0.48).low(0.46).high(0.30)
                .centroid(2000.0).flux(820.0).harmonic(0.28)),
        profile("恐惧", "fearful", "low rumble, clustered dissonance", 0.95,
            t().tempo(90.0).energy(0.56).rhythm(0.38).low(0.50).centroid(1300.0)
                .flux(560.0).harmonic(0.30)),
        profile("阴森", "eerie", "detuned shimmer, cold air", 0.95,
            t().tempo(78.0).energy(0.38).rhythm(0.26).low(0.40).high(0.32)
                .centroid(1700.0).flux(380.0).harmonic(0.34)),
        profile("诡异", "uncanny", "wrong-angle harmony, glassy timbre", 0.9,
            t().tempo(84.0).energy(0.40).rhythm(0.30).high(0.34).centroid(2100.0)
                .flux(420.0).harmonic(0.36)),
        profile("压抑", "oppressive", "dense lows pressing down", 0.95,
            t().tempo(80.0).energy(0.52).rhythm(0.30).low(0.52).centroid(1000.0)
                .flux(360.0).harmonic(0.40)),
        profile("危机", "crisis", "alarm pulses, braced momentum", 0.95,
            t().tempo(132.0).energy(0.66).rhythm(0.62).low(0.44).centroid(1900.0)
                .flux(800.0).harmonic(0.32)),
        profile("追逐", "chasing", "relentless drive, hard downbeats", 0.95,
            t().tempo(148.0).energy(0.72).rhythm(0.78).low(0.40).centroid(2100.0)
                .flux(900.0).harmonic(0.30)),
        profile("警觉", "alert", "clipped signals, scanning pulse", 0.9,
            t().tempo(116.0).energy(0.50).rhythm(0.56).centroid(1900.0).flux(600.0)
                .harmonic(0.40)),
        // ---- epic / heroic ----
        profile("史诗", "epic", "orchestral mass, wide dynamic arcs", 1.0,
            t().tempo(100.0).energy(0.78).rhythm(0.58).low(0.44).mid(0.38)
                .centroid(1500.0).flux(620.0).harmonic(0.58)),
        profile("宏大", "grand", "broad brass and choir scale", 1.0,
            t().tempo(92.0).energy(0.76).rhythm(0.52).low(0.46).centroid(1400.0)
                .flux(560.0).harmonic(0.60)),
        profile("壮丽", "majestic", "sunlit summit themes", 0.95,
            t().tempo(96.0).energy(0.72).rhythm(0.54).low(0.42).centroid(1550.0)
                .flux(540.0).harmonic(0.62)),
        profile("英雄", "heroic", "bold intervallic theme, march weight", 1.0,
            t().tempo(108.0).energy(0.74).rhythm(0.62).low(0.42).centroid(1600.0)
                .flux(640.0).harmonic(0.56)),
        profile("磅礴", "sweeping", "tidal builds, full-range surges", 0.95,
            t().tempo(94.0).energy(0.80).rhythm(0.56).low(0.48).centroid(1450.0)
                .flux(680.0).harmonic(0.52)),
        profile("凯旋", "triumphant", "victory fanfare, cymbal crests", 0.95,
            t().tempo(112.0).energy(0.76).rhythm(0.60).low(0.40).centroid(1700.0)
                .flux(660.0).harmonic(0.58)),
        profile("战斗", "battling", "percussive combat drive", 0.95,
            t().tempo(128.0).energy(0.80).rhythm(0.74).low(0.46).centroid(1800.0)
                .flux(880.0).harmonic(0.36)),
        profile("征服", "conquering", "inexorable low-brass advance", 0.9,
            t().tempo(104.0).energy(0.78).rhythm(0.60).low(0.48).centroid(1500.0)
                .flux(620.0).harmonic(0.48)),
        profile("崛起", "ascendant", "rising sequences, gathering force", 0.9,
            t().tempo(102.0).energy(0.70).rhythm(0.56).centroid(1600.0).flux(600.0)
                .harmonic(0.56)),
        profile("号召", "rallying", "horn calls over massed rhythm", 0.9,
            t().tempo(110.0).energy(0.72).rhythm(0.62).low(0.42).centroid(1650.0)
                .flux(620.0).harmonic(0.54)),
        // ---- romantic / tender ----
        profile("浪漫", "romantic", "lyrical strings, candlelit warmth", 1.0,
            t().tempo(76.0).energy(0.38).rhythm(0.28).mid(0.46).centroid(1200.0)
                .flux(240.0).harmonic(0.84)),
        profile("温柔", "tender", "soft touch, close-mic intimacy", 1.0,
            t().tempo(70.0).energy(0.32).rhythm(0.24).mid(0.48).centroid(1100.0)
                .flux(200.0).harmonic(0.86)),
        profile("深情", "devoted", "long espressivo phrases", 0.95,
            t().tempo(72.0).energy(0.40).rhythm(0.26).mid(0.46).centroid(1150.0)
                .flux(230.0).harmonic(0.84)),
        profile("甜蜜", "sweet", "light staccato affection", 0.95,
            t().tempo(92.0).energy(0.42).rhythm(0.40).mid(0.44).high(0.28)
                .centroid(1600.0).flux(340.0).harmonic(0.76)),
        profile("暧昧", "flirtatious", "sidelong swing, hushed color", 0.9,
            t().tempo(88.0).energy(0.40).rhythm(0.38).centroid(1500.0).flux(320.0)
                .harmonic(0.72)),
        profile("思念", "longing", "distant theme returning", 0.9,
            t().tempo(68.0).energy(0.34).rhythm(0.22).mid(0.47).centroid(1050.0)
                .flux(190.0).harmonic(0.82)),
        profile("柔情", "affectionate", "rounded legato warmth", 0.9,
            t().tempo(74.0).energy(0.36).rhythm(0.26).centroid(1150.0).flux(220.0)
                .harmonic(0.84)),
        profile("心动", "heart-stirring", "lifting modulation, caught breath", 0.9,
            t().tempo(84.0).energy(0.44).rhythm(0.36).centroid(1450.0).flux(300.0)
                .harmonic(0.78)),
        // ---- calm / ambient ----
        profile("平静", "calm", "level dynamics, slow air", 1.0,
            t().tempo(60.0).energy(0.22).rhythm(0.14).mid(0.46).centroid(1000.0)
                .flux(100.0).harmonic(0.88)),
        profile("安宁", "serene", "undisturbed stillness", 0.95,
            t().tempo(56.0).energy(0.20).rhythm(0.12).centroid(950.0).flux(90.0)
                .harmonic(0.90)),
        profile("冥想", "meditative", "drone base, sparse events", 0.95,
            t().tempo(52.0).energy(0.18).rhythm(0.10).low(0.38).centroid(850.0)
                .flux(80.0).harmonic(0.88)),
        profile("舒缓", "soothing", "gentle descending contours", 0.95,
            t().tempo(64.0).energy(0.26).rhythm(0.18).mid(0.46).centroid(1050.0)
                .flux(120.0).harmonic(0.86)),
        profile("空灵", "ethereal", "airy highs, long reverb tails", 0.95,
            t().tempo(58.0).energy(0.24).rhythm(0.12).high(0.38).centroid(2000.0)
                .flux(140.0).harmonic(0.82)),
        profile("梦幻", "dreamy", "blurred edges, floating harmony", 0.95,
            t().tempo(66.0).energy(0.28).rhythm(0.16).high(0.34).centroid(1800.0)
                .flux(160.0).harmonic(0.80)),
        profile("静谧", "tranquil", "nocturne hush", 0.9,
            t().tempo(58.0).energy(0.20).rhythm(0.12).centroid(900.0).flux(90.0)
                .harmonic(0.90)),
        profile("治愈", "healing", "consonant warmth, slow resolve", 0.95,
            t().tempo(72.0).energy(0.30).rhythm(0.22).mid(0.48).centroid(1200.0)
                .flux(170.0).harmonic(0.86)),
        profile("悠然", "unhurried", "strolling ease", 0.9,
            t().tempo(80.0).energy(0.34).rhythm(0.32).centroid(1300.0).flux(220.0)
                .harmonic(0.78)),
        profile("漂浮", "floating", "weightless pads, no downbeat", 0.9,
            t().tempo(54.0).energy(0.22).rhythm(0.08).high(0.36).centroid(1700.0)
                .flux(110.0).harmonic(0.84)),
        // ---- dark ----
        profile("黑暗", "dark", "sunless low registers", 1.0,
            t().tempo(72.0).energy(0.44).rhythm(0.30).low(0.54).centroid(800.0)
                .flux(300.0).harmonic(0.42)),
        profile("邪恶", "sinister", "coiled menace, tritone shadows", 0.95,
            t().tempo(80.0).energy(0.48).rhythm(0.34).low(0.50).centroid(950.0)
                .flux(360.0).harmonic(0.36)),
        profile("沉重", "heavy", "dragging mass, thick lows", 0.95,
            t().tempo(64.0).energy(0.52).rhythm(0.28).low(0.56).centroid(750.0)
                .flux(320.0).harmonic(0.44)),
        profile("绝望", "despairing", "collapsed cadence, void beneath", 0.9,
            t().tempo(58.0).energy(0.40).rhythm(0.18).low(0.48).centroid(800.0)
                .flux(240.0).harmonic(0.50)),
        profile("末日", "apocalyptic", "scorched-earth walls of sound", 0.95,
            t().tempo(86.0).energy(0.74).rhythm(0.44).low(0.56).centroid(1100.0)
                .flux(700.0).harmonic(0.26)),
        profile("堕落", "fallen", "decayed elegance, smeared voicing", 0.85,
            t().tempo(78.0).energy(0.42).rhythm(0.30).low(0.46).centroid(1000.0)
                .flux(330.0).harmonic(0.46)),
        profile("冷酷", "cold", "metallic precision, no warmth", 0.9,
            t().tempo(96.0).energy(0.50).rhythm(0.46).low(0.44).high(0.30)
                .centroid(1600.0).flux(460.0).harmonic(0.34)),
        // ---- energetic ----
        profile("激昂", "fervent", "surging anthems, raised voices", 1.0,
            t().tempo(140.0).energy(0.78).rhythm(0.76).centroid(2300.0).flux(940.0)
                .harmonic(0.46)),
        profile("热血", "hot-blooded", "sprinting guitar-driven charge", 1.0,
            t().tempo(156.0).energy(0.82).rhythm(0.82).high(0.32).centroid(2600.0)
                .flux(1050.0).harmonic(0.38)),
        profile("动感", "kinetic", "dance-floor pulse lock", 0.95,
            t().tempo(126.0).energy(0.70).rhythm(0.80).low(0.38).centroid(2200.0)
                .flux(880.0).harmonic(0.42)),
        profile("奔放", "unrestrained", "loose-limbed full-tilt swing", 0.9,
            t().tempo(144.0).energy(0.74).rhythm(0.74).centroid(2400.0).flux(920.0)
                .harmonic(0.44)),
        profile("疾驰", "racing", "hurtling sixteenth-note motion", 0.9,
            t().tempo(168.0).energy(0.78).rhythm(0.84).high(0.33).centroid(2700.0)
                .flux(1100.0).harmonic(0.34)),
        profile("强劲", "driving", "heavy four-on-the-floor force", 0.95,
            t().tempo(132.0).energy(0.80).rhythm(0.82).low(0.42).centroid(2000.0)
                .flux(960.0).harmonic(0.36)),
        profile("亢奋", "frenetic", "overdriven peak-state intensity", 0.9,
            t().tempo(172.0).energy(0.84).rhythm(0.86).high(0.34).centroid(2900.0)
                .flux(1200.0).harmonic(0.28)),
        profile("狂野", "wild", "untamed distortion and crash", 0.9,
            t().tempo(150.0).energy(0.82).rhythm(0.76).high(0.33).centroid(2500.0)
                .flux(1080.0).harmonic(0.30)),
        profile("激情", "passionate", "high-stakes expressive surge", 0.95,
            t().tempo(134.0).energy(0.74).rhythm(0.70).centroid(2200.0).flux(860.0)
                .harmonic(0.50)),
        // ---- mysterious / fantastical ----
        profile("神秘", "mysterious", "veiled motives, modal shading", 1.0,
            t().tempo(82.0).energy(0.38).rhythm(0.30).low(0.40).centroid(1400.0)
                .flux(320.0).harmonic(0.56)),
        profile("奇幻", "fantastical", "storybook shimmer and wonder", 0.95,
            t().tempo(90.0).energy(0.44).rhythm(0.36).high(0.32).centroid(1900.0)
                .flux(380.0).harmonic(0.64)),
        profile("魔幻", "magical", "sparkling celesta colors", 0.9,
            t().tempo(86.0).energy(0.40).rhythm(0.32).high(0.34).centroid(2100.0)
                .flux(360.0).harmonic(0.62)),
        profile("未知", "unknown", "unresolved drifting question", 0.85,
            t().tempo(74.0).energy(0.34).rhythm(0.24).centroid(1300.0).flux(280.0)
                .harmonic(0.58)),
        profile("探索", "exploratory", "stepwise discovery, opening map", 0.9,
            t().tempo(98.0).energy(0.48).rhythm(0.44).centroid(1600.0).flux(420.0)
                .harmonic(0.60)),
        profile("迷离", "hazy", "soft-focus wandering harmony", 0.85,
            t().tempo(78.0).energy(0.36).rhythm(0.26).high(0.30).centroid(1700.0)
                .flux(300.0).harmonic(0.66)),
        // ---- nostalgic ----
        profile("怀旧", "nostalgic", "faded-photograph warmth", 1.0,
            t().tempo(80.0).energy(0.36).rhythm(0.32).mid(0.46).centroid(1200.0)
                .flux(250.0).harmonic(0.76)),
        profile("复古", "retro", "vintage groove and tone", 0.9,
            t().tempo(96.0).energy(0.46).rhythm(0.50).mid(0.44).centroid(1500.0)
                .flux(380.0).harmonic(0.66)),
        profile("回忆", "reminiscent", "slow montage flashback", 0.9,
            t().tempo(74.0).energy(0.32).rhythm(0.26).centroid(1150.0).flux(210.0)
                .harmonic(0.80)),
        profile("岁月", "bygone", "long-road retrospection", 0.85,
            t().tempo(78.0).energy(0.34).rhythm(0.28).centroid(1200.0).flux(230.0)
                .harmonic(0.78)),
        profile("乡愁", "homesick", "folk-tinged distant home", 0.9,
            t().tempo(72.0).energy(0.32).rhythm(0.26).mid(0.48).centroid(1100.0)
                .flux(200.0).harmonic(0.82)),
        // ---- solemn / ceremonial ----
        profile("庄严", "solemn", "measured processional gravity", 1.0,
            t().tempo(66.0).energy(0.52).rhythm(0.24).low(0.46).centroid(950.0)
                .flux(220.0).harmonic(0.68)),
        profile("肃穆", "reverent", "bowed stillness, organ depth", 0.95,
            t().tempo(58.0).energy(0.44).rhythm(0.18).low(0.48).centroid(850.0)
                .flux(170.0).harmonic(0.72)),
        profile("神圣", "sacred", "choral light from above", 0.95,
            t().tempo(62.0).energy(0.48).rhythm(0.18).mid(0.42).centroid(1100.0)
                .flux(190.0).harmonic(0.80)),
        profile("仪式", "ceremonial", "ritual drums and intoned calls", 0.9,
            t().tempo(76.0).energy(0.54).rhythm(0.42).low(0.48).centroid(1000.0)
                .flux(320.0).harmonic(0.54)),
        profile("悲壮", "tragic-heroic", "doomed valor at full weight", 0.95,
            t().tempo(84.0).energy(0.68).rhythm(0.44).low(0.46).centroid(1250.0)
                .flux(480.0).harmonic(0.56)),
        profile("沉思", "contemplative", "inward slow consideration", 0.9,
            t().tempo(64.0).energy(0.28).rhythm(0.18).mid(0.46).centroid(1050.0)
                .flux(140.0).harmonic(0.82)),
        // ---- hopeful / uplifting ----
        profile("希望", "hopeful", "dawn-lit rising lines", 1.0,
            t().tempo(100.0).energy(0.52).rhythm(0.50).mid(0.43).centroid(1800.0)
                .flux(480.0).harmonic(0.70)),
        profile("晨曦", "daybreak", "first-light gradual bloom", 0.9,
            t().tempo(88.0).energy(0.44).rhythm(0.38).centroid(1650.0).flux(380.0)
                .harmonic(0.74)),
        profile("新生", "reborn", "clean-slate openness", 0.9,
            t().tempo(96.0).energy(0.48).rhythm(0.44).centroid(1750.0).flux(420.0)
                .harmonic(0.72)),
        profile("憧憬", "aspiring", "eyes-up yearning motion", 0.9,
            t().tempo(104.0).energy(0.50).rhythm(0.48).centroid(1850.0).flux(460.0)
                .harmonic(0.70)),
        profile("展望", "forward-looking", "horizon-wide steady build", 0.85,
            t().tempo(106.0).energy(0.54).rhythm(0.50).centroid(1800.0).flux(480.0)
                .harmonic(0.66)),
        profile("励志", "inspiring", "training-montage determination", 0.95,
            t().tempo(118.0).energy(0.62).rhythm(0.60).centroid(1950.0).flux(580.0)
                .harmonic(0.58)),
        // ---- comic / quirky ----
        profile("幽默", "humorous", "raised-eyebrow comic timing", 0.95,
            t().tempo(112.0).energy(0.50).rhythm(0.58).high(0.31).centroid(2250.0)
                .flux(600.0).harmonic(0.56)),
        profile("滑稽", "comical", "pratfall hits and slide whistles", 0.9,
            t().tempo(118.0).energy(0.52).rhythm(0.62).high(0.33).centroid(2450.0)
                .flux(680.0).harmonic(0.48)),
        profile("古怪", "quirky", "crooked meter, odd instrument pairs", 0.9,
            t().tempo(108.0).energy(0.46).rhythm(0.54).high(0.32).centroid(2300.0)
                .flux(560.0).harmonic(0.52)),
        profile("童趣", "childlike", "toy-box melody simplicity", 0.9,
            t().tempo(110.0).energy(0.44).rhythm(0.52).high(0.34).centroid(2500.0)
                .flux(520.0).harmonic(0.62)),
        profile("顽皮", "mischievous", "tiptoe sneak and scamper", 0.9,
            t().tempo(116.0).energy(0.46).rhythm(0.58).high(0.32).centroid(2350.0)
                .flux(580.0).harmonic(0.52)),
        // ---- resolute ----
        profile("坚定", "resolute", "square-shouldered steady march", 0.95,
            t().tempo(110.0).energy(0.64).rhythm(0.60).low(0.42).centroid(1550.0)
                .flux(520.0).harmonic(0.54)),
        profile("奋进", "striving", "uphill momentum, set jaw", 0.9,
            t().tempo(120.0).energy(0.66).rhythm(0.64).centroid(1700.0).flux(580.0)
                .harmonic(0.52)),
        profile("不屈", "unyielding", "battered but advancing theme", 0.9,
            t().tempo(102.0).energy(0.68).rhythm(0.56).low(0.46).centroid(1450.0)
                .flux(540.0).harmonic(0.50)),
        profile("执着", "persistent", "single figure repeated, unbroken", 0.85,
            t().tempo(108.0).energy(0.58).rhythm(0.58).centroid(1600.0).flux(500.0)
                .harmonic(0.56)),
        // ---- settings and moods of place ----
        profile("自由", "free", "open-road release", 0.9,
            t().tempo(122.0).energy(0.58).rhythm(0.58).centroid(2000.0).flux(600.0)
                .harmonic(0.60)),
        profile("辽阔", "expansive", "wide-shot landscape breadth", 0.9,
            t().tempo(84.0).energy(0.52).rhythm(0.34).low(0.40).centroid(1400.0)
                .flux(340.0).harmonic(0.68)),
        profile("田园", "pastoral", "meadow woodwinds, easy sway", 0.9,
            t().tempo(86.0).energy(0.38).rhythm(0.36).mid(0.46).centroid(1450.0)
                .flux(280.0).harmonic(0.78)),
        profile("都市", "urban", "neon grid, confident groove", 0.9,
            t().tempo(104.0).energy(0.56).rhythm(0.62).low(0.40).centroid(1800.0)
                .flux(560.0).harmonic(0.48)),
        profile("夜晚", "nocturnal", "after-hours hush and glow", 0.85,
            t().tempo(78.0).energy(0.36).rhythm(0.34).low(0.42).centroid(1250.0)
                .flux(260.0).harmonic(0.64)),
        profile("雨天", "rainy", "steady patter melancholy", 0.85,
            t().tempo(72.0).energy(0.30).rhythm(0.28).centroid(1200.0).flux(220.0)
                .harmonic(0.74)),
        profile("冬日", "wintry", "crystalline sparse chill", 0.85,
            t().tempo(68.0).energy(0.28).rhythm(0.20).high(0.32).centroid(1650.0)
                .flux(180.0).harmonic(0.76)),
        profile("夏日", "summery", "heat-haze carefree strum", 0.85,
            t().tempo(112.0).energy(0.52).rhythm(0.56).mid(0.42).centroid(1950.0)
                .flux(540.0).harmonic(0.64)),
        profile("流浪", "wandering", "roadworn loping gait", 0.85,
            t().tempo(90.0).energy(0.42).rhythm(0.42).centroid(1400.0).flux(340.0)
                .harmonic(0.68)),
        profile("旅途", "journeying", "mile-marker steady motion", 0.85,
            t().tempo(114.0).energy(0.54).rhythm(0.56).centroid(1700.0).flux(480.0)
                .harmonic(0.62)),
        // ---- arcs and moments ----
        profile("胜利", "victorious", "earned summit celebration", 0.9,
            t().tempo(118.0).energy(0.74).rhythm(0.62).low(0.40).centroid(1750.0)
                .flux(660.0).harmonic(0.56)),
        profile("告别", "farewell", "last-look slow wave", 0.9,
            t().tempo(70.0).energy(0.34).rhythm(0.24).mid(0.46).centroid(1100.0)
                .flux(200.0).harmonic(0.80)),
        profile("重逢", "reunion", "recognition swell, embrace", 0.85,
            t().tempo(88.0).energy(0.48).rhythm(0.38).centroid(1450.0).flux(360.0)
                .harmonic(0.76)),
        profile("期待", "anticipating", "held-breath upward lean", 0.85,
            t().tempo(98.0).energy(0.46).rhythm(0.44).centroid(1650.0).flux(420.0)
                .harmonic(0.64)),
        profile("犹豫", "hesitant", "stop-start unresolved steps", 0.8,
            t().tempo(82.0).energy(0.36).rhythm(0.32).centroid(1350.0).flux(300.0)
                .harmonic(0.66)),
        profile("挣扎", "struggling", "grinding effort against weight", 0.85,
            t().tempo(96.0).energy(0.62).rhythm(0.48).low(0.46).centroid(1400.0)
                .flux(520.0).harmonic(0.40)),
        profile("释然", "relieved", "exhale into open space", 0.85,
            t().tempo(80.0).energy(0.38).rhythm(0.30).centroid(1350.0).flux(260.0)
                .harmonic(0.80)),
        profile("超脱", "transcendent", "above-the-clouds serenity", 0.85,
            t().tempo(62.0).energy(0.30).rhythm(0.14).high(0.34).centroid(1800.0)
                .flux(160.0).harmonic(0.82)),
        // ---- bearing ----
        profile("威严", "imposing", "throne-room authority", 0.9,
            t().tempo(72.0).energy(0.60).rhythm(0.30).low(0.50).centroid(1050.0)
                .flux(300.0).harmonic(0.58)),
        profile("优雅", "elegant", "poised salon refinement", 0.9,
            t().tempo(84.0).energy(0.36).rhythm(0.34).mid(0.46).centroid(1400.0)
                .flux(260.0).harmonic(0.82)),
        profile("高贵", "noble", "stately unhurried dignity", 0.85,
            t().tempo(76.0).energy(0.44).rhythm(0.28).mid(0.44).centroid(1250.0)
                .flux(240.0).harmonic(0.76)),
        profile("华丽", "ornate", "gilded virtuosic flourish", 0.9,
            t().tempo(108.0).energy(0.58).rhythm(0.52).high(0.31).centroid(2100.0)
                .flux(560.0).harmonic(0.62)),
    ]
}
