//! Rune rows for the three futharks.

use serde::Serialize;

/// One rune.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    /// Transliterated name.
    pub name: &'static str,
    /// The glyph.
    pub character: &'static str,
    /// Japanese keyword.
    pub keyword: &'static str,
    /// Upright meaning.
    pub meaning: &'static str,
    /// Whether the glyph reads differently upside down.
    pub reversible: bool,
}

macro_rules! runes {
    ($(($name:expr, $ch:expr, $kw:expr, $m:expr, $rev:expr)),* $(,)?) => {
        [$(Rune { name: $name, character: $ch, keyword: $kw, meaning: $m, reversible: $rev }),*]
    };
}

/// The Elder Futhark, in three aettir of eight.
pub static ELDER_FUTHARK: [Rune; 24] = runes![
    ("Fehu", "ᚠ", "富", "努力が実り、物質的な豊かさが巡ってきます。", true),
    ("Uruz", "ᚢ", "力", "野牛のような生命力があふれ、困難を押し返せます。", true),
    ("Thurisaz", "ᚦ", "防御", "棘のように身を守りつつ、決断の時を見極めましょう。", true),
    ("Ansuz", "ᚨ", "啓示", "言葉や知らせを通じて大切な気づきが届きます。", true),
    ("Raidho", "ᚱ", "旅", "正しい道筋に乗り、物事が前へ進みます。", true),
    ("Kenaz", "ᚲ", "知識の炎", "内なる火が道を照らし、創造力が高まります。", true),
    ("Gebo", "ᚷ", "贈り物", "与え合うことで絆が深まり、調和が生まれます。", false),
    ("Wunjo", "ᚹ", "喜び", "願いが満たされ、安らぎと喜びが訪れます。", true),
    ("Hagalaz", "ᚺ", "破壊と再生", "避けられない変化が古いものを洗い流します。", false),
    ("Naudhiz", "ᚾ", "欠乏", "足りないものが、本当に必要なものを教えてくれます。", true),
    ("Isa", "ᛁ", "停止", "今は動かず、氷のように静かに待つ時です。", false),
    ("Jera", "ᛃ", "収穫", "蒔いた種が時を得て実ります。", false),
    ("Eihwaz", "ᛇ", "忍耐", "イチイの木のように粘り強く耐え抜く力があります。", false),
    ("Perthro", "ᛈ", "運命", "隠された可能性と偶然の導きが働いています。", true),
    ("Algiz", "ᛉ", "守護", "見えない守りがあなたを包んでいます。", true),
    ("Sowilo", "ᛊ", "太陽", "太陽の力が成功と健康をもたらします。", false),
    ("Tiwaz", "ᛏ", "正義", "正しさを貫く勇気が勝利を呼びます。", true),
    ("Berkano", "ᛒ", "成長", "白樺のように静かに新しい命が育ちます。", true),
    ("Ehwaz", "ᛖ", "協力", "信頼できる相棒とともに前進できます。", true),
    ("Mannaz", "ᛗ", "人間性", "自分と他者を理解することが鍵になります。", true),
    ("Laguz", "ᛚ", "直感", "水の流れのように直感に身を任せましょう。", true),
    ("Ingwaz", "ᛜ", "完成", "一つの段階が完成し、内なる力が満ちています。", false),
    ("Dagaz", "ᛞ", "覚醒", "夜明けのように劇的な転換と目覚めが訪れます。", false),
    ("Othala", "ᛟ", "継承", "家や伝統から受け継いだものが支えになります。", true),
];

/// Names of the Elder Futhark aettir.
pub const AETTIR: [&str; 3] = ["フレイの八文字", "ハガルの八文字", "テュールの八文字"];

/// The Younger Futhark.
pub static YOUNGER_FUTHARK: [Rune; 16] = runes![
    ("Fé", "ᚠ", "富", "財と家畜、巡ってくる豊かさを表します。", true),
    ("Úr", "ᚢ", "力", "鉄滓と霧雨、鍛えられた強さを表します。", true),
    ("Þurs", "ᚦ", "試練", "巨人の力、向き合うべき試練を表します。", true),
    ("Áss", "ᚬ", "神の言葉", "神々の知恵と導きを表します。", true),
    ("Reið", "ᚱ", "旅", "騎行、前進と移動を表します。", true),
    ("Kaun", "ᚴ", "傷", "痛みを通じた癒しと気づきを表します。", true),
    ("Hagall", "ᚼ", "雹", "突然の変化とその後の再生を表します。", false),
    ("Nauðr", "ᚾ", "必要", "窮乏の中で生まれる工夫を表します。", true),
    ("Íss", "ᛁ", "氷", "静止と集中を表します。", false),
    ("Ár", "ᛅ", "豊作", "実りの年と報いを表します。", false),
    ("Sól", "ᛋ", "太陽", "光と勝利を表します。", false),
    ("Týr", "ᛏ", "正義", "誓いと公正を表します。", true),
    ("Bjarkan", "ᛒ", "白樺", "再生と育みを表します。", true),
    ("Maðr", "ᛘ", "人", "人の営みと絆を表します。", true),
    ("Lögr", "ᛚ", "水", "流れと直感を表します。", true),
    ("Yr", "ᛦ", "イチイ", "弓と持久、最後に残るものを表します。", true),
];

/// The Anglo-Saxon Futhorc.
pub static ANGLO_SAXON_FUTHORC: [Rune; 29] = runes![
    ("Feoh", "ᚠ", "富", "富は分かち合うことで真価を発揮します。", true),
    ("Ur", "ᚢ", "勇気", "野牛の勇猛さが道を切り開きます。", true),
    ("Thorn", "ᚦ", "棘", "鋭い棘に触れぬよう慎重に進みましょう。", true),
    ("Os", "ᚩ", "言葉", "言葉が知恵の源となります。", true),
    ("Rad", "ᚱ", "旅", "旅路は準備した者に易しくなります。", true),
    ("Cen", "ᚳ", "松明", "松明の明かりが内なる知を照らします。", true),
    ("Gyfu", "ᚷ", "贈り物", "贈り物は誉れと支えになります。", false),
    ("Wynn", "ᚹ", "喜び", "悩みの少ない者に喜びが宿ります。", true),
    ("Haegl", "ᚻ", "雹", "雹はやがて水に変わり、恵みとなります。", false),
    ("Nyd", "ᚾ", "困窮", "困窮は早く耳を傾ける者を助けます。", true),
    ("Is", "ᛁ", "氷", "氷は美しくも冷たく、動きを止めます。", false),
    ("Ger", "ᛄ", "一年", "季節の巡りが実りをもたらします。", false),
    ("Eoh", "ᛇ", "イチイ", "深く根を張る木が家を守ります。", false),
    ("Peorth", "ᛈ", "遊戯", "笑いと遊びの場に幸運が潜みます。", true),
    ("Eolh", "ᛉ", "ヘラジカ草", "鋭い草が身を守る盾となります。", true),
    ("Sigel", "ᛋ", "太陽", "太陽は航海者の希望です。", false),
    ("Tiw", "ᛏ", "導きの星", "信義を守る者は道を外れません。", true),
    ("Beorc", "ᛒ", "樺", "実を結ばずとも枝は美しく伸びます。", true),
    ("Eh", "ᛖ", "馬", "良き馬は人に喜びと速さを与えます。", true),
    ("Mann", "ᛗ", "人", "人は互いに喜びとなります。", true),
    ("Lagu", "ᛚ", "海", "海の波は勇気を試します。", true),
    ("Ing", "ᛝ", "英雄", "英雄の名は東へと伝わっていきます。", false),
    ("Daeg", "ᛞ", "日", "日の光は富める者にも貧しき者にも等しく届きます。", false),
    ("Ethel", "ᛟ", "故郷", "故郷は誰にとっても大切な拠り所です。", true),
    ("Ac", "ᚪ", "樫", "樫の木は糧となり、船となります。", true),
    ("Aesc", "ᚫ", "トネリコ", "トネリコは揺るがずに立ち続けます。", true),
    ("Yr", "ᚣ", "弓", "弓は旅と戦いの友です。", true),
    ("Ior", "ᛡ", "両生の獣", "水と陸の両方に居場所を持てます。", false),
    ("Ear", "ᛠ", "大地", "すべてのものはやがて大地に還ります。", true),
];
