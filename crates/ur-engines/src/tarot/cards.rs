//! The 78-card deck.
//!
//! Major arcana carry hand-written text. Minor arcana are assembled from a
//! suit table (element, theme, category lines) and a rank table (keyword,
//! upright and reversed fragments), which keeps the 56 pip and court cards
//! consistent with each other.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ur_core::interpret::SymbolText;
use ur_core::{QuestionCategory, TimeOfDay};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 78;
/// Number of major arcana.
pub const MAJOR_COUNT: usize = 22;

/// Minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// ワンド (fire).
    Wands,
    /// カップ (water).
    Cups,
    /// ソード (air).
    Swords,
    /// ペンタクル (earth).
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    fn table(self) -> &'static SuitEntry {
        match self {
            Self::Wands => &SUITS[0],
            Self::Cups => &SUITS[1],
            Self::Swords => &SUITS[2],
            Self::Pentacles => &SUITS[3],
        }
    }

    /// Japanese name.
    pub fn label(self) -> &'static str {
        self.table().name
    }

    /// Classical element (Japanese).
    pub fn element(self) -> &'static str {
        self.table().element
    }

    /// Life area the suit governs.
    pub fn theme(self) -> &'static str {
        self.table().theme
    }
}

/// Major or minor arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The 22 trumps.
    Major,
    /// The 56 suit cards.
    Minor,
}

/// One tarot card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCard {
    /// Deck position, 0-77.
    pub id: usize,
    /// Japanese name.
    pub name: String,
    /// English name.
    pub name_en: String,
    /// Major or minor.
    pub arcana: Arcana,
    /// Suit, for minor arcana.
    pub suit: Option<Suit>,
    /// 0-21 for major arcana, 1-14 (ace to king) for minor.
    pub number: u8,
    /// Classical element (Japanese).
    pub element: &'static str,
    /// Keywords.
    pub keywords: Vec<&'static str>,
    /// Upright meanings.
    pub upright: Vec<String>,
    /// Reversed meaning.
    pub reversed: String,
    /// Love, career, money and health lines.
    pub love: String,
    /// Career line.
    pub career: String,
    /// Money line.
    pub money: String,
    /// Health line.
    pub health: String,
    /// Advice.
    pub advice: String,
}

impl TarotCard {
    /// Whether this card is a major arcanum.
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// The main keyword.
    pub fn primary_keyword(&self) -> &'static str {
        self.keywords.first().copied().unwrap_or("")
    }

    /// Category line, with `General` mapped to the first upright meaning.
    pub fn category_text(&self, category: QuestionCategory) -> &str {
        match category {
            QuestionCategory::Love | QuestionCategory::Relationship => &self.love,
            QuestionCategory::Career => &self.career,
            QuestionCategory::Money => &self.money,
            QuestionCategory::Health => &self.health,
            QuestionCategory::Spiritual => &self.advice,
            QuestionCategory::General => self.upright.first().map_or("", String::as_str),
        }
    }
}

/// A card as it fell: upright or reversed.
#[derive(Debug, Clone, Copy)]
pub struct DrawnCard<'a> {
    /// The card.
    pub card: &'a TarotCard,
    /// Whether it came up reversed.
    pub reversed: bool,
}

/// Position keys → templates; `{kw}` is the card's primary keyword.
const POSITION_TEMPLATES: &[(&str, &str, &str)] = &[
    ("message", "今日は「{kw}」があなたへの合図です。", "今日は「{kw}」の滞りに気づくことが合図です。"),
    ("present", "いま「{kw}」のエネルギーが中心にあります。", "いま「{kw}」が十分に働いていません。"),
    ("challenge", "「{kw}」との向き合い方が課題です。", "「{kw}」の欠如が障害となっています。"),
    ("root", "根本には「{kw}」の体験があります。", "根本には満たされなかった「{kw}」があります。"),
    ("past", "過去の「{kw}」が今のあなたを形作りました。", "過去の「{kw}」のつまずきが尾を引いています。"),
    ("potential", "「{kw}」が開花する可能性があります。", "「{kw}」を意識しないと可能性が閉じます。"),
    ("future", "近いうちに「{kw}」が訪れます。", "近いうちに「{kw}」の遅れが表面化します。"),
    ("self", "あなたは「{kw}」の姿勢で臨んでいます。", "あなたの「{kw}」が揺らいでいます。"),
    ("environment", "周囲から「{kw}」の影響を受けています。", "周囲の「{kw}」の欠如が影響しています。"),
    ("hopes", "心の奥で「{kw}」を望み、同時に恐れています。", "「{kw}」への恐れが希望を覆っています。"),
    ("outcome", "最終的に「{kw}」へと至るでしょう。", "このままでは「{kw}」が実りにくいでしょう。"),
    ("partner", "相手は「{kw}」の思いを抱いています。", "相手の「{kw}」は今、揺れています。"),
    ("option_a", "Aを選ぶと「{kw}」が得られます。", "Aを選ぶと「{kw}」の停滞を招きます。"),
    ("option_b", "Bを選ぶと「{kw}」が得られます。", "Bを選ぶと「{kw}」の停滞を招きます。"),
    ("advice", "判断の鍵は「{kw}」です。", "判断の鍵は「{kw}」の見直しです。"),
];

impl SymbolText for DrawnCard<'_> {
    fn name(&self) -> &str {
        &self.card.name
    }

    fn general_meanings(&self) -> Vec<&str> {
        if self.reversed {
            vec![self.card.reversed.as_str()]
        } else {
            self.card.upright.iter().map(String::as_str).collect()
        }
    }

    fn position_meaning(&self, key: &str) -> Option<Cow<'_, str>> {
        POSITION_TEMPLATES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, upright, reversed)| {
                let template = if self.reversed { reversed } else { upright };
                Cow::Owned(template.replace("{kw}", self.card.primary_keyword()))
            })
    }

    fn category_meaning(&self, category: QuestionCategory) -> Option<Cow<'_, str>> {
        let text = self.card.category_text(category);
        if text.is_empty() {
            None
        } else if self.reversed {
            Some(Cow::Owned(format!("逆位置のため慎重に。{text}")))
        } else {
            Some(Cow::Borrowed(text))
        }
    }

    fn time_meaning(&self, time: TimeOfDay) -> Option<Cow<'_, str>> {
        let text = match (self.card.suit, time) {
            (None, TimeOfDay::Morning) => "この大きな流れを一日の指針にしてください。",
            (None, TimeOfDay::Afternoon) => "重要な出来事が動き出す兆しに注意しましょう。",
            (None, TimeOfDay::Evening) => "一日を振り返り、運命の示唆を静かに受け取りましょう。",
            (Some(Suit::Wands), TimeOfDay::Morning) => "朝の勢いを行動に変えましょう。",
            (Some(Suit::Wands), TimeOfDay::Afternoon) => "情熱が空回りしないよう優先順位を。",
            (Some(Suit::Wands), TimeOfDay::Evening) => "明日への意欲を静かに温めましょう。",
            (Some(Suit::Cups), TimeOfDay::Morning) => "素直な気持ちで人と接しましょう。",
            (Some(Suit::Cups), TimeOfDay::Afternoon) => "感情の波に流されず受け止めましょう。",
            (Some(Suit::Cups), TimeOfDay::Evening) => "大切な人との時間が心を満たします。",
            (Some(Suit::Swords), TimeOfDay::Morning) => "頭が冴える時間に決断を。",
            (Some(Suit::Swords), TimeOfDay::Afternoon) => "言葉選びに気を配りましょう。",
            (Some(Suit::Swords), TimeOfDay::Evening) => "考えすぎず、早めに休みましょう。",
            (Some(Suit::Pentacles), TimeOfDay::Morning) => "具体的な計画を立てるのに適しています。",
            (Some(Suit::Pentacles), TimeOfDay::Afternoon) => "着実な作業が成果につながります。",
            (Some(Suit::Pentacles), TimeOfDay::Evening) => "家計や体調を見直しましょう。",
        };
        Some(Cow::Borrowed(text))
    }
}

struct MajorEntry {
    name: &'static str,
    name_en: &'static str,
    element: &'static str,
    keywords: [&'static str; 3],
    upright: [&'static str; 2],
    reversed: &'static str,
    love: &'static str,
    career: &'static str,
    money: &'static str,
    health: &'static str,
    advice: &'static str,
}

const MAJOR_ARCANA: [MajorEntry; MAJOR_COUNT] = [
    MajorEntry {
        name: "愚者",
        name_en: "The Fool",
        element: "風",
        keywords: ["自由", "冒険", "無垢"],
        upright: [
            "新しい旅の始まりを告げています。恐れずに未知へ踏み出す時です。",
            "型にはまらない自由な発想が道を開きます。",
        ],
        reversed: "無計画さや軽率さに注意が必要です。足元を確かめてから進みましょう。",
        love: "新しい出会いや、関係に新鮮な風が吹き込みます。",
        career: "未経験の分野への挑戦が吉と出ています。",
        money: "衝動的な出費に注意しつつ、新しい収入源の芽を探しましょう。",
        health: "身体を動かし、気分転換を図ることで活力が戻ります。",
        advice: "結果を恐れず、心の声に従って最初の一歩を踏み出してください。",
    },
    MajorEntry {
        name: "魔術師",
        name_en: "The Magician",
        element: "風",
        keywords: ["創造", "意志", "技術"],
        upright: [
            "必要な道具はすべて揃っています。意志の力で現実を動かせる時です。",
            "才能と技術を発揮し、物事を始めるのに最適です。",
        ],
        reversed: "能力を過信したり、言葉だけで終わったりしやすい時です。",
        love: "積極的なアプローチが実を結びます。",
        career: "企画力や交渉力が高く評価されます。",
        money: "スキルを収入に変える好機です。",
        health: "意識して生活習慣を整えると効果がすぐに表れます。",
        advice: "持っている力を信じ、具体的な行動に移しましょう。",
    },
    MajorEntry {
        name: "女教皇",
        name_en: "The High Priestess",
        element: "水",
        keywords: ["直感", "神秘", "知恵"],
        upright: [
            "静かな直感が真実を教えてくれます。内なる声に耳を澄ませましょう。",
            "表に出ない知識や秘密が鍵を握っています。",
        ],
        reversed: "感情を抑え込みすぎたり、直感を無視したりしています。",
        love: "言葉にならない思いを大切に育てる時期です。",
        career: "研究や専門知識を深めることが評価につながります。",
        money: "堅実な判断で無駄を省けます。",
        health: "心の疲れに気づき、休息を取りましょう。",
        advice: "急がず、答えが自然に浮かぶのを待ちましょう。",
    },
    MajorEntry {
        name: "女帝",
        name_en: "The Empress",
        element: "地",
        keywords: ["豊穣", "母性", "美"],
        upright: [
            "豊かさと実りに恵まれる時です。育ててきたものが花開きます。",
            "五感を満たす喜びが運気を高めます。",
        ],
        reversed: "過保護や浪費、停滞した豊かさに注意しましょう。",
        love: "愛情に満ちた穏やかな関係が育まれます。",
        career: "創造的な仕事やチームを育てる役割で力を発揮します。",
        money: "収入が安定し、ゆとりが生まれます。",
        health: "心身ともに充実し、回復力が高まっています。",
        advice: "自分自身を慈しみ、豊かさを受け取ることを許してください。",
    },
    MajorEntry {
        name: "皇帝",
        name_en: "The Emperor",
        element: "火",
        keywords: ["権威", "安定", "統率"],
        upright: [
            "秩序と責任感が成功を支えます。リーダーシップを発揮する時です。",
            "揺るがない土台を築くことで目標に近づきます。",
        ],
        reversed: "支配的になったり、頑固さが裏目に出たりしています。",
        love: "頼りがいのある態度が信頼を深めます。",
        career: "昇進や責任ある立場が巡ってきます。",
        money: "計画的な資産管理が実を結びます。",
        health: "規則正しい生活が体調を安定させます。",
        advice: "明確なルールと意志を持って物事を進めましょう。",
    },
    MajorEntry {
        name: "教皇",
        name_en: "The Hierophant",
        element: "地",
        keywords: ["伝統", "教え", "信頼"],
        upright: [
            "信頼できる師や伝統的な方法が助けになります。",
            "誠実さと道徳心が周囲の信頼を集めます。",
        ],
        reversed: "形式にとらわれすぎたり、独善的になったりしています。",
        love: "誠実な交際や正式な約束に縁があります。",
        career: "組織のルールに沿うことで評価が高まります。",
        money: "堅実な貯蓄や保険の見直しが吉です。",
        health: "専門家の助言に従うと良い結果が得られます。",
        advice: "経験者の知恵を謙虚に学びましょう。",
    },
    MajorEntry {
        name: "恋人",
        name_en: "The Lovers",
        element: "風",
        keywords: ["選択", "調和", "愛"],
        upright: [
            "心から望むものを選ぶ時です。価値観の一致が幸福をもたらします。",
            "深い絆と調和のとれた関係が生まれます。",
        ],
        reversed: "迷いや誘惑、価値観のずれが生じやすい時です。",
        love: "運命的な出会いや関係の深まりが期待できます。",
        career: "協力関係が成功の鍵となります。",
        money: "共同での投資や出費は慎重に選びましょう。",
        health: "心の満足が体調にも良い影響を与えます。",
        advice: "損得ではなく、心が喜ぶ方を選んでください。",
    },
    MajorEntry {
        name: "戦車",
        name_en: "The Chariot",
        element: "水",
        keywords: ["勝利", "前進", "意志力"],
        upright: [
            "強い意志で障害を乗り越え、勝利をつかむ時です。",
            "相反する力をまとめ上げ、目標へ一直線に進めます。",
        ],
        reversed: "方向を見失ったり、強引さが空回りしたりしています。",
        love: "積極的に気持ちを伝えることで進展します。",
        career: "競争に勝ち抜き、成果を上げられます。",
        money: "目標を定めた貯蓄が順調に進みます。",
        health: "活動的に過ごすことで体力が向上します。",
        advice: "迷いを断ち切り、手綱をしっかり握って進みましょう。",
    },
    MajorEntry {
        name: "力",
        name_en: "Strength",
        element: "火",
        keywords: ["勇気", "忍耐", "内なる強さ"],
        upright: [
            "優しさと忍耐が困難を和らげます。内なる強さを信じましょう。",
            "感情をうまく扱うことで状況を好転させられます。",
        ],
        reversed: "自信を失ったり、感情に振り回されたりしています。",
        love: "寛容な心が関係を安定させます。",
        career: "粘り強さが周囲の信頼を得ます。",
        money: "衝動を抑えることで財運が安定します。",
        health: "回復に向けた忍耐強い取り組みが実を結びます。",
        advice: "力ではなく、思いやりで状況を導いてください。",
    },
    MajorEntry {
        name: "隠者",
        name_en: "The Hermit",
        element: "地",
        keywords: ["内省", "探求", "孤独"],
        upright: [
            "一人の時間が答えを照らします。内側を見つめる時です。",
            "深い探求が本当の知恵へと導きます。",
        ],
        reversed: "孤立しすぎたり、現実から目をそらしたりしています。",
        love: "焦らず、自分の本当の気持ちを確かめましょう。",
        career: "専門性を深める学びが将来の財産になります。",
        money: "支出を見直し、本当に必要なものを見極めましょう。",
        health: "静養と睡眠を優先してください。",
        advice: "外の声ではなく、内なる灯りに従いましょう。",
    },
    MajorEntry {
        name: "運命の輪",
        name_en: "Wheel of Fortune",
        element: "火",
        keywords: ["転機", "運命", "循環"],
        upright: [
            "運命の歯車が好転し始めています。チャンスの波に乗りましょう。",
            "偶然に見える出来事が大きな転機となります。",
        ],
        reversed: "タイミングのずれや、流れの停滞を感じやすい時です。",
        love: "思いがけない出会いや再会が訪れます。",
        career: "環境の変化が追い風となります。",
        money: "臨時収入や好機に恵まれます。",
        health: "生活リズムの変化に柔軟に対応しましょう。",
        advice: "変化を恐れず、流れに身を任せてみましょう。",
    },
    MajorEntry {
        name: "正義",
        name_en: "Justice",
        element: "風",
        keywords: ["公正", "均衡", "真実"],
        upright: [
            "公正な判断が正しい結果を導きます。因果が明らかになる時です。",
            "バランスを取ることで物事が整います。",
        ],
        reversed: "不公平感や偏った判断に注意が必要です。",
        love: "対等な関係を意識することで絆が深まります。",
        career: "契約や評価が正当に下されます。",
        money: "収支のバランスを整えましょう。",
        health: "偏りのない食生活が鍵です。",
        advice: "感情ではなく事実に基づいて判断してください。",
    },
    MajorEntry {
        name: "吊るされた男",
        name_en: "The Hanged Man",
        element: "水",
        keywords: ["忍耐", "視点の転換", "献身"],
        upright: [
            "立ち止まることで新しい視点が得られます。",
            "一時的な犠牲が大きな気づきをもたらします。",
        ],
        reversed: "無意味な我慢や停滞から抜け出せずにいます。",
        love: "相手の立場に立って考えると道が開けます。",
        career: "今は準備期間と捉え、力を蓄えましょう。",
        money: "大きな動きは控え、様子を見るのが賢明です。",
        health: "無理をせず、身体の声を聞きましょう。",
        advice: "見方を逆さにすれば、答えが見えてきます。",
    },
    MajorEntry {
        name: "死神",
        name_en: "Death",
        element: "水",
        keywords: ["終わりと再生", "変容", "手放し"],
        upright: [
            "一つの章が終わり、新しい章が始まります。",
            "古いものを手放すことで再生が訪れます。",
        ],
        reversed: "変化を拒み、終わったものに執着しています。",
        love: "関係の形が大きく変わる節目です。",
        career: "役割や環境の刷新が成長をもたらします。",
        money: "不要な契約や習慣を整理しましょう。",
        health: "生活習慣を根本から改める好機です。",
        advice: "終わりを受け入れることが、始まりへの扉です。",
    },
    MajorEntry {
        name: "節制",
        name_en: "Temperance",
        element: "火",
        keywords: ["調和", "節度", "統合"],
        upright: [
            "異なるものを上手に混ぜ合わせ、調和を生み出せます。",
            "穏やかなペースが最良の結果を導きます。",
        ],
        reversed: "バランスを欠き、極端に走りやすくなっています。",
        love: "穏やかな思いやりが関係を育てます。",
        career: "調整役として力を発揮できます。",
        money: "無理のない計画で安定します。",
        health: "中庸を保つ生活が回復を早めます。",
        advice: "焦らず、少しずつ混ぜ合わせていきましょう。",
    },
    MajorEntry {
        name: "悪魔",
        name_en: "The Devil",
        element: "地",
        keywords: ["執着", "誘惑", "束縛"],
        upright: [
            "欲望や執着に縛られていないか見直す時です。",
            "誘惑の裏にある本当の欲求に気づきましょう。",
        ],
        reversed: "束縛から解放され、自由を取り戻しつつあります。",
        love: "依存的な関係に注意が必要です。",
        career: "目先の利益に飛びつかないようにしましょう。",
        money: "浪費や借入の誘惑に注意してください。",
        health: "悪習慣を断つ意識が大切です。",
        advice: "鎖は自分で外せることを思い出してください。",
    },
    MajorEntry {
        name: "塔",
        name_en: "The Tower",
        element: "火",
        keywords: ["崩壊", "啓示", "急変"],
        upright: [
            "予期せぬ出来事が古い構造を壊し、真実を明らかにします。",
            "突然の変化は、より確かな土台を築くための機会です。",
        ],
        reversed: "避けられない変化を先延ばしにしています。",
        love: "関係の見直しを迫られる出来事があります。",
        career: "計画の大幅な変更に柔軟に対応しましょう。",
        money: "急な出費に備えておきましょう。",
        health: "無理が表面化する前に休みましょう。",
        advice: "崩れたものの跡に、本当に必要なものを建て直してください。",
    },
    MajorEntry {
        name: "星",
        name_en: "The Star",
        element: "風",
        keywords: ["希望", "癒し", "インスピレーション"],
        upright: [
            "希望の光が差し込み、癒しが訪れます。",
            "理想を信じ続けることで願いが叶います。",
        ],
        reversed: "希望を見失い、悲観的になりやすい時です。",
        love: "純粋な思いが相手に届きます。",
        career: "創造的なアイデアが評価されます。",
        money: "長期的な目標に向けた計画が実を結びます。",
        health: "心身の回復が順調に進みます。",
        advice: "夜空の星のように、静かに希望を灯し続けてください。",
    },
    MajorEntry {
        name: "月",
        name_en: "The Moon",
        element: "水",
        keywords: ["不安", "幻想", "潜在意識"],
        upright: [
            "先の見えない不安があっても、直感が道を照らします。",
            "曖昧な状況の中に隠された真実があります。",
        ],
        reversed: "霧が晴れ、不安の正体が見えてきます。",
        love: "相手の本心を確かめるまで結論を急がないでください。",
        career: "情報をよく確認し、誤解を避けましょう。",
        money: "不確かな儲け話には近づかないでください。",
        health: "睡眠の質を見直しましょう。",
        advice: "夢や直感が伝えるメッセージに注意を向けましょう。",
    },
    MajorEntry {
        name: "太陽",
        name_en: "The Sun",
        element: "火",
        keywords: ["成功", "喜び", "生命力"],
        upright: [
            "明るい成功と喜びに満ちた時です。",
            "ありのままの自分を表現することで輝けます。",
        ],
        reversed: "一時的に勢いが弱まりますが、本質的な運気は明るいままです。",
        love: "幸福感に満ちた関係が築けます。",
        career: "努力が認められ、大きな成果を上げます。",
        money: "収入アップや良い知らせが期待できます。",
        health: "活力に満ち、健康運は最高潮です。",
        advice: "遠慮せず、光の中へ出ていきましょう。",
    },
    MajorEntry {
        name: "審判",
        name_en: "Judgement",
        element: "火",
        keywords: ["復活", "覚醒", "決断"],
        upright: [
            "過去の努力が報われ、新たな段階へと呼び出されています。",
            "眠っていた可能性が目覚める時です。",
        ],
        reversed: "過去への後悔が決断を鈍らせています。",
        love: "復縁や関係の再生に縁があります。",
        career: "再挑戦が成功につながります。",
        money: "過去の投資や努力が回収されます。",
        health: "回復の兆しがはっきりと表れます。",
        advice: "内なる呼び声に応え、決断してください。",
    },
    MajorEntry {
        name: "世界",
        name_en: "The World",
        element: "地",
        keywords: ["完成", "統合", "達成"],
        upright: [
            "一つのサイクルが完成し、大きな達成が訪れます。",
            "すべてが調和し、望んだ場所に立っています。",
        ],
        reversed: "あと一歩のところで完成が遅れています。",
        love: "理想的な関係の完成や結婚に縁があります。",
        career: "大きなプロジェクトが成功裏に完了します。",
        money: "経済的な安定と充足が得られます。",
        health: "心身のバランスが最良の状態です。",
        advice: "達成を祝い、次の旅への準備を始めましょう。",
    },
];

struct SuitEntry {
    name: &'static str,
    name_en: &'static str,
    element: &'static str,
    theme: &'static str,
    love: &'static str,
    career: &'static str,
    money: &'static str,
    health: &'static str,
}

const SUITS: [SuitEntry; 4] = [
    SuitEntry {
        name: "ワンド",
        name_en: "Wands",
        element: "火",
        theme: "情熱と行動",
        love: "情熱的なアプローチが関係を動かします。",
        career: "意欲的な挑戦が道を切り開きます。",
        money: "行動力が収入の機会を呼び込みます。",
        health: "エネルギーの使いすぎに注意しましょう。",
    },
    SuitEntry {
        name: "カップ",
        name_en: "Cups",
        element: "水",
        theme: "感情と愛情",
        love: "感情の通い合いが深まります。",
        career: "人間関係の良さが仕事を支えます。",
        money: "気持ちのこもった使い方が満足をもたらします。",
        health: "心のケアが身体の調子を整えます。",
    },
    SuitEntry {
        name: "ソード",
        name_en: "Swords",
        element: "風",
        theme: "思考と葛藤",
        love: "率直な対話が誤解を解きます。",
        career: "論理的な判断が問題を解決します。",
        money: "冷静な分析で損失を避けられます。",
        health: "考えすぎによる緊張をほぐしましょう。",
    },
    SuitEntry {
        name: "ペンタクル",
        name_en: "Pentacles",
        element: "地",
        theme: "物質と現実",
        love: "安定した信頼関係が育ちます。",
        career: "着実な積み重ねが評価されます。",
        money: "堅実な管理が財を育てます。",
        health: "規則正しい生活が健康の基盤です。",
    },
];

struct RankEntry {
    name: &'static str,
    name_en: &'static str,
    keyword: &'static str,
    upright: &'static str,
    reversed: &'static str,
    advice: &'static str,
}

const RANKS: [RankEntry; 14] = [
    RankEntry {
        name: "エース",
        name_en: "Ace",
        keyword: "始まり",
        upright: "新しい可能性の種が芽吹いています。",
        reversed: "始まりが遅れ、機会を逃しやすい時です。",
        advice: "小さな一歩から始めましょう。",
    },
    RankEntry {
        name: "2",
        name_en: "Two",
        keyword: "選択",
        upright: "二つの道の間で均衡を探る時です。",
        reversed: "決断を先延ばしにして迷いが深まっています。",
        advice: "両方の長所を書き出して比べましょう。",
    },
    RankEntry {
        name: "3",
        name_en: "Three",
        keyword: "成長",
        upright: "協力によって物事が広がっていきます。",
        reversed: "足並みがそろわず、成長が鈍っています。",
        advice: "仲間と目標を共有しましょう。",
    },
    RankEntry {
        name: "4",
        name_en: "Four",
        keyword: "安定",
        upright: "基盤が固まり、ひと息つける時です。",
        reversed: "安定が停滞に変わりつつあります。",
        advice: "守りと休息の時間を確保しましょう。",
    },
    RankEntry {
        name: "5",
        name_en: "Five",
        keyword: "葛藤",
        upright: "変化に伴う摩擦や試練が生じています。",
        reversed: "争いが収まり、和解の糸口が見えます。",
        advice: "勝ち負けにこだわらず、学びを拾いましょう。",
    },
    RankEntry {
        name: "6",
        name_en: "Six",
        keyword: "調和",
        upright: "困難を越え、調和と回復が訪れます。",
        reversed: "回復が遅れ、過去を引きずっています。",
        advice: "受けた恩を次へと巡らせましょう。",
    },
    RankEntry {
        name: "7",
        name_en: "Seven",
        keyword: "試練",
        upright: "立場を守るための工夫と粘りが求められます。",
        reversed: "迷いや不安から守りが崩れやすい時です。",
        advice: "信念を持って踏みとどまりましょう。",
    },
    RankEntry {
        name: "8",
        name_en: "Eight",
        keyword: "集中",
        upright: "物事が素早く動き、集中力が成果を生みます。",
        reversed: "焦りから手順を飛ばしやすくなっています。",
        advice: "一つのことに集中しましょう。",
    },
    RankEntry {
        name: "9",
        name_en: "Nine",
        keyword: "忍耐",
        upright: "達成は目前です。最後まで気を抜かないでください。",
        reversed: "疲れや不安が積もり、余裕を失っています。",
        advice: "ここまでの歩みを信じましょう。",
    },
    RankEntry {
        name: "10",
        name_en: "Ten",
        keyword: "完結",
        upright: "一つの流れが完結し、結果を受け取る時です。",
        reversed: "抱え込みすぎて重荷になっています。",
        advice: "手放せるものを手放しましょう。",
    },
    RankEntry {
        name: "ペイジ",
        name_en: "Page",
        keyword: "学び",
        upright: "新しい知らせや学びの機会が届きます。",
        reversed: "未熟さや準備不足が表れやすい時です。",
        advice: "好奇心を大切に学び続けましょう。",
    },
    RankEntry {
        name: "ナイト",
        name_en: "Knight",
        keyword: "探求",
        upright: "目標に向かって勢いよく進む時です。",
        reversed: "勢い任せで方向を誤りやすくなっています。",
        advice: "速さより方向を確かめましょう。",
    },
    RankEntry {
        name: "クイーン",
        name_en: "Queen",
        keyword: "受容",
        upright: "成熟した受容力で周囲を支えられます。",
        reversed: "感情的になり、受け止める余裕を失っています。",
        advice: "まず自分を満たしてから人を支えましょう。",
    },
    RankEntry {
        name: "キング",
        name_en: "King",
        keyword: "統率",
        upright: "経験に裏打ちされた判断力で場を導けます。",
        reversed: "権威に頼りすぎ、柔軟さを欠いています。",
        advice: "責任を引き受け、公平に導きましょう。",
    },
];

static DECK: LazyLock<Vec<TarotCard>> = LazyLock::new(build_deck);

fn build_deck() -> Vec<TarotCard> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for (i, entry) in MAJOR_ARCANA.iter().enumerate() {
        deck.push(TarotCard {
            id: i,
            name: entry.name.to_string(),
            name_en: entry.name_en.to_string(),
            arcana: Arcana::Major,
            suit: None,
            number: i as u8,
            element: entry.element,
            keywords: entry.keywords.to_vec(),
            upright: entry.upright.iter().map(|s| (*s).to_string()).collect(),
            reversed: entry.reversed.to_string(),
            love: entry.love.to_string(),
            career: entry.career.to_string(),
            money: entry.money.to_string(),
            health: entry.health.to_string(),
            advice: entry.advice.to_string(),
        });
    }

    for suit in Suit::all() {
        let s = suit.table();
        for (r, rank) in RANKS.iter().enumerate() {
            deck.push(TarotCard {
                id: deck.len(),
                name: format!("{}の{}", s.name, rank.name),
                name_en: format!("{} of {}", rank.name_en, s.name_en),
                arcana: Arcana::Minor,
                suit: Some(*suit),
                number: (r + 1) as u8,
                element: s.element,
                keywords: vec![rank.keyword, s.theme],
                upright: vec![
                    format!("{}の領域で、{}", s.theme, rank.upright),
                    format!("{}のエネルギーが「{}」として働いています。", s.element, rank.keyword),
                ],
                reversed: format!("{}の領域で、{}", s.theme, rank.reversed),
                love: s.love.to_string(),
                career: s.career.to_string(),
                money: s.money.to_string(),
                health: s.health.to_string(),
                advice: rank.advice.to_string(),
            });
        }
    }

    deck
}

/// The full deck in id order.
pub fn deck() -> &'static [TarotCard] {
    &DECK
}

/// Look up a card by id. `None` for anything outside `0..78`.
pub fn get_tarot_card(id: usize) -> Option<&'static TarotCard> {
    DECK.get(id)
}
